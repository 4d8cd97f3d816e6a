use std::process::ExitCode;
use std::time::Duration;

use tilescroll_engine::{
    DrawInstruction, DrawSink, InputQueue, MetricsAccumulator, PixelRect, Scroller, TileGridError,
    Vec2, ViewConfig,
};
use tracing::{error, info, warn};

use super::bootstrap::AppWiring;

const TARGET_FPS: u32 = 60;
const METRICS_LOG_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyEdge {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ScriptedKey {
    pub(crate) frame: u32,
    pub(crate) edge: KeyEdge,
    pub(crate) name: &'static str,
}

const fn key(frame: u32, edge: KeyEdge, name: &'static str) -> ScriptedKey {
    ScriptedKey { frame, edge, name }
}

/// Input replayed by the headless driver: a tour of the map with an
/// unbound key, a debug overlay window and a stalled frame.
const DEMO_SCRIPT: &[ScriptedKey] = &[
    key(0, KeyEdge::Down, "ArrowRight"),
    key(30, KeyEdge::Down, "ArrowDown"),
    key(90, KeyEdge::Up, "ArrowDown"),
    key(120, KeyEdge::Down, "Shift"),
    key(150, KeyEdge::Up, "d"),
    key(200, KeyEdge::Up, "ArrowRight"),
    key(210, KeyEdge::Down, "ArrowDown"),
    key(400, KeyEdge::Up, "ArrowDown"),
    key(410, KeyEdge::Down, "ArrowLeft"),
    key(500, KeyEdge::Up, "d"),
    key(590, KeyEdge::Up, "ArrowLeft"),
];

/// Frame whose wall-clock delta simulates a backgrounded tab.
const STALL_FRAME: u32 = 300;
const STALL_DELTA: Duration = Duration::from_millis(1500);

pub(crate) fn run(app: AppWiring) -> ExitCode {
    let AppWiring {
        config,
        mut scroller,
        frame_count,
    } = app;

    match run_frames(&mut scroller, &config, DEMO_SCRIPT, frame_count) {
        Ok(report) => {
            info!(
                frames = report.frames,
                tiles_drawn = report.tiles_drawn,
                outlines_drawn = report.outlines_drawn,
                camera_x = report.final_position.x,
                camera_y = report.final_position.y,
                "shutdown"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "render_failed");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RunReport {
    pub(crate) frames: u32,
    pub(crate) tiles_drawn: u64,
    pub(crate) outlines_drawn: u64,
    pub(crate) final_position: Vec2,
}

/// Sink that only tallies work; the headless driver has no pixels to fill.
#[derive(Debug, Default)]
struct CountingSink {
    tiles: u64,
    outlines: u64,
}

impl DrawSink for CountingSink {
    fn draw_tile(&mut self, _instruction: &DrawInstruction) {
        self.tiles += 1;
    }

    fn stroke_rect(&mut self, _rect: PixelRect) {
        self.outlines += 1;
    }
}

pub(crate) fn run_frames(
    scroller: &mut Scroller,
    config: &ViewConfig,
    script: &[ScriptedKey],
    frame_count: u32,
) -> Result<RunReport, TileGridError> {
    let fixed_dt = Duration::from_secs_f64(1.0 / f64::from(TARGET_FPS));
    let mut sink = CountingSink::default();
    let mut metrics = MetricsAccumulator::new(METRICS_LOG_INTERVAL);

    for frame in 0..frame_count {
        for scripted in script.iter().filter(|scripted| scripted.frame == frame) {
            deliver_key(scroller.input_mut(), scripted);
        }

        let raw_dt = if frame == STALL_FRAME {
            STALL_DELTA
        } else {
            fixed_dt
        };
        let raw_seconds = raw_dt.as_secs_f32();
        let delta_seconds = config.clamp_frame_delta(raw_seconds);
        if delta_seconds < raw_seconds {
            warn!(
                frame,
                raw_ms = raw_dt.as_millis() as u64,
                clamped_ms = (delta_seconds * 1000.0) as u64,
                "frame_delta_clamped"
            );
        }

        scroller.update(delta_seconds);
        let drawn = scroller.render(&mut sink)?;
        metrics.record_frame(raw_dt, drawn);

        if let Some(snapshot) = metrics.maybe_snapshot() {
            let position = scroller.camera().position();
            info!(
                fps = snapshot.fps,
                frame_time_ms = snapshot.frame_time_ms,
                draws_per_frame = snapshot.draws_per_frame,
                camera_x = position.x,
                camera_y = position.y,
                debug_overlay = scroller.debug_overlay(),
                "loop_metrics"
            );
        }
    }

    Ok(RunReport {
        frames: frame_count,
        tiles_drawn: sink.tiles,
        outlines_drawn: sink.outlines,
        final_position: scroller.camera().position(),
    })
}

fn deliver_key(queue: &mut InputQueue, scripted: &ScriptedKey) {
    let delivered = match scripted.edge {
        KeyEdge::Down => queue.push_key_down(scripted.name),
        KeyEdge::Up => queue.push_key_up(scripted.name),
    };
    if let Err(err) = delivered {
        warn!(error = %err, edge = ?scripted.edge, "input_key_ignored");
    }
}
