use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoopMetricsSnapshot {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub draws_per_frame: f32,
}

// Time advances only through the recorded frame deltas.
#[derive(Debug)]
pub struct MetricsAccumulator {
    interval: Duration,
    elapsed: Duration,
    frames: u32,
    draws: u64,
}

impl MetricsAccumulator {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            frames: 0,
            draws: 0,
        }
    }

    pub fn record_frame(&mut self, frame_dt: Duration, draws: usize) {
        self.elapsed = self.elapsed.saturating_add(frame_dt);
        self.frames = self.frames.saturating_add(1);
        self.draws = self.draws.saturating_add(draws as u64);
    }

    pub fn maybe_snapshot(&mut self) -> Option<LoopMetricsSnapshot> {
        if self.elapsed < self.interval || self.frames == 0 {
            return None;
        }

        let elapsed_seconds = self.elapsed.as_secs_f32().max(f32::EPSILON);
        let frames = self.frames as f32;
        let snapshot = LoopMetricsSnapshot {
            fps: frames / elapsed_seconds,
            frame_time_ms: (elapsed_seconds / frames) * 1000.0,
            draws_per_frame: self.draws as f32 / frames,
        };

        self.elapsed = Duration::ZERO;
        self.frames = 0;
        self.draws = 0;

        Some(snapshot)
    }
}
