use tracing::{debug, info};

use super::camera::Camera;
use super::config::ViewConfig;
use super::grid::{TileGrid, TileGridError};
use super::input::{InputDirector, InputEvent, InputQueue};
use super::rendering::{compute_draw_list, visit_layer_cells, DrawInstruction, DrawSink};

/// The frame driver pushes input into [`Scroller::input_mut`] between frames,
/// then calls [`Scroller::update`] followed by [`Scroller::render`].
#[derive(Debug, Clone)]
pub struct Scroller {
    grid: TileGrid,
    camera: Camera,
    director: InputDirector,
    input: InputQueue,
    debug_overlay: bool,
}

impl Scroller {
    pub fn new(grid: TileGrid, config: &ViewConfig) -> Self {
        let camera = Camera::new(&grid, config.viewport(), config.camera_speed_px_per_second);
        let (world_width, world_height) = grid.world_size_px();
        info!(
            columns = grid.columns(),
            rows = grid.rows(),
            layers = grid.layer_count(),
            tile_size_px = grid.tile_size_px(),
            world_width,
            world_height,
            "tile_grid_loaded"
        );
        Self {
            grid,
            camera,
            director: InputDirector::new(),
            input: InputQueue::new(config.bindings.clone()),
            debug_overlay: false,
        }
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn director(&self) -> &InputDirector {
        &self.director
    }

    pub fn debug_overlay(&self) -> bool {
        self.debug_overlay
    }

    pub fn input_mut(&mut self) -> &mut InputQueue {
        &mut self.input
    }

    pub fn update(&mut self, delta_seconds: f32) {
        for event in self.input.drain() {
            match event {
                InputEvent::Press(key) => self.director.press(key),
                InputEvent::Release(key) => self.director.release(key),
                InputEvent::ToggleDebug => {
                    self.debug_overlay = !self.debug_overlay;
                    info!(debug_overlay = self.debug_overlay, "debug_overlay_toggled");
                }
            }
        }

        let direction = self.director.active_direction();
        self.camera.move_by(delta_seconds, direction);
        debug!(
            dx = direction.dx(),
            dy = direction.dy(),
            x = self.camera.position().x,
            y = self.camera.position().y,
            "camera_updated"
        );
    }

    /// Returns the number of tiles drawn. With the debug overlay on, every
    /// visited cell is outlined right after its tile, empty cells included.
    pub fn render<S: DrawSink + ?Sized>(&self, sink: &mut S) -> Result<usize, TileGridError> {
        let mut drawn = 0;
        for layer in 0..self.grid.layer_count() {
            visit_layer_cells(&self.grid, &self.camera, layer, |dest, instruction| {
                if let Some(instruction) = instruction {
                    sink.draw_tile(&instruction);
                    drawn += 1;
                }
                if self.debug_overlay {
                    sink.stroke_rect(dest);
                }
            })?;
        }
        Ok(drawn)
    }

    pub fn frame_draw_list(&self) -> Result<Vec<Vec<DrawInstruction>>, TileGridError> {
        (0..self.grid.layer_count())
            .map(|layer| compute_draw_list(&self.grid, &self.camera, layer))
            .collect()
    }
}
