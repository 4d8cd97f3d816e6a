use super::grid::TileGrid;
use super::input::Direction;
use super::rendering::Viewport;

pub const DEFAULT_CAMERA_SPEED_PX_PER_SECOND: f32 = 256.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Top-left world pixel of the viewport, kept within
/// `0 <= position <= world - viewport` per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec2,
    viewport: Viewport,
    speed_px_per_second: f32,
    max_position: Vec2,
}

impl Camera {
    pub fn new(grid: &TileGrid, viewport: Viewport, speed_px_per_second: f32) -> Self {
        let (world_width, world_height) = grid.world_size_px();
        Self {
            position: Vec2::default(),
            viewport,
            speed_px_per_second,
            max_position: Vec2 {
                x: (world_width - viewport.width as f32).max(0.0),
                y: (world_height - viewport.height as f32).max(0.0),
            },
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = Vec2 {
            x: clamp_axis(position.x, self.position.x, self.max_position.x),
            y: clamp_axis(position.y, self.position.y, self.max_position.y),
        };
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn speed_px_per_second(&self) -> f32 {
        self.speed_px_per_second
    }

    pub fn max_position(&self) -> Vec2 {
        self.max_position
    }

    pub fn move_by(&mut self, delta_seconds: f32, direction: Direction) {
        let step = self.speed_px_per_second * delta_seconds;
        if direction.dx() != 0 {
            let target = self.position.x + step * direction.dx() as f32;
            self.position.x = clamp_axis(target, self.position.x, self.max_position.x);
        }
        if direction.dy() != 0 {
            let target = self.position.y + step * direction.dy() as f32;
            self.position.y = clamp_axis(target, self.position.y, self.max_position.y);
        }
    }
}

fn clamp_axis(target: f32, current: f32, max: f32) -> f32 {
    if target.is_nan() {
        return current.clamp(0.0, max);
    }
    target.clamp(0.0, max)
}
