mod camera;
mod config;
mod grid;
mod input;
mod metrics;
mod rendering;
mod scroller;

pub use camera::{Camera, Vec2, DEFAULT_CAMERA_SPEED_PX_PER_SECOND};
pub use config::ViewConfig;
pub use grid::{SheetMetrics, TileGrid, TileGridError, TileId, EMPTY_TILE};
pub use input::{
    Direction, DirectionKey, InputDirector, InputError, InputEvent, InputQueue, KeyAction,
    KeyBindings,
};
pub use metrics::{LoopMetricsSnapshot, MetricsAccumulator};
pub use rendering::{
    compute_draw_list, snap_to_pixel, DrawInstruction, DrawSink, PixelRect, RecordingSink, SheetRect,
    Viewport, VisibleTiles,
};
pub use scroller::Scroller;
