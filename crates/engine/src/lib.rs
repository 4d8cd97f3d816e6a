//! Camera and viewport core for a scrolling tile world.
//!
//! The crate turns a continuous camera position over a layered [`TileGrid`]
//! into per-frame [`DrawInstruction`]s. Loading assets, scheduling frames,
//! capturing keys and blitting pixels belong to the host.

pub mod app;

pub use app::{
    compute_draw_list, snap_to_pixel, Camera, Direction, DirectionKey,
    DrawInstruction, DrawSink, InputDirector, InputError, InputEvent, InputQueue, KeyAction,
    KeyBindings, LoopMetricsSnapshot, MetricsAccumulator, PixelRect, RecordingSink, Scroller,
    SheetMetrics, SheetRect, TileGrid, TileGridError, TileId, Vec2, ViewConfig, Viewport,
    VisibleTiles, DEFAULT_CAMERA_SPEED_PX_PER_SECOND, EMPTY_TILE,
};
