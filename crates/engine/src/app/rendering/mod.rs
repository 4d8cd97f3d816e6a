mod rasterizer;
mod sink;
mod transform;

pub(crate) use rasterizer::visit_layer_cells;
pub use rasterizer::{compute_draw_list, DrawInstruction};
pub use sink::{DrawSink, RecordingSink};
pub use transform::{snap_to_pixel, PixelRect, SheetRect, Viewport, VisibleTiles};
