use crate::app::grid::{TileGrid, TileGridError, TileId, EMPTY_TILE};
use crate::app::Camera;

use super::transform::{PixelRect, SheetRect, VisibleTiles};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawInstruction {
    pub tile_id: TileId,
    pub dest: PixelRect,
    pub source: SheetRect,
}

/// Builds the draw list for one layer, in row-major scan order. Empty cells
/// are skipped.
pub fn compute_draw_list(
    grid: &TileGrid,
    camera: &Camera,
    layer: usize,
) -> Result<Vec<DrawInstruction>, TileGridError> {
    let mut instructions = Vec::new();
    visit_layer_cells(grid, camera, layer, |_, instruction| {
        instructions.extend(instruction);
    })?;
    Ok(instructions)
}

pub(crate) fn visit_layer_cells<F>(
    grid: &TileGrid,
    camera: &Camera,
    layer: usize,
    mut visit: F,
) -> Result<(), TileGridError>
where
    F: FnMut(PixelRect, Option<DrawInstruction>),
{
    grid.sheet().validate()?;
    let visible =
        VisibleTiles::from_camera(camera.position(), camera.viewport(), grid.tile_size_px())?;
    let Some(cells) = visible.clipped(grid.columns(), grid.rows()) else {
        return Ok(());
    };

    for row in cells.y_min..=cells.y_max {
        for column in cells.x_min..=cells.x_max {
            let tile_id = grid.get_tile(layer, column, row)?;
            let dest = visible.cell_dest(column, row);
            let instruction = (tile_id != EMPTY_TILE).then(|| DrawInstruction {
                tile_id,
                dest,
                source: source_rect(grid, tile_id),
            });
            visit(dest, instruction);
        }
    }
    Ok(())
}

fn source_rect(grid: &TileGrid, tile_id: TileId) -> SheetRect {
    let sheet = grid.sheet();
    let index = u64::from(tile_id - 1);
    let sheet_tile = u64::from(sheet.tile_size_px);
    SheetRect {
        x: ((index * sheet_tile) % u64::from(sheet.width_px)) as u32,
        y: ((index / u64::from(sheet.columns)) * sheet_tile) as u32,
        width: sheet.tile_size_px,
        height: sheet.tile_size_px,
    }
}
