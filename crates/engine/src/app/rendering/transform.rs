use crate::app::{TileGridError, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TileRectInclusive {
    pub(crate) x_min: u32,
    pub(crate) x_max: u32,
    pub(crate) y_min: u32,
    pub(crate) y_max: u32,
}

/// Tile range covered by the viewport plus the scroll remainder.
/// `end_col`/`end_row` are inclusive and may point one past the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleTiles {
    pub start_col: i64,
    pub start_row: i64,
    pub end_col: i64,
    pub end_row: i64,
    pub offset: Vec2,
    tile_size_px: u32,
}

impl VisibleTiles {
    pub fn from_camera(
        camera_position: Vec2,
        viewport: Viewport,
        tile_size_px: u32,
    ) -> Result<Self, TileGridError> {
        if tile_size_px == 0 {
            return Err(TileGridError::InvalidConfiguration { field: "tile_size" });
        }
        let tile = tile_size_px as f32;
        let start_col = (camera_position.x / tile).floor() as i64;
        let start_row = (camera_position.y / tile).floor() as i64;
        let span_cols = i64::from(viewport.width.div_ceil(tile_size_px));
        let span_rows = i64::from(viewport.height.div_ceil(tile_size_px));

        Ok(Self {
            start_col,
            start_row,
            end_col: start_col + span_cols,
            end_row: start_row + span_rows,
            offset: Vec2 {
                x: -camera_position.x + start_col as f32 * tile,
                y: -camera_position.y + start_row as f32 * tile,
            },
            tile_size_px,
        })
    }

    pub(crate) fn clipped(&self, columns: u32, rows: u32) -> Option<TileRectInclusive> {
        if columns == 0 || rows == 0 {
            return None;
        }

        let x_min = self.start_col.max(0);
        let x_max = self.end_col.min(i64::from(columns) - 1);
        let y_min = self.start_row.max(0);
        let y_max = self.end_row.min(i64::from(rows) - 1);

        if x_min > x_max || y_min > y_max {
            return None;
        }

        Some(TileRectInclusive {
            x_min: x_min as u32,
            x_max: x_max as u32,
            y_min: y_min as u32,
            y_max: y_max as u32,
        })
    }

    /// Snapped destination of the cell's top-left corner. The remainder is
    /// snapped once and whole tiles are added in integers, so neighbours are
    /// always exactly one tile apart.
    pub fn cell_dest(&self, column: u32, row: u32) -> PixelRect {
        let tile = self.tile_size_px as i64;
        let x = snap_to_pixel(self.offset.x) as i64 + (i64::from(column) - self.start_col) * tile;
        let y = snap_to_pixel(self.offset.y) as i64 + (i64::from(row) - self.start_row) * tile;
        PixelRect {
            x: x as i32,
            y: y as i32,
            width: self.tile_size_px,
            height: self.tile_size_px,
        }
    }
}

// Halves go toward positive infinity.
pub fn snap_to_pixel(value: f32) -> i32 {
    (value + 0.5).floor() as i32
}
