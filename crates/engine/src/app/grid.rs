use thiserror::Error;

pub type TileId = u16;

pub const EMPTY_TILE: TileId = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetMetrics {
    pub width_px: u32,
    pub height_px: u32,
    pub tile_size_px: u32,
    pub columns: u32,
}

impl SheetMetrics {
    pub(crate) fn validate(&self) -> Result<(), TileGridError> {
        if self.tile_size_px == 0 {
            return Err(TileGridError::InvalidConfiguration {
                field: "sheet_tile_size",
            });
        }
        if self.columns == 0 {
            return Err(TileGridError::InvalidConfiguration {
                field: "sheet_columns",
            });
        }
        if self.width_px == 0 {
            return Err(TileGridError::InvalidConfiguration {
                field: "sheet_width",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TileGridError {
    #[error("tile query out of bounds: layer {layer}, column {column}, row {row}")]
    OutOfBounds { layer: usize, column: u32, row: u32 },
    #[error("invalid configuration: {field} must be non-zero")]
    InvalidConfiguration { field: &'static str },
    #[error("tile count mismatch in layer {layer}: expected {expected}, got {actual}")]
    TileCountMismatch {
        layer: usize,
        expected: usize,
        actual: usize,
    },
    #[error("tile grid needs at least one layer")]
    NoLayers,
}

// Row-major layers: `(column, row)` lives at `row * columns + column`.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    columns: u32,
    rows: u32,
    tile_size_px: u32,
    sheet: SheetMetrics,
    layers: Vec<Vec<TileId>>,
}

impl TileGrid {
    pub fn new(
        columns: u32,
        rows: u32,
        tile_size_px: u32,
        sheet: SheetMetrics,
        layers: Vec<Vec<TileId>>,
    ) -> Result<Self, TileGridError> {
        if tile_size_px == 0 {
            return Err(TileGridError::InvalidConfiguration { field: "tile_size" });
        }
        sheet.validate()?;
        if layers.is_empty() {
            return Err(TileGridError::NoLayers);
        }

        let expected = columns as usize * rows as usize;
        for (layer, tiles) in layers.iter().enumerate() {
            if tiles.len() != expected {
                return Err(TileGridError::TileCountMismatch {
                    layer,
                    expected,
                    actual: tiles.len(),
                });
            }
        }

        Ok(Self {
            columns,
            rows,
            tile_size_px,
            sheet,
            layers,
        })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn tile_size_px(&self) -> u32 {
        self.tile_size_px
    }

    pub fn sheet(&self) -> SheetMetrics {
        self.sheet
    }

    pub fn world_size_px(&self) -> (f32, f32) {
        (
            self.tile_size_px as f32 * self.columns as f32,
            self.tile_size_px as f32 * self.rows as f32,
        )
    }

    pub fn get_tile(&self, layer: usize, column: u32, row: u32) -> Result<TileId, TileGridError> {
        let out_of_bounds = TileGridError::OutOfBounds { layer, column, row };
        if column >= self.columns || row >= self.rows {
            return Err(out_of_bounds);
        }
        let index = row as usize * self.columns as usize + column as usize;
        self.layers
            .get(layer)
            .and_then(|tiles| tiles.get(index).copied())
            .ok_or(out_of_bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> SheetMetrics {
        SheetMetrics {
            width_px: 64,
            height_px: 64,
            tile_size_px: 16,
            columns: 4,
        }
    }

    #[test]
    fn tile_lookup_is_row_major() {
        let grid = TileGrid::new(3, 2, 16, sheet(), vec![vec![1, 2, 3, 4, 5, 6]]).expect("grid");
        assert_eq!(grid.get_tile(0, 0, 0), Ok(1));
        assert_eq!(grid.get_tile(0, 2, 0), Ok(3));
        assert_eq!(grid.get_tile(0, 0, 1), Ok(4));
        assert_eq!(grid.get_tile(0, 2, 1), Ok(6));
    }

    #[test]
    fn out_of_range_queries_fail() {
        let grid = TileGrid::new(2, 2, 16, sheet(), vec![vec![0; 4], vec![1; 4]]).expect("grid");
        assert_eq!(
            grid.get_tile(0, 2, 0),
            Err(TileGridError::OutOfBounds {
                layer: 0,
                column: 2,
                row: 0
            })
        );
        assert!(grid.get_tile(0, 0, 2).is_err());
        assert!(grid.get_tile(2, 0, 0).is_err());
        assert_eq!(grid.get_tile(1, 1, 1), Ok(1));
    }

    #[test]
    fn layers_must_share_dimensions() {
        let err = TileGrid::new(2, 2, 16, sheet(), vec![vec![0; 4], vec![0; 3]]).expect_err("err");
        assert_eq!(
            err,
            TileGridError::TileCountMismatch {
                layer: 1,
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let err = TileGrid::new(2, 2, 0, sheet(), vec![vec![0; 4]]).expect_err("err");
        assert_eq!(err, TileGridError::InvalidConfiguration { field: "tile_size" });

        let bad_sheet = SheetMetrics {
            columns: 0,
            ..sheet()
        };
        let err = TileGrid::new(2, 2, 16, bad_sheet, vec![vec![0; 4]]).expect_err("err");
        assert_eq!(
            err,
            TileGridError::InvalidConfiguration {
                field: "sheet_columns"
            }
        );

        let bad_sheet = SheetMetrics {
            tile_size_px: 0,
            ..sheet()
        };
        assert!(TileGrid::new(2, 2, 16, bad_sheet, vec![vec![0; 4]]).is_err());
    }

    #[test]
    fn empty_layer_list_is_rejected() {
        let err = TileGrid::new(2, 2, 16, sheet(), Vec::new()).expect_err("err");
        assert_eq!(err, TileGridError::NoLayers);
    }

    #[test]
    fn world_size_scales_with_tile_size() {
        let grid = TileGrid::new(5, 3, 32, sheet(), vec![vec![0; 15]]).expect("grid");
        assert_eq!(grid.world_size_px(), (160.0, 96.0));
    }
}
