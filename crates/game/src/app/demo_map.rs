use tilescroll_engine::{SheetMetrics, TileGrid, TileGridError, TileId, EMPTY_TILE};

const MAP_COLUMNS: u32 = 64;
const MAP_ROWS: u32 = 64;
const TILE_SIZE_PX: u32 = 32;

const SHEET: SheetMetrics = SheetMetrics {
    width_px: 256,
    height_px: 256,
    tile_size_px: 32,
    columns: 8,
};

/// First sheet row holds ground variants, the third row holds props.
const GROUND_VARIANTS: u32 = 4;
const PROP_FIRST_ID: TileId = 17;
const PROP_VARIANTS: u32 = 3;

pub(super) fn build_demo_grid() -> Result<TileGrid, TileGridError> {
    let mut ground = Vec::with_capacity((MAP_COLUMNS * MAP_ROWS) as usize);
    let mut props = Vec::with_capacity((MAP_COLUMNS * MAP_ROWS) as usize);

    for row in 0..MAP_ROWS {
        for column in 0..MAP_COLUMNS {
            let hash = cell_hash(column, row);
            ground.push((hash % GROUND_VARIANTS) as TileId + 1);
            props.push(if hash % 11 == 0 {
                PROP_FIRST_ID + (hash / 11 % PROP_VARIANTS) as TileId
            } else {
                EMPTY_TILE
            });
        }
    }

    TileGrid::new(MAP_COLUMNS, MAP_ROWS, TILE_SIZE_PX, SHEET, vec![ground, props])
}

fn cell_hash(column: u32, row: u32) -> u32 {
    let mut h = column.wrapping_mul(0x9E37_79B1) ^ row.wrapping_mul(0x85EB_CA77);
    h ^= h >> 15;
    h = h.wrapping_mul(0xC2B2_AE3D);
    h ^ (h >> 13)
}
