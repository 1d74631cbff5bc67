//! Per-tile occupancy scan.

use common::Buffer2;
use log::{debug, trace};

use crate::error::{ConfigError, ConfigResult};
use crate::geometry::TileGeometry;
use crate::grid::Grid;

// ============================================================================
// Types
// ============================================================================

/// Occupancy of one tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TileInfo {
    /// At least one cell in the tile is non-zero.
    pub active: bool,
    pub non_empty: usize,
    pub empty: usize,
}

impl TileInfo {
    #[inline]
    pub fn total(&self) -> usize {
        self.non_empty + self.empty
    }
}

/// Tile records indexed `(tx, ty)`, `tiles_x` x `tiles_y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    tiles: Buffer2<TileInfo>,
}

impl TileMap {
    #[inline]
    pub fn get(&self, tx: usize, ty: usize) -> TileInfo {
        self.tiles[(tx, ty)]
    }

    #[inline]
    pub fn tiles_x(&self) -> usize {
        self.tiles.rows()
    }

    #[inline]
    pub fn tiles_y(&self) -> usize {
        self.tiles.cols()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles as `((tx, ty), info)`, `tx` outer and `ty` inner.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), TileInfo)> + '_ {
        self.tiles.indexed_iter().map(|(pos, &info)| (pos, info))
    }

    /// Active tiles in the same order as [`iter`](Self::iter).
    pub fn iter_active(&self) -> impl Iterator<Item = ((usize, usize), TileInfo)> + '_ {
        self.iter().filter(|(_, info)| info.active)
    }

    pub fn active_count(&self) -> usize {
        self.tiles.iter().filter(|info| info.active).count()
    }
}

// ============================================================================
// Scan
// ============================================================================

/// Counts zero and non-zero cells inside every tile of `geometry`.
///
/// The grid is only read, so scanning the same grid again yields an identical
/// [`TileMap`]. Fails if `geometry` was derived for a grid of another size.
pub fn scan_tiles(grid: &Grid, geometry: &TileGeometry) -> ConfigResult<TileMap> {
    if grid.rows() != geometry.rows() || grid.cols() != geometry.cols() {
        return Err(ConfigError::GridMismatch {
            grid_rows: grid.rows(),
            grid_cols: grid.cols(),
            rows: geometry.rows(),
            cols: geometry.cols(),
        });
    }

    let tiles = Buffer2::from_fn(geometry.tiles_x(), geometry.tiles_y(), |tx, ty| {
        let bounds = geometry.bounds(tx, ty);

        let mut non_empty = 0;
        for i in bounds.start_x..bounds.end_x {
            non_empty += grid.row(i)[bounds.start_y..bounds.end_y]
                .iter()
                .filter(|&&v| v != 0)
                .count();
        }
        let empty = bounds.area() - non_empty;

        trace!(
            "Tile ({}, {}) rows {}..{} cols {}..{}: {} non-empty",
            tx,
            ty,
            bounds.start_x,
            bounds.end_x,
            bounds.start_y,
            bounds.end_y,
            non_empty
        );

        TileInfo {
            active: non_empty > 0,
            non_empty,
            empty,
        }
    });

    let map = TileMap { tiles };
    debug!(
        "Scanned {} tiles, {} active",
        map.len(),
        map.active_count()
    );
    Ok(map)
}
