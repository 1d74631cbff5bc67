//! Tile placement derived from kernel, stride and tile dimensions.
//!
//! Consecutive tiles on an axis share `kernel_size - stride` cells, so the
//! step between tile origins is the tile extent minus that overlap. The row
//! axis (`x`) steps by the tile *height* and the column axis (`y`) by the tile
//! *width*. The last tile on each axis is clipped to the grid rather than
//! padded.

use log::trace;

use crate::config::TilingConfig;
use crate::error::{Axis, ConfigError, ConfigResult};

/// Half-open cell range covered by one tile, already clipped to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileBounds {
    pub start_x: usize,
    pub end_x: usize,
    pub start_y: usize,
    pub end_y: usize,
}

impl TileBounds {
    #[inline]
    pub fn rows(&self) -> usize {
        self.end_x - self.start_x
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.end_y - self.start_y
    }

    /// Number of grid cells inside the clipped bounds.
    #[inline]
    pub fn area(&self) -> usize {
        self.rows() * self.cols()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGeometry {
    rows: usize,
    cols: usize,
    tile_width: usize,
    tile_height: usize,
    overlap: usize,
    step_x: usize,
    step_y: usize,
    tiles_x: usize,
    tiles_y: usize,
}

impl TileGeometry {
    /// Derives the tiling of a `rows` x `cols` grid.
    pub fn new(tiling: &TilingConfig, rows: usize, cols: usize) -> ConfigResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }
        tiling.validate()?;

        let overlap = tiling
            .overlap()
            .ok_or(ConfigError::StrideNotBelowKernel {
                kernel_size: tiling.kernel_size,
                stride: tiling.stride,
            })?;
        let step_x = positive_step(Axis::X, tiling.tile_height, overlap)?;
        let step_y = positive_step(Axis::Y, tiling.tile_width, overlap)?;

        let geometry = Self {
            rows,
            cols,
            tile_width: tiling.tile_width,
            tile_height: tiling.tile_height,
            overlap,
            step_x,
            step_y,
            tiles_x: rows.div_ceil(step_x),
            tiles_y: cols.div_ceil(step_y),
        };
        trace!("Derived tile geometry {:?}", geometry);

        Ok(geometry)
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn tile_width(&self) -> usize {
        self.tile_width
    }

    #[inline]
    pub fn tile_height(&self) -> usize {
        self.tile_height
    }

    #[inline]
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    #[inline]
    pub fn step_x(&self) -> usize {
        self.step_x
    }

    #[inline]
    pub fn step_y(&self) -> usize {
        self.step_y
    }

    #[inline]
    pub fn tiles_x(&self) -> usize {
        self.tiles_x
    }

    #[inline]
    pub fn tiles_y(&self) -> usize {
        self.tiles_y
    }

    #[inline]
    pub fn tile_count(&self) -> usize {
        self.tiles_x * self.tiles_y
    }

    /// Clipped bounds of tile `(tx, ty)`.
    #[inline]
    pub fn bounds(&self, tx: usize, ty: usize) -> TileBounds {
        debug_assert!(tx < self.tiles_x && ty < self.tiles_y);

        let start_x = tx * self.step_x;
        let start_y = ty * self.step_y;
        TileBounds {
            start_x,
            end_x: (start_x + self.tile_height).min(self.rows),
            start_y,
            end_y: (start_y + self.tile_width).min(self.cols),
        }
    }
}

fn positive_step(axis: Axis, tile_dim: usize, overlap: usize) -> ConfigResult<usize> {
    match tile_dim.checked_sub(overlap) {
        Some(step) if step > 0 => Ok(step),
        _ => Err(ConfigError::NonPositiveStep {
            axis,
            tile_dim,
            overlap,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_geometry() -> TileGeometry {
        TileGeometry::new(&TilingConfig::default(), 30, 30).unwrap()
    }

    #[test]
    fn test_default_scenario() {
        let geometry = default_geometry();
        assert_eq!(geometry.overlap(), 2);
        assert_eq!(geometry.step_x(), 5);
        assert_eq!(geometry.step_y(), 2);
        assert_eq!(geometry.tiles_x(), 6);
        assert_eq!(geometry.tiles_y(), 15);
        assert_eq!(geometry.tile_count(), 90);
    }

    #[test]
    fn test_height_drives_x_and_width_drives_y() {
        let geometry = default_geometry();
        let bounds = geometry.bounds(0, 0);
        // tile_height = 7 rows, tile_width = 4 columns
        assert_eq!(bounds.rows(), 7);
        assert_eq!(bounds.cols(), 4);
        assert_eq!(bounds.area(), 28);
    }

    #[test]
    fn test_bounds_interior_tile() {
        let bounds = default_geometry().bounds(2, 6);
        assert_eq!(
            bounds,
            TileBounds {
                start_x: 10,
                end_x: 17,
                start_y: 12,
                end_y: 16,
            }
        );
    }

    #[test]
    fn test_last_tiles_are_clipped() {
        let geometry = default_geometry();
        // start_x = 25, start_x + 7 = 32 > 30
        let last_row = geometry.bounds(5, 0);
        assert_eq!((last_row.start_x, last_row.end_x), (25, 30));
        assert_eq!(last_row.rows(), 5);

        // start_y = 28, start_y + 4 = 32 > 30
        let last_col = geometry.bounds(0, 14);
        assert_eq!((last_col.start_y, last_col.end_y), (28, 30));
        assert_eq!(last_col.cols(), 2);
    }

    #[test]
    fn test_consecutive_tiles_overlap() {
        let geometry = default_geometry();
        let a = geometry.bounds(0, 3);
        let b = geometry.bounds(1, 4);
        assert_eq!(a.end_x - b.start_x, geometry.tile_height() - geometry.step_x());
        assert_eq!(a.end_y - b.start_y, geometry.tile_width() - geometry.step_y());
    }

    #[test]
    fn test_tile_count_covers_grid_exactly() {
        for rows in 1..=40 {
            for cols in [1, 7, 13, 30] {
                for (kernel_size, stride, tile_width, tile_height) in
                    [(3, 1, 4, 7), (5, 2, 8, 4), (2, 1, 2, 2), (7, 3, 5, 11)]
                {
                    let tiling = TilingConfig {
                        kernel_size,
                        stride,
                        tile_width,
                        tile_height,
                    };
                    let g = TileGeometry::new(&tiling, rows, cols).unwrap();

                    assert!(g.tiles_x() * g.step_x() >= rows);
                    assert!((g.tiles_x() - 1) * g.step_x() < rows);
                    assert!(g.tiles_y() * g.step_y() >= cols);
                    assert!((g.tiles_y() - 1) * g.step_y() < cols);
                }
            }
        }
    }

    #[test]
    fn test_every_tile_is_non_empty() {
        let geometry = default_geometry();
        for tx in 0..geometry.tiles_x() {
            for ty in 0..geometry.tiles_y() {
                let bounds = geometry.bounds(tx, ty);
                assert!(bounds.start_x < bounds.end_x);
                assert!(bounds.start_y < bounds.end_y);
            }
        }
    }

    #[test]
    fn test_stride_not_below_kernel_is_config_error() {
        let tiling = TilingConfig {
            kernel_size: 3,
            stride: 3,
            ..TilingConfig::default()
        };
        assert_eq!(
            TileGeometry::new(&tiling, 30, 30),
            Err(ConfigError::StrideNotBelowKernel {
                kernel_size: 3,
                stride: 3
            })
        );
    }

    #[test]
    fn test_tile_not_larger_than_overlap_is_config_error() {
        let tiling = TilingConfig {
            kernel_size: 5,
            stride: 1,
            tile_width: 4,
            tile_height: 9,
        };
        assert_eq!(
            TileGeometry::new(&tiling, 30, 30),
            Err(ConfigError::NonPositiveStep {
                axis: Axis::Y,
                tile_dim: 4,
                overlap: 4
            })
        );

        let tiling = TilingConfig {
            tile_width: 9,
            tile_height: 2,
            ..tiling
        };
        assert!(matches!(
            TileGeometry::new(&tiling, 30, 30),
            Err(ConfigError::NonPositiveStep { axis: Axis::X, .. })
        ));
    }

    #[test]
    fn test_empty_grid_is_config_error() {
        assert_eq!(
            TileGeometry::new(&TilingConfig::default(), 30, 0),
            Err(ConfigError::EmptyGrid { rows: 30, cols: 0 })
        );
    }
}
