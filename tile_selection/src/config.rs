//! Configuration types for grid generation and tiling.
//!
//! [`Config`] groups the grid description and the tiling parameters. The
//! defaults reproduce the reference scenario: a 30x30 grid seeded in the
//! block (12,12)-(20,20), tiled for a 3x3 kernel with stride 1 using 4x7
//! tiles.

use crate::error::{ConfigError, ConfigResult};

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ROWS: usize = 30;
pub const DEFAULT_COLS: usize = 30;

pub const DEFAULT_NON_EMPTY_TOP_LEFT_X: usize = 12;
pub const DEFAULT_NON_EMPTY_TOP_LEFT_Y: usize = 12;
pub const DEFAULT_NON_EMPTY_BOTTOM_RIGHT_X: usize = 20;
pub const DEFAULT_NON_EMPTY_BOTTOM_RIGHT_Y: usize = 20;

pub const DEFAULT_KERNEL_SIZE: usize = 3;
pub const DEFAULT_STRIDE: usize = 1;
pub const DEFAULT_TILE_WIDTH: usize = 4;
pub const DEFAULT_TILE_HEIGHT: usize = 7;

// ============================================================================
// Region
// ============================================================================

/// Inclusive rectangle of grid cells.
///
/// `x` addresses rows and `y` addresses columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub top_left_x: usize,
    pub top_left_y: usize,
    pub bottom_right_x: usize,
    pub bottom_right_y: usize,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            top_left_x: DEFAULT_NON_EMPTY_TOP_LEFT_X,
            top_left_y: DEFAULT_NON_EMPTY_TOP_LEFT_Y,
            bottom_right_x: DEFAULT_NON_EMPTY_BOTTOM_RIGHT_X,
            bottom_right_y: DEFAULT_NON_EMPTY_BOTTOM_RIGHT_Y,
        }
    }
}

impl Region {
    pub fn new(top_left: (usize, usize), bottom_right: (usize, usize)) -> Self {
        Self {
            top_left_x: top_left.0,
            top_left_y: top_left.1,
            bottom_right_x: bottom_right.0,
            bottom_right_y: bottom_right.1,
        }
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.top_left_x
            && y >= self.top_left_y
            && x <= self.bottom_right_x
            && y <= self.bottom_right_y
    }

    /// Whether any part of the region lies outside a `rows` x `cols` grid.
    pub fn exceeds(&self, rows: usize, cols: usize) -> bool {
        self.bottom_right_x >= rows || self.bottom_right_y >= cols
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.top_left_x > self.bottom_right_x || self.top_left_y > self.bottom_right_y {
            return Err(ConfigError::InvertedRegion {
                top_left_x: self.top_left_x,
                top_left_y: self.top_left_y,
                bottom_right_x: self.bottom_right_x,
                bottom_right_y: self.bottom_right_y,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Grid
// ============================================================================

/// Dimensions of the input grid and the block of non-zero cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub non_empty: Region,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            non_empty: Region::default(),
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.non_empty.validate()
    }
}

// ============================================================================
// Tiling
// ============================================================================

/// Convolution window and tile shape the tiling is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilingConfig {
    /// Side of the square convolution kernel.
    pub kernel_size: usize,
    /// Kernel stride. Must be smaller than `kernel_size` so that
    /// neighbouring tiles share `kernel_size - stride` cells.
    pub stride: usize,
    /// Tile extent along the column (`y`) axis.
    pub tile_width: usize,
    /// Tile extent along the row (`x`) axis.
    pub tile_height: usize,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            kernel_size: DEFAULT_KERNEL_SIZE,
            stride: DEFAULT_STRIDE,
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
        }
    }
}

impl TilingConfig {
    /// Cells shared by two consecutive tiles on either axis, or `None` when
    /// the stride exceeds the kernel.
    #[inline]
    pub fn overlap(&self) -> Option<usize> {
        self.kernel_size.checked_sub(self.stride)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.kernel_size == 0 {
            return Err(ConfigError::ZeroKernel);
        }
        if self.stride == 0 {
            return Err(ConfigError::ZeroStride);
        }
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(ConfigError::ZeroTile {
                width: self.tile_width,
                height: self.tile_height,
            });
        }
        if self.stride >= self.kernel_size {
            return Err(ConfigError::StrideNotBelowKernel {
                kernel_size: self.kernel_size,
                stride: self.stride,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub grid: GridConfig,
    pub tiling: TilingConfig,
}

impl Config {
    pub fn validate(&self) -> ConfigResult<()> {
        self.grid.validate()?;
        self.tiling.validate()
    }
}
