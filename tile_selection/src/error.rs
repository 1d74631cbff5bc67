//! Configuration errors for tiling and grid generation.

use thiserror::Error;

/// Grid axis a geometry error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Errors raised while validating a tiling or grid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Grid must have at least one cell, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("Kernel size must be positive")]
    ZeroKernel,

    #[error("Stride must be positive")]
    ZeroStride,

    #[error("Tile dimensions must be positive, got width {width}, height {height}")]
    ZeroTile { width: usize, height: usize },

    #[error("Stride {stride} must be smaller than kernel size {kernel_size}")]
    StrideNotBelowKernel { kernel_size: usize, stride: usize },

    #[error(
        "Step along {axis} is not positive: tile dimension {tile_dim} does not exceed overlap {overlap}"
    )]
    NonPositiveStep {
        axis: Axis,
        tile_dim: usize,
        overlap: usize,
    },

    #[error("Grid is {grid_rows}x{grid_cols} but the tiling was derived for {rows}x{cols}")]
    GridMismatch {
        grid_rows: usize,
        grid_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error(
        "Region top-left ({top_left_x}, {top_left_y}) lies after bottom-right ({bottom_right_x}, {bottom_right_y})"
    )]
    InvertedRegion {
        top_left_x: usize,
        top_left_y: usize,
        bottom_right_x: usize,
        bottom_right_y: usize,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride_error_message() {
        let err = ConfigError::StrideNotBelowKernel {
            kernel_size: 3,
            stride: 3,
        };
        assert_eq!(
            err.to_string(),
            "Stride 3 must be smaller than kernel size 3"
        );
    }

    #[test]
    fn test_grid_mismatch_message() {
        let err = ConfigError::GridMismatch {
            grid_rows: 10,
            grid_cols: 12,
            rows: 30,
            cols: 30,
        };
        assert_eq!(
            err.to_string(),
            "Grid is 10x12 but the tiling was derived for 30x30"
        );
    }

    #[test]
    fn test_step_error_names_axis() {
        let err = ConfigError::NonPositiveStep {
            axis: Axis::Y,
            tile_dim: 2,
            overlap: 2,
        };
        assert_eq!(
            err.to_string(),
            "Step along y is not positive: tile dimension 2 does not exceed overlap 2"
        );
    }
}
