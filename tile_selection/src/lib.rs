//! # tile_selection
//!
//! Partitions a 2-D grid into overlapping rectangular tiles, the way an input
//! is split up ahead of a tiled convolution, and reports how many cells of
//! each tile are non-zero.
//!
//! ## Pipeline
//!
//! 1. [`generate_input_space`] fills a grid with zeros and one block of random
//!    values in `[1, 100]`.
//! 2. [`TileGeometry`] derives tile placement from the kernel size, stride and
//!    tile dimensions.
//! 3. [`scan_tiles`] counts zero and non-zero cells per tile.
//! 4. [`write_report`] prints every active tile.
//!
//! ```ignore
//! use rand::SeedableRng;
//! use tile_selection::{run, Config};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let summary = run(&Config::default(), &mut rng, &mut std::io::stdout())?;
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod report;
pub mod scan;

use std::io::Write;

use anyhow::Context;
use log::info;
use rand::Rng;

pub use config::{Config, GridConfig, Region, TilingConfig};
pub use error::{Axis, ConfigError, ConfigResult};
pub use geometry::{TileBounds, TileGeometry};
pub use grid::{generate_input_space, Grid};
pub use report::{write_report, ReportSummary};
pub use scan::{scan_tiles, TileInfo, TileMap};

/// Runs generation, tiling, scanning and reporting once, drawing the grid
/// values from `rng`. Pass a seeded generator to reproduce a grid.
pub fn run<R: Rng, W: Write>(
    config: &Config,
    rng: &mut R,
    writer: &mut W,
) -> anyhow::Result<ReportSummary> {
    config.validate().context("Invalid configuration")?;

    let grid_config = &config.grid;
    let geometry = TileGeometry::new(&config.tiling, grid_config.rows, grid_config.cols)
        .context("Failed to derive tile geometry")?;
    info!(
        "Tiling {}x{} grid: overlap {}, step ({}, {}), {}x{} tiles",
        geometry.rows(),
        geometry.cols(),
        geometry.overlap(),
        geometry.step_x(),
        geometry.step_y(),
        geometry.tiles_x(),
        geometry.tiles_y()
    );

    let grid = generate_input_space(
        grid_config.rows,
        grid_config.cols,
        &grid_config.non_empty,
        rng,
    );
    let tiles = scan_tiles(&grid, &geometry).context("Failed to scan tiles")?;

    write_report(writer, &tiles).context("Failed to write tile report")
}
