//! Synthetic input grid with a single block of non-zero cells.

use common::Buffer2;
use log::{debug, warn};
use rand::Rng;

use crate::config::Region;

/// Smallest and largest value written into the non-empty region.
pub const MIN_CELL_VALUE: i32 = 1;
pub const MAX_CELL_VALUE: i32 = 100;

/// Row-major grid of cell values, indexed `(i, j)` = (row, column).
pub type Grid = Buffer2<i32>;

/// Fills a `rows` x `cols` grid with zeros except inside `region`, where every
/// cell receives a uniform random value in `[MIN_CELL_VALUE, MAX_CELL_VALUE]`.
///
/// The region is inclusive on all four bounds. Any part of it beyond the grid
/// is ignored.
pub fn generate_input_space<R: Rng>(
    rows: usize,
    cols: usize,
    region: &Region,
    rng: &mut R,
) -> Grid {
    if region.exceeds(rows, cols) {
        warn!(
            "Non-empty region {:?} extends past the {}x{} grid and will be clipped",
            region, rows, cols
        );
    }

    let grid = Grid::from_fn(rows, cols, |i, j| {
        if region.contains(i, j) {
            rng.random_range(MIN_CELL_VALUE..=MAX_CELL_VALUE)
        } else {
            0
        }
    });

    debug!(
        "Generated {}x{} input space with {} non-zero cells",
        rows,
        cols,
        grid.iter().filter(|&&v| v != 0).count()
    );

    grid
}
