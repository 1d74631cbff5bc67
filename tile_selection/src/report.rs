//! Plain-text tile statistics report.

use std::io::{self, Write};

use crate::scan::TileMap;

pub const REPORT_HEADER: &str = "Tile selection module";
pub const STATISTICS_HEADER: &str = "Tile statistics (active tiles and pixel counts):";

/// Totals over all tiles of a report.
///
/// Cells are counted once per covering tile, so cells in overlapping tiles
/// contribute more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub total_tiles: usize,
    pub active_tiles: usize,
    pub non_empty_cells: usize,
    pub empty_cells: usize,
}

/// Writes the header followed by one line per active tile, `tx` outer and
/// `ty` inner. Inactive tiles are skipped.
pub fn write_report<W: Write>(writer: &mut W, tiles: &TileMap) -> io::Result<ReportSummary> {
    writeln!(writer, "{REPORT_HEADER}")?;
    writeln!(writer)?;
    writeln!(writer, "{STATISTICS_HEADER}")?;

    let mut summary = ReportSummary {
        total_tiles: tiles.len(),
        ..ReportSummary::default()
    };

    for ((tx, ty), info) in tiles.iter() {
        summary.non_empty_cells += info.non_empty;
        summary.empty_cells += info.empty;

        if info.active {
            summary.active_tiles += 1;
            writeln!(
                writer,
                "Tile ({}, {}) non-empty: {}, empty: {}",
                tx, ty, info.non_empty, info.empty
            )?;
        }
    }

    writer.flush()?;
    Ok(summary)
}
