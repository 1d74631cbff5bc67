use std::io::{self, BufWriter};

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tile_selection::{run, Config};

fn main() -> anyhow::Result<()> {
    let _logger = common::setup_logging(if common::is_debug() { "debug" } else { "info" });

    let config = Config::default();
    let mut rng = StdRng::from_os_rng();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = run(&config, &mut rng, &mut out)?;

    info!(
        "{} of {} tiles active ({} non-empty / {} empty tile cells)",
        summary.active_tiles, summary.total_tiles, summary.non_empty_cells, summary.empty_cells
    );

    Ok(())
}
