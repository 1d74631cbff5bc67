use flexi_logger::{Logger, LoggerHandle};

/// Starts the process-wide logger, writing to stderr.
///
/// `RUST_LOG` overrides `base_level` when set. Stdout is left to the caller,
/// so program output and log lines never interleave. The returned handle must
/// be kept alive for as long as logging is wanted.
pub fn setup_logging(base_level: &str) -> LoggerHandle {
    Logger::try_with_env_or_str(base_level)
        .unwrap_or_else(|e| panic!("Invalid log specification {:?}: {}", base_level, e))
        .log_to_stderr()
        .format(flexi_logger::detailed_format)
        .start()
        .unwrap_or_else(|e| panic!("Logger initialization failed with {}", e))
}
