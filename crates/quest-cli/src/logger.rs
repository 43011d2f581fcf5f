//! Stderr diagnostics via `tracing-subscriber`.

use tracing::level_filters::LevelFilter;

/// Map the number of `-v` flags to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::OFF,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Can only succeed once per process.
pub fn init(verbosity: u8, ansi: bool) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| format!("failed to install logger: {e}"))
}
