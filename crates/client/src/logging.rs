//! Logging setup.
//!
//! Logs go to stderr so tables and JSON on stdout stay machine-readable.
//! `RUST_LOG` adds per-target directives on top of the verbosity level.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Maps `-v` occurrences to a default level.
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn setup_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level_for(verbose).into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
