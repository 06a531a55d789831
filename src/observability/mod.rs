//! Tracing subscriber setup for the command-line tool.
//!
//! Library code only emits `tracing` events; the binary decides where they
//! go. Events are written to stderr so stdout stays clean for JSON and
//! Markdown reports.

use tracing_subscriber::EnvFilter;

/// Default filter for a `-v` count.
pub fn filter_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `RUST_LOG` when set and valid, otherwise the verbosity default.
pub fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)))
}

/// Install the global subscriber. Later calls are ignored, which keeps
/// repeated initialisation in tests harmless.
pub fn init_tracing(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
