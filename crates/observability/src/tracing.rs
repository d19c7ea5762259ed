//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_FILTER, LogFormat, ObservabilityConfig};

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &ObservabilityConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.filter))
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}

/// Parse filter directives, falling back to the default on invalid input.
///
/// The warning goes to stderr because no subscriber is installed yet.
pub(crate) fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|err| {
        eprintln!("invalid log filter '{directives}': {err}; falling back to {DEFAULT_FILTER}");
        EnvFilter::new(DEFAULT_FILTER)
    })
}
