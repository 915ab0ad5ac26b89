// src/logging.rs
//! Diagnostics go to stderr; stdout carries only the report.

use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// `RUST_LOG` when set and parseable, otherwise the level chosen by the flags.
fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
