//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence over the configured level when it is set.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Errors from installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Install a global `fmt` subscriber described by `config`.
///
/// Only one subscriber can be installed per process; later calls return
/// `TelemetryError::Install` instead of panicking.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = if config.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
    };

    result.map_err(|err| TelemetryError::Install(err.to_string()))
}
