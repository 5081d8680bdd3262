//! `tracing` subscriber setup for the composition root.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Error returned when the global subscriber cannot be installed.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A global subscriber is already set for this process.
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Installs a formatting subscriber filtered by `RUST_LOG`.
///
/// Falls back to `default_level` (e.g. `"info"`) when `RUST_LOG` is unset or
/// invalid.
///
/// # Errors
///
/// Returns [`LoggingError::Install`] if a global subscriber is already
/// installed.
pub fn init_logging(default_level: &str) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}
