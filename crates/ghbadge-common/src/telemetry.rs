//! Tracing subscriber setup shared by the ghbadge binaries

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the global tracing subscriber
#[derive(Debug, Error)]
pub enum TelemetryInitError {
    /// The configured level is not a valid filter directive
    #[error("Invalid tracing filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    /// A global subscriber was already installed
    #[error("Tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Build the filter used by [`init_tracing`].
///
/// `RUST_LOG` wins when present and valid, otherwise `default_level` is used.
///
/// # Errors
///
/// Returns [`TelemetryInitError::InvalidFilter`] if `default_level` cannot be parsed
pub fn build_filter(default_level: &str) -> Result<EnvFilter, TelemetryInitError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(default_level).map_err(|e| TelemetryInitError::InvalidFilter {
            directive: default_level.to_string(),
            reason: e.to_string(),
        })
    })
}

/// Install the global `tracing` subscriber.
///
/// `json` switches the formatter to newline-delimited JSON for log shippers.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set
pub fn init_tracing(default_level: &str, json: bool) -> Result<(), TelemetryInitError> {
    let filter = build_filter(default_level)?;

    let result = if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
    };

    result.map_err(|e| TelemetryInitError::AlreadyInitialized(e.to_string()))
}
