//! Common utilities shared across ghbadge crates
//!
//! Request correlation, process initialization and the text formatters
//! badges use to render numbers.

pub mod correlation;
pub mod formatters;
pub mod init;
pub mod telemetry;

pub use correlation::CorrelationId;
pub use init::initialize_environment;
pub use telemetry::{TelemetryInitError, init_tracing};
