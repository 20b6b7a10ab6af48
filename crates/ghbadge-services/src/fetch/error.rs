use crate::badge::colors;
use thiserror::Error;

/// Shape validation failed on a successfully fetched body
pub const INVALID_RESPONSE_DATA: &str = "invalid response data";
/// Upstream answered with something that is not JSON
pub const UNPARSEABLE_JSON: &str = "unparseable json response";

/// Upstream fetch failures, each carrying the short message shown on the badge
#[derive(Error, Debug)]
pub enum FetchError {
    /// Upstream reported the resource as missing (404)
    #[error("{pretty_message} (upstream status {status})")]
    NotFound { status: u16, pretty_message: String },

    /// Upstream answered, but not with something we can use
    #[error("{pretty_message}: {reason}")]
    InvalidResponse {
        status: Option<u16>,
        pretty_message: String,
        reason: String,
    },

    /// Upstream could not be reached or failed on its side
    #[error("{pretty_message}: {reason}")]
    Inaccessible {
        status: Option<u16>,
        pretty_message: String,
        reason: String,
    },

    /// The fetcher itself could not be built from configuration
    #[error("improperly configured: {reason}")]
    ImproperlyConfigured { reason: String },
}

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

impl FetchError {
    /// Body parsed as JSON but did not match the expected shape
    pub fn invalid_response_data(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            status: None,
            pretty_message: INVALID_RESPONSE_DATA.to_string(),
            reason: reason.into(),
        }
    }

    /// Body was not JSON at all
    pub fn unparseable_json(status: u16, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            status: Some(status),
            pretty_message: UNPARSEABLE_JSON.to_string(),
            reason: reason.into(),
        }
    }

    /// Transport-level failure before any status was received
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self::Inaccessible {
            status: None,
            pretty_message: "inaccessible".to_string(),
            reason: reason.into(),
        }
    }

    /// Message rendered on the error badge
    pub fn pretty_message(&self) -> &str {
        match self {
            Self::NotFound { pretty_message, .. }
            | Self::InvalidResponse { pretty_message, .. }
            | Self::Inaccessible { pretty_message, .. } => pretty_message,
            Self::ImproperlyConfigured { .. } => "improperly configured",
        }
    }

    /// Upstream HTTP status, when one was received
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { status, .. } => Some(*status),
            Self::InvalidResponse { status, .. } | Self::Inaccessible { status, .. } => *status,
            Self::ImproperlyConfigured { .. } => None,
        }
    }

    /// Badge color for this failure class
    pub const fn badge_color(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => colors::RED,
            Self::InvalidResponse { .. }
            | Self::Inaccessible { .. }
            | Self::ImproperlyConfigured { .. } => colors::LIGHTGRAY,
        }
    }
}
