//! Mapping of upstream HTTP status codes to badge messages

use super::error::{FetchError, FetchResult};
use std::collections::BTreeMap;

const DEFAULT_NOT_FOUND: &str = "not found";
const DEFAULT_RATE_LIMITED: &str = "rate limited by upstream service";
const DEFAULT_INVALID: &str = "invalid";
const DEFAULT_INACCESSIBLE: &str = "inaccessible";

/// Per-request status → message overrides
///
/// Always includes `404 → "not found"` and `429 → "rate limited by upstream
/// service"` unless a service replaces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpErrors {
    messages: BTreeMap<u16, String>,
}

impl Default for HttpErrors {
    fn default() -> Self {
        let mut messages = BTreeMap::new();
        messages.insert(404, DEFAULT_NOT_FOUND.to_string());
        messages.insert(429, DEFAULT_RATE_LIMITED.to_string());
        Self { messages }
    }
}

impl HttpErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the message for `status`
    #[must_use]
    pub fn with(mut self, status: u16, message: impl Into<String>) -> Self {
        self.messages.insert(status, message.into());
        self
    }

    /// Message registered for `status`, if any
    pub fn message_for(&self, status: u16) -> Option<&str> {
        self.messages.get(&status).map(String::as_str)
    }
}

/// Turn a non-success upstream status into a [`FetchError`]
///
/// - 2xx passes
/// - 404 is [`FetchError::NotFound`]
/// - 5xx is [`FetchError::Inaccessible`]
/// - anything else is [`FetchError::InvalidResponse`]
///
/// The badge message comes from `http_errors` when registered, otherwise from
/// the class default.
///
/// # Errors
///
/// Returns the mapped [`FetchError`] for every status outside 200-299
pub fn check_status(status: u16, http_errors: &HttpErrors) -> FetchResult<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let mapped = http_errors.message_for(status);

    if status == 404 {
        return Err(FetchError::NotFound {
            status,
            pretty_message: mapped.unwrap_or(DEFAULT_NOT_FOUND).to_string(),
        });
    }

    let reason = format!("Got status code {status} (expected 2xx)");

    if status >= 500 {
        Err(FetchError::Inaccessible {
            status: Some(status),
            pretty_message: mapped.unwrap_or(DEFAULT_INACCESSIBLE).to_string(),
            reason,
        })
    } else {
        Err(FetchError::InvalidResponse {
            status: Some(status),
            pretty_message: mapped.unwrap_or(DEFAULT_INVALID).to_string(),
            reason,
        })
    }
}
