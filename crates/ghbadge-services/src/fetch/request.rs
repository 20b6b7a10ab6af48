//! The fetcher capability services depend on

use super::error::{FetchError, FetchResult};
use super::http_errors::HttpErrors;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// One upstream GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonRequest {
    /// Path relative to the fetcher's base URL, e.g. `/search/code`
    pub path: String,
    /// Query pairs, URL-encoded by the fetcher
    pub query: Vec<(String, String)>,
    pub http_errors: HttpErrors,
}

impl JsonRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            http_errors: HttpErrors::default(),
        }
    }

    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn http_errors(mut self, http_errors: HttpErrors) -> Self {
        self.http_errors = http_errors;
        self
    }
}

/// Fetch a JSON document from an upstream API
///
/// Implementations own authentication, base URL, timeouts and status
/// mapping (via [`super::check_status`] and the request's [`HttpErrors`]).
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Perform `request` and return the parsed JSON body
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] for transport failures, non-success statuses
    /// and bodies that are not JSON
    async fn fetch_json(&self, request: &JsonRequest) -> FetchResult<Value>;
}

/// Fetch `request` and validate the body against `T`
///
/// Any body that does not deserialize into `T` (missing field, wrong type,
/// negative value for an unsigned field) is reported as
/// `invalid response data`. Nothing is defaulted.
///
/// # Errors
///
/// Propagates fetch errors and returns [`FetchError::InvalidResponse`] when
/// the body fails validation
pub async fn request_json<T: DeserializeOwned>(
    fetcher: &dyn JsonFetcher,
    request: &JsonRequest,
) -> FetchResult<T> {
    let body = fetcher.fetch_json(request).await?;

    serde_json::from_value(body).map_err(|e| {
        warn!(path = %request.path, error = %e, "Upstream response failed schema validation");
        FetchError::invalid_response_data(e.to_string())
    })
}
