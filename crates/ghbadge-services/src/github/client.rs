//! Authenticated GitHub REST client

use crate::fetch::{FetchError, FetchResult, JsonFetcher, JsonRequest, check_status};
use async_trait::async_trait;
use ghbadge_config::GithubConfig;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::{debug, instrument, warn};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION_HEADER: &str = "x-github-api-version";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// [`JsonFetcher`] for the GitHub REST API
///
/// Injects the configured token as a bearer credential on every request.
/// The underlying `reqwest::Client` pools connections, so one instance is
/// shared by all services.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    authenticated: bool,
}

impl GithubClient {
    /// Build a client from configuration
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ImproperlyConfigured`] if the token or user agent
    /// cannot be used as a header value, or the HTTP client fails to build
    pub fn new(config: &GithubConfig) -> FetchResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.insert(
            HeaderName::from_static(GITHUB_API_VERSION_HEADER),
            HeaderValue::from_static(GITHUB_API_VERSION),
        );

        let token = config.bearer_token();

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
                FetchError::ImproperlyConfigured {
                    reason: format!("GitHub token is not a valid header value: {e}"),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| FetchError::ImproperlyConfigured {
                reason: format!("Failed to build GitHub HTTP client: {e}"),
            })?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            authenticated: token.is_some(),
        })
    }

    /// Whether requests carry a token
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl JsonFetcher for GithubClient {
    #[instrument(skip(self, request), fields(path = %request.path))]
    async fn fetch_json(&self, request: &JsonRequest) -> FetchResult<Value> {
        let url = self.url_for(&request.path);
        debug!(url = %url, authenticated = self.authenticated, "Requesting GitHub API");

        let response = self
            .http
            .get(&url)
            .query(&request.query)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "GitHub request failed");
                FetchError::unreachable(e.to_string())
            })?;

        let status = response.status().as_u16();
        if let Err(error) = check_status(status, &request.http_errors) {
            warn!(url = %url, status, message = error.pretty_message(), "GitHub returned an error status");
            return Err(error);
        }

        let body = response.bytes().await.map_err(|e| {
            warn!(url = %url, error = %e, "Failed to read GitHub response body");
            FetchError::unreachable(e.to_string())
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!(url = %url, status, error = %e, "GitHub response is not JSON");
            FetchError::unparseable_json(status, e.to_string())
        })
    }
}
