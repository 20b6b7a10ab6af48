//! Shared test utilities for ghbadge integration tests
//!
//! Wraps a `wiremock` server standing in for the GitHub REST API.
//!
//! ```no_run
//! # async fn example() {
//! use ghbadge_test_utils::{code_search_body, github_config, mount_code_search, start_github_mock};
//! use wiremock::ResponseTemplate;
//!
//! let server = start_github_mock().await;
//! mount_code_search(&server, "foo", ResponseTemplate::new(200).set_body_json(code_search_body(42))).await;
//! let config = github_config(&server, Some("ghp_test"));
//! # }
//! ```

use ghbadge_config::GithubConfig;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Standard test result type for all test functions
pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Token used by tests that exercise authenticated requests
pub const TEST_TOKEN: &str = "ghp_test_token_0123456789";

/// Start a fresh mock GitHub API server
pub async fn start_github_mock() -> MockServer {
    MockServer::start().await
}

/// GitHub configuration pointed at `server`
pub fn github_config(server: &MockServer, token: Option<&str>) -> GithubConfig {
    GithubConfig {
        api_base_url: server.uri(),
        token: token.map(str::to_string),
        timeout_seconds: 5,
        ..GithubConfig::default()
    }
}

/// A realistic `/search/code` body with the given total
pub fn code_search_body(total_count: i64) -> Value {
    json!({
        "total_count": total_count,
        "incomplete_results": false,
        "items": []
    })
}

/// Expect exactly one `/search/code?q=<query>` call answered with `response`
///
/// The expectation is verified when the server is dropped.
pub async fn mount_code_search(server: &MockServer, query: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/search/code"))
        .and(query_param("q", query))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}
