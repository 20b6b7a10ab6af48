//! GitHub code search counter badge
//!
//! `GET /github/code-search?query=<search>` asks GitHub's code search for the
//! number of matches and shows it as `<search> counter | 1.2k`.

use crate::badge::{Badge, colors};
use crate::definition::{DefaultBadgeData, QueryParamSpec, RouteSpec, ServiceDefinition, ServiceDocs};
use crate::fetch::validators::non_negative_integer;
use crate::fetch::{FetchResult, HttpErrors, JsonFetcher, JsonRequest, request_json};
use ghbadge_common::formatters::metric;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};

const CODE_SEARCH_PATH: &str = "/search/code";
const AUTH_REQUIRED_MESSAGE: &str = "auth required for search api";

const CODE_SEARCH_DOCS: &str = "\
For a full list of available filters and allowed values, see GitHub's documentation on \
[Searching code](https://docs.github.com/en/search-github/github-code-search/understanding-github-code-search-syntax).

GitHub only serves code search to authenticated clients. When the server has no token \
configured the badge reads `auth required for search api`.";

const CODE_SEARCH_PARAMS: &[QueryParamSpec] = &[QueryParamSpec {
    name: "query",
    required: true,
    example: "goto language:javascript NOT is:fork NOT is:archived",
}];

/// Shape of the `/search/code` response we rely on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CodeSearchResult {
    /// Number of matches; negative or fractional values fail deserialization
    #[serde(deserialize_with = "non_negative_integer")]
    pub total_count: u64,
}

/// Code search counter service
pub struct GithubCodeSearch {
    fetcher: Arc<dyn JsonFetcher>,
}

impl GithubCodeSearch {
    pub const DEFINITION: ServiceDefinition = ServiceDefinition {
        name: "github_code_search",
        category: "analysis",
        route: RouteSpec {
            base: "github",
            pattern: "code-search",
            query_params: CODE_SEARCH_PARAMS,
        },
        docs: ServiceDocs {
            summary: "GitHub code search count",
            description: CODE_SEARCH_DOCS,
        },
        default_badge: DefaultBadgeData { label: "counter" },
    };

    pub fn new(fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self { fetcher }
    }

    /// The single upstream request issued for `query`
    pub fn request_for(query: &str) -> JsonRequest {
        JsonRequest::get(CODE_SEARCH_PATH)
            .query("q", query)
            .http_errors(HttpErrors::new().with(401, AUTH_REQUIRED_MESSAGE))
    }

    /// Badge for a known match count
    pub fn render(query: &str, total_count: u64) -> Badge {
        Badge::new(format!("{query} counter"), metric(total_count), colors::BLUE)
    }

    /// Count code matches for `query` and render the badge
    ///
    /// `query` is passed to GitHub verbatim; callers must reject empty input.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::FetchError`] when GitHub is unreachable, answers with
    /// an error status (401 reads `auth required for search api`) or returns a
    /// body without a non-negative integer `total_count`
    #[instrument(skip(self))]
    pub async fn handle(&self, query: &str) -> FetchResult<Badge> {
        let result: CodeSearchResult =
            request_json(self.fetcher.as_ref(), &Self::request_for(query)).await?;

        debug!(total_count = result.total_count, "Code search count received");

        Ok(Self::render(query, result.total_count))
    }
}
