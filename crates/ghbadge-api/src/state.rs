//! Application state for Axum handlers
//!
//! Built once at startup and cloned into every handler. All members are
//! immutable and shared through `Arc`, so handlers never lock.

use ghbadge_services::{GithubCodeSearch, JsonFetcher};
use std::sync::Arc;

/// Shared badge services
#[derive(Clone)]
pub struct AppState {
    /// GitHub code search counter
    pub code_search: Arc<GithubCodeSearch>,
}

impl AppState {
    /// Build every badge service on top of the given GitHub fetcher
    #[must_use]
    pub fn new(github: Arc<dyn JsonFetcher>) -> Self {
        Self {
            code_search: Arc::new(GithubCodeSearch::new(github)),
        }
    }
}
