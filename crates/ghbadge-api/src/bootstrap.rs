//! Application bootstrap and service initialization
//!
//! Separates service construction from the binary entry point so tests can
//! build the same state against a mock upstream.

use anyhow::Context;
use ghbadge_config::ApplicationConfig;
use ghbadge_services::{GithubClient, JsonFetcher};
use std::sync::Arc;
use tracing::{info, warn};

use crate::AppState;

/// Bootstrap result type
pub type BootstrapResult<T> = anyhow::Result<T>;

/// Build the shared GitHub client
///
/// # Errors
///
/// Returns error if the token or user agent cannot be sent as a header, or
/// the HTTP client cannot be built
pub fn setup_github_client(config: &ApplicationConfig) -> BootstrapResult<Arc<dyn JsonFetcher>> {
    info!(
        api_base_url = %config.github.api_base_url,
        timeout_seconds = config.github.timeout_seconds,
        "Initializing GitHub client..."
    );

    let client = GithubClient::new(&config.github).context("Failed to build GitHub client")?;

    if !client.is_authenticated() {
        warn!("No GitHub token configured; code search badges will read 'auth required for search api'");
    }

    Ok(Arc::new(client) as Arc<dyn JsonFetcher>)
}

/// Initialize all services and create application state
///
/// # Errors
///
/// Returns error if any service initialization fails
pub fn initialize_app_state(config: &ApplicationConfig) -> BootstrapResult<AppState> {
    let github = setup_github_client(config)?;
    let state = AppState::new(github);

    info!("Application state initialized successfully");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstraps_with_default_config() {
        let config = ApplicationConfig::default();
        assert!(initialize_app_state(&config).is_ok());
    }

    #[test]
    fn test_rejects_token_with_newline() {
        let mut config = ApplicationConfig::default();
        config.github.token = Some("ghp_abc\ndef".to_string());

        let error = setup_github_client(&config).err().map(|e| e.to_string());

        assert_eq!(error.as_deref(), Some("Failed to build GitHub client"));
    }
}
