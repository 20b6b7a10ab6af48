//! Centralized configuration management for ghbadge
//!
//! Configuration follows a simple hierarchy:
//! 1. Safe defaults (defined as constants)
//! 2. Optional TOML file
//! 3. Environment variable overrides
//! 4. Runtime validation

pub mod error;
pub mod source;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use source::{ConfigurationLoader, ConfigurationSource, EnvironmentSource, TomlFileSource};
pub use validation::Validate;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

// =============================================================================
// SAFE DEFAULTS - Work for any environment (dev, staging, prod, test)
// =============================================================================

// GitHub upstream
const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";
const DEFAULT_GITHUB_USER_AGENT: &str = concat!("ghbadge/", env!("CARGO_PKG_VERSION"));
const DEFAULT_GITHUB_TIMEOUT_SECONDS: u64 = 10;
const MAX_GITHUB_TIMEOUT_SECONDS: u64 = 300;

// API server
const DEFAULT_API_HOST: &str = "127.0.0.1"; // Localhost only for security
const DEFAULT_API_PORT: u16 = 8080;
const DEFAULT_API_ENABLE_DOCS: bool = true;

// Telemetry
const DEFAULT_TRACING_LEVEL: &str = "info";
const DEFAULT_JSON_LOGS: bool = false;
const DEFAULT_TELEMETRY_SERVICE_NAME: &str = "ghbadge";

/// Environment variable naming an optional TOML configuration file
pub const CONFIG_FILE_ENV: &str = "GHBADGE_CONFIG_FILE";

/// Read and parse an environment variable, ignoring unparseable values
fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

/// Core configuration for the ghbadge service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Upstream GitHub API configuration
    pub github: GithubConfig,

    /// API server configuration
    pub api: ApiConfig,

    /// Logging configuration
    pub telemetry: TelemetryConfig,
}

/// Upstream GitHub REST API settings
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Base URL of the REST API (GitHub Enterprise uses `https://host/api/v3`)
    pub api_base_url: String,

    /// Token injected as a bearer credential. Never serialized.
    #[serde(skip_serializing)]
    pub token: Option<String>,

    /// `User-Agent` header; GitHub rejects requests without one
    pub user_agent: String,

    /// Per-request timeout enforced by the HTTP client
    pub timeout_seconds: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_GITHUB_API_BASE_URL.to_string(),
            token: None,
            user_agent: DEFAULT_GITHUB_USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_GITHUB_TIMEOUT_SECONDS,
        }
    }
}

impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("api_base_url", &self.api_base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl GithubConfig {
    /// Overwrite fields that have an environment variable set
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("GHBADGE_GITHUB_API_BASE_URL") {
            self.api_base_url = url;
        }

        if let Some(token) = std::env::var("GHBADGE_GITHUB_TOKEN")
            .or_else(|_| std::env::var("GITHUB_TOKEN"))
            .ok()
            .filter(|t| !t.trim().is_empty())
        {
            self.token = Some(token);
        }

        if let Ok(user_agent) = std::env::var("GHBADGE_GITHUB_USER_AGENT") {
            self.user_agent = user_agent;
        }

        if let Some(timeout) = env_parse("GHBADGE_GITHUB_TIMEOUT_SECONDS") {
            self.timeout_seconds = timeout;
        }
    }

    /// Token to send, trimmed; blank values count as no token
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Request timeout as a [`Duration`]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for GithubConfig {
    fn validate(&self) -> ConfigResult<()> {
        validation::validate_url(&self.api_base_url, "github.api_base_url")?;
        validation::validate_non_empty(&self.user_agent, "github.user_agent")?;
        validation::validate_range(
            self.timeout_seconds,
            1,
            MAX_GITHUB_TIMEOUT_SECONDS,
            "github.timeout_seconds",
        )?;
        Ok(())
    }
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Enable OpenAPI/Swagger documentation
    pub enable_docs: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_API_HOST.to_string(),
            port: DEFAULT_API_PORT,
            enable_docs: DEFAULT_API_ENABLE_DOCS,
        }
    }
}

impl ApiConfig {
    /// Overwrite fields that have an environment variable set
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("GHBADGE_API_HOST") {
            self.host = host;
        }
        if let Some(port) = env_parse("GHBADGE_API_PORT") {
            self.port = port;
        }
        if let Some(enable_docs) = env_parse("GHBADGE_API_ENABLE_DOCS") {
            self.enable_docs = enable_docs;
        }
    }

    /// `host:port` string suitable for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> ConfigResult<()> {
        validation::validate_non_empty(&self.host, "api.host")?;
        validation::validate_port(self.port, "api.port")?;
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Tracing level (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    pub tracing_level: String,

    /// Emit logs as JSON lines instead of the compact text format
    pub json_logs: bool,

    /// Service name attached to startup logs
    pub service_name: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            tracing_level: DEFAULT_TRACING_LEVEL.to_string(),
            json_logs: DEFAULT_JSON_LOGS,
            service_name: DEFAULT_TELEMETRY_SERVICE_NAME.to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Overwrite fields that have an environment variable set
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("GHBADGE_TELEMETRY_TRACING_LEVEL") {
            self.tracing_level = level;
        }
        if let Some(json_logs) = env_parse("GHBADGE_TELEMETRY_JSON_LOGS") {
            self.json_logs = json_logs;
        }
        if let Ok(service_name) = std::env::var("GHBADGE_TELEMETRY_SERVICE_NAME") {
            self.service_name = service_name;
        }
    }
}

impl Validate for TelemetryConfig {
    fn validate(&self) -> ConfigResult<()> {
        validation::validate_non_empty(&self.service_name, "telemetry.service_name")?;

        match self.tracing_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::Generic {
                message: format!("Invalid tracing level: {}", self.tracing_level),
            }),
        }
    }
}

impl ApplicationConfig {
    /// Overwrite every section's fields that have an environment variable set
    pub fn apply_env_overrides(&mut self) {
        self.github.apply_env_overrides();
        self.api.apply_env_overrides();
        self.telemetry.apply_env_overrides();
    }

    /// Load configuration the way the server does at startup
    ///
    /// Defaults, then the TOML file named by `GHBADGE_CONFIG_FILE` (if set),
    /// then environment overrides, then validation.
    ///
    /// # Errors
    /// Returns validation errors for the merged configuration
    pub fn load() -> ConfigResult<Self> {
        let mut loader = ConfigurationLoader::new().add_source(Box::new(EnvironmentSource));
        if let Ok(path) = std::env::var(CONFIG_FILE_ENV) {
            loader = loader.add_source(Box::new(TomlFileSource::new(path)));
        }
        loader.load()
    }
}

impl Validate for ApplicationConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.github.validate()?;
        self.api.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}
