//! Static registration data describing a badge service
//!
//! Definitions are plain `const` values. The API layer reads them at startup
//! to mount routes, label error badges and publish documentation.

use serde::Serialize;

/// Everything the host needs to know about a service without running it
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceDefinition {
    /// Stable identifier, used in logs
    pub name: &'static str,
    /// Catalogue category (e.g. `analysis`, `downloads`)
    pub category: &'static str,
    pub route: RouteSpec,
    pub docs: ServiceDocs,
    pub default_badge: DefaultBadgeData,
}

/// Where a service is mounted and which query parameters it accepts
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RouteSpec {
    /// First path segment, shared by services of the same upstream
    pub base: &'static str,
    /// Remaining path under `base`
    pub pattern: &'static str,
    pub query_params: &'static [QueryParamSpec],
}

impl RouteSpec {
    /// Absolute route path, e.g. `/github/code-search`
    pub fn path(&self) -> String {
        format!("/{}/{}", self.base, self.pattern)
    }

    /// Names of required query parameters
    pub fn required_params(&self) -> impl Iterator<Item = &'static str> {
        self.query_params
            .iter()
            .filter(|param| param.required)
            .map(|param| param.name)
    }
}

/// A single documented query parameter
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QueryParamSpec {
    pub name: &'static str,
    pub required: bool,
    pub example: &'static str,
}

/// Human-facing documentation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceDocs {
    pub summary: &'static str,
    /// Markdown
    pub description: &'static str,
}

/// Badge fields used when the service cannot produce its own (error badges)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DefaultBadgeData {
    pub label: &'static str,
}
