//! Error badges for failed badge requests
//!
//! A failed badge request is still answered with `200 OK` and a badge body so
//! that README images keep rendering; the failure shows up in the badge
//! message and the `isError` flag. Every error carries the request's
//! [`CorrelationId`], which is logged and returned in `X-Correlation-ID`.
//!
//! # Usage
//!
//! ```rust
//! use ghbadge_api::{ApiError, ApiResult};
//! use ghbadge_common::CorrelationId;
//!
//! fn require_query(query: Option<String>) -> ApiResult<String> {
//!     query.ok_or_else(|| ApiError::InvalidParameter {
//!         name: "query",
//!         label: "counter",
//!         correlation_id: CorrelationId::new(),
//!     })
//! }
//! ```

use crate::middleware::CORRELATION_ID_HEADER;
use axum::{
    Json,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use ghbadge_common::CorrelationId;
use ghbadge_services::{Badge, FetchError, colors};
use thiserror::Error;
use tracing::{error, warn};

/// Failures surfaced to badge consumers
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required query parameter is missing or blank
    #[error("Invalid query parameter '{name}' (correlation: {correlation_id})")]
    InvalidParameter {
        name: &'static str,
        /// Default label of the service that rejected the request
        label: &'static str,
        correlation_id: CorrelationId,
    },

    /// The upstream fetch failed
    #[error("Upstream request failed: {source} (correlation: {correlation_id})")]
    Upstream {
        #[source]
        source: FetchError,
        label: &'static str,
        correlation_id: CorrelationId,
    },
}

impl ApiError {
    pub const fn upstream(
        source: FetchError,
        label: &'static str,
        correlation_id: CorrelationId,
    ) -> Self {
        Self::Upstream {
            source,
            label,
            correlation_id,
        }
    }

    pub const fn correlation_id(&self) -> &CorrelationId {
        match self {
            Self::InvalidParameter { correlation_id, .. }
            | Self::Upstream { correlation_id, .. } => correlation_id,
        }
    }

    /// Error badge shown in place of the requested one
    pub fn badge(&self) -> Badge {
        match self {
            Self::InvalidParameter { name, label, .. } => {
                Badge::error(*label, format!("invalid query parameter: {name}"), colors::RED)
            }
            Self::Upstream { source, label, .. } => {
                Badge::error(*label, source.pretty_message(), source.badge_color())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let correlation_id = self.correlation_id();

        match &self {
            Self::Upstream {
                source: FetchError::ImproperlyConfigured { .. },
                ..
            } => {
                error!(
                    correlation_id = %correlation_id,
                    error = %self,
                    "Badge service is misconfigured"
                );
            }
            Self::Upstream { source, .. } => {
                warn!(
                    correlation_id = %correlation_id,
                    upstream_status = source.status(),
                    error = %self,
                    "Upstream error"
                );
            }
            Self::InvalidParameter { .. } => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %self,
                    "Client error"
                );
            }
        }

        let mut response = (StatusCode::OK, Json(self.badge())).into_response();

        if let Ok(header_value) = HeaderValue::from_str(&correlation_id.to_string()) {
            response
                .headers_mut()
                .insert(CORRELATION_ID_HEADER.clone(), header_value);
        }

        response
    }
}

/// Result type for badge handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use serde_json::{Value, json};

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_parameter_renders_red_badge() {
        let error = ApiError::InvalidParameter {
            name: "query",
            label: "counter",
            correlation_id: CorrelationId::new(),
        };
        let id = error.correlation_id().to_string();

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-correlation-id"], id.as_str());
        assert_eq!(
            body_json(response).await,
            json!({
                "schemaVersion": 1,
                "label": "counter",
                "message": "invalid query parameter: query",
                "color": "red",
                "isError": true
            })
        );
    }

    #[tokio::test]
    async fn test_upstream_error_uses_pretty_message() {
        let source = FetchError::InvalidResponse {
            status: Some(401),
            pretty_message: "auth required for search api".to_string(),
            reason: "Got status code 401".to_string(),
        };
        let error = ApiError::upstream(source, "counter", CorrelationId::new());

        let body = body_json(error.into_response()).await;

        assert_eq!(body["message"], json!("auth required for search api"));
        assert_eq!(body["color"], json!("lightgray"));
        assert_eq!(body["isError"], json!(true));
    }

    #[test]
    fn test_not_found_badge_is_red() {
        let source = FetchError::NotFound {
            status: 404,
            pretty_message: "not found".to_string(),
        };
        let badge = ApiError::upstream(source, "counter", CorrelationId::new()).badge();

        assert_eq!(badge.color, "red");
        assert_eq!(badge.message, "not found");
    }
}
