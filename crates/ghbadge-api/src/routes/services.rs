//! Catalogue of mounted badge services

use super::REGISTERED_SERVICES;
use axum::{Json, Router, routing::get};
use ghbadge_services::ServiceDefinition;

pub fn routes() -> Router {
    Router::new().route("/services", get(list_services))
}

/// Static definitions of every registered service
async fn list_services() -> Json<&'static [ServiceDefinition]> {
    Json(REGISTERED_SERVICES)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_lists_code_search_definition() {
        let request = Request::builder()
            .uri("/services")
            .body(Body::empty())
            .unwrap();

        let response = routes().oneshot(request).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let services: Value = serde_json::from_slice(&body).unwrap();

        let first = &services[0];
        assert_eq!(first["name"], "github_code_search");
        assert_eq!(first["category"], "analysis");
        assert_eq!(first["route"]["base"], "github");
        assert_eq!(first["route"]["pattern"], "code-search");
        assert_eq!(first["default_badge"], json!({ "label": "counter" }));
        assert_eq!(first["route"]["query_params"][0]["required"], json!(true));
    }
}
