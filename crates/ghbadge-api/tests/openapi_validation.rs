//! OpenAPI schema validation tests
//!
//! Validates that the served OpenAPI document describes the badge routes

#![allow(clippy::unwrap_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use ghbadge_api::{AppState, openapi::ApiDoc, routes::create_router};
use ghbadge_config::ApiConfig;
use ghbadge_services::{GithubClient, GithubCodeSearch, JsonFetcher};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use utoipa::OpenApi;

fn app(enable_docs: bool) -> Router {
    let client = GithubClient::new(&ghbadge_config::GithubConfig::default()).unwrap();
    let state = AppState::new(Arc::new(client) as Arc<dyn JsonFetcher>);
    let config = ApiConfig {
        enable_docs,
        ..ApiConfig::default()
    };
    create_router(state, &config)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_openapi_json_endpoints_accessible() {
    let (status, _) = get(app(true), "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(app(true), "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_docs_routes_absent_when_disabled() {
    let (status, _) = get(app(false), "/openapi.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn test_openapi_schema_structure() {
    let doc = ApiDoc::openapi();

    assert_eq!(doc.info.title, "ghbadge API");
    assert_eq!(doc.info.version, "0.1.0");

    assert!(
        doc.paths.paths.contains_key("/github/code-search"),
        "Should have /github/code-search endpoint"
    );

    let schemas = &doc.components.as_ref().unwrap().schemas;
    assert!(schemas.contains_key("Badge"), "Should have Badge schema");
}

#[tokio::test]
async fn test_live_schema_documents_code_search() {
    let (status, body) = get(app(true), "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);

    let schema: Value = serde_json::from_slice(&body).unwrap();
    assert!(schema["openapi"].as_str().unwrap().starts_with("3."));

    let operation = &schema["paths"]["/github/code-search"]["get"];
    assert_eq!(operation["summary"], "GitHub code search count");

    let description = operation["description"].as_str().unwrap();
    assert!(
        description.contains("docs.github.com/en/search-github/github-code-search"),
        "Description should link GitHub's code search syntax: {description}"
    );
    assert_eq!(
        description,
        GithubCodeSearch::DEFINITION.docs.description,
        "OpenAPI and /services should describe the route the same way"
    );

    let parameter = &operation["parameters"][0];
    assert_eq!(parameter["name"], "query");
    assert_eq!(parameter["in"], "query");
    assert_eq!(parameter["required"], true);
    assert_eq!(
        parameter["example"],
        "goto language:javascript NOT is:fork NOT is:archived"
    );
}
