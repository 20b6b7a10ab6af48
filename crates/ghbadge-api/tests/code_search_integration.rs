//! Full request path: router → middleware → service → GitHub client → mock GitHub

#![allow(clippy::unwrap_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use ghbadge_api::bootstrap::initialize_app_state;
use ghbadge_api::routes::create_router;
use ghbadge_config::ApplicationConfig;
use ghbadge_test_utils::{
    TEST_TOKEN, TestResult, code_search_body, github_config, mount_code_search, start_github_mock,
};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::{MockServer, ResponseTemplate};

fn app(server: &MockServer, token: Option<&str>) -> Router {
    let config = ApplicationConfig {
        github: github_config(server, token),
        ..ApplicationConfig::default()
    };
    let state = initialize_app_state(&config).unwrap();
    create_router(state, &config.api)
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn badge_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_code_search_badge_end_to_end() -> TestResult {
    let server = start_github_mock().await;
    mount_code_search(
        &server,
        "goto language:javascript NOT is:fork NOT is:archived",
        ResponseTemplate::new(200).set_body_json(code_search_body(42)),
    )
    .await;

    let response = app(&server, Some(TEST_TOKEN))
        .oneshot(badge_request(
            "/github/code-search?query=goto%20language%3Ajavascript%20NOT%20is%3Afork%20NOT%20is%3Aarchived",
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-correlation-id"));
    assert_eq!(
        body_json(response).await,
        json!({
            "schemaVersion": 1,
            "label": "goto language:javascript NOT is:fork NOT is:archived counter",
            "message": "42",
            "color": "blue"
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_large_count_is_abbreviated() -> TestResult {
    let server = start_github_mock().await;
    mount_code_search(
        &server,
        "foo",
        ResponseTemplate::new(200).set_body_json(code_search_body(12345)),
    )
    .await;

    let response = app(&server, Some(TEST_TOKEN))
        .oneshot(badge_request("/github/code-search?query=foo"))
        .await?;

    let body = body_json(response).await;
    assert_eq!(body["label"], "foo counter");
    assert_eq!(body["message"], "12k");
    Ok(())
}

#[tokio::test]
async fn test_missing_token_reads_auth_required() -> TestResult {
    let server = start_github_mock().await;
    mount_code_search(&server, "foo", ResponseTemplate::new(401)).await;

    let response = app(&server, None)
        .oneshot(badge_request("/github/code-search?query=foo"))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "auth required for search api");
    assert_eq!(body["label"], "counter");
    assert_eq!(body["isError"], true);
    Ok(())
}

#[tokio::test]
async fn test_upstream_failures_render_error_badges() -> TestResult {
    let cases = [
        (ResponseTemplate::new(404), "not found", "red"),
        (ResponseTemplate::new(500), "inaccessible", "lightgray"),
        (
            ResponseTemplate::new(200).set_body_string("not json"),
            "unparseable json response",
            "lightgray",
        ),
        (
            ResponseTemplate::new(200).set_body_json(code_search_body(-1)),
            "invalid response data",
            "lightgray",
        ),
    ];

    for (template, message, color) in cases {
        let server = start_github_mock().await;
        mount_code_search(&server, "foo", template).await;

        let response = app(&server, Some(TEST_TOKEN))
            .oneshot(badge_request("/github/code-search?query=foo"))
            .await?;

        let body = body_json(response).await;
        assert_eq!(body["message"], message);
        assert_eq!(body["color"], color);
    }
    Ok(())
}

#[tokio::test]
async fn test_correlation_id_is_echoed() -> TestResult {
    let server = start_github_mock().await;
    let id = "0b6a3d5e-7c1f-4e2a-8d9b-3f4e5a6b7c8d";

    let request = Request::builder()
        .uri("/github/code-search")
        .header("X-Correlation-ID", id)
        .body(Body::empty())?;
    let response = app(&server, Some(TEST_TOKEN)).oneshot(request).await?;

    assert_eq!(response.headers()["x-correlation-id"], id);
    assert_eq!(body_json(response).await["message"], json!("invalid query parameter: query"));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
    Ok(())
}
