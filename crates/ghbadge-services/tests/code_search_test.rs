//! End-to-end code search badge: service + GitHub client + mock GitHub

use ghbadge_services::{Badge, FetchError, GithubClient, GithubCodeSearch, JsonFetcher};
use ghbadge_test_utils::{
    TEST_TOKEN, TestResult, code_search_body, github_config, mount_code_search, start_github_mock,
};
use serde_json::json;
use std::sync::Arc;
use wiremock::{MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> Result<GithubCodeSearch, FetchError> {
    let client = GithubClient::new(&github_config(server, Some(TEST_TOKEN)))?;
    Ok(GithubCodeSearch::new(Arc::new(client) as Arc<dyn JsonFetcher>))
}

#[tokio::test]
async fn test_counter_badge_for_javascript_goto() -> TestResult {
    let query = "goto language:javascript NOT is:fork NOT is:archived";
    let server = start_github_mock().await;
    mount_code_search(
        &server,
        query,
        ResponseTemplate::new(200).set_body_json(code_search_body(42)),
    )
    .await;

    let badge = service_for(&server)?.handle(query).await?;

    assert_eq!(
        badge,
        Badge::new(
            "goto language:javascript NOT is:fork NOT is:archived counter",
            "42",
            "blue"
        )
    );
    Ok(())
}

#[tokio::test]
async fn test_counter_badge_abbreviates_thousands() -> TestResult {
    let server = start_github_mock().await;
    mount_code_search(
        &server,
        "foo",
        ResponseTemplate::new(200).set_body_json(code_search_body(12345)),
    )
    .await;

    let badge = service_for(&server)?.handle("foo").await?;

    assert_eq!(badge.label, "foo counter");
    assert_eq!(badge.message, "12k");
    assert_eq!(badge.color, "blue");
    Ok(())
}

#[tokio::test]
async fn test_unauthorized_upstream_fails_with_auth_message() -> TestResult {
    let server = start_github_mock().await;
    mount_code_search(&server, "foo", ResponseTemplate::new(401)).await;

    let error = service_for(&server)?.handle("foo").await.err();

    assert_eq!(
        error.as_ref().map(FetchError::pretty_message),
        Some("auth required for search api")
    );
    Ok(())
}

#[tokio::test]
async fn test_negative_count_is_rejected() -> TestResult {
    let server = start_github_mock().await;
    mount_code_search(
        &server,
        "foo",
        ResponseTemplate::new(200).set_body_json(code_search_body(-5)),
    )
    .await;

    let error = service_for(&server)?.handle("foo").await.err();

    assert_eq!(
        error.as_ref().map(FetchError::pretty_message),
        Some("invalid response data")
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_count_is_rejected() -> TestResult {
    let server = start_github_mock().await;
    mount_code_search(
        &server,
        "foo",
        ResponseTemplate::new(200).set_body_json(json!({ "incomplete_results": false })),
    )
    .await;

    let result = service_for(&server)?.handle("foo").await;

    assert!(matches!(result, Err(FetchError::InvalidResponse { .. })));
    Ok(())
}
