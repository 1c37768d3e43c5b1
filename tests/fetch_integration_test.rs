use httpmock::prelude::*;
use lang_snippets::{fetch_data, fetch_json, FetchOutcome, ReqwestSource, SnippetError};
use std::time::Duration;

fn source() -> ReqwestSource {
    ReqwestSource::new(Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_data_against_mock_server() {
    let server = MockServer::start();
    let post = serde_json::json!({
        "userId": 1,
        "id": 1,
        "title": "sunt aut facere",
        "body": "quia et suscipit"
    });

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/posts/1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(post.clone());
    });

    let outcome = fetch_data(&source(), &server.url("/posts/1")).await;

    api_mock.assert();
    assert_eq!(outcome, FetchOutcome::Fetched(post));
}

#[tokio::test]
async fn test_non_json_body_is_reported_as_failure() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/posts/1");
        then.status(200).body("<html>oops</html>");
    });

    let outcome = fetch_data(&source(), &server.url("/posts/1")).await;

    api_mock.assert();
    assert!(!outcome.is_fetched());
}

#[tokio::test]
async fn test_error_status_with_json_body_still_decodes() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/posts/9999");
        then.status(404)
            .header("Content-Type", "application/json")
            .body("{}");
    });

    let data = fetch_json(&source(), &server.url("/posts/9999"))
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(data, serde_json::json!({}));
}

#[tokio::test]
async fn test_unreachable_host_is_reported_as_failure() {
    // Port 9 (discard) on localhost is expected to refuse connections.
    let err = fetch_json(&source(), "http://127.0.0.1:9/posts/1")
        .await
        .unwrap_err();
    assert!(matches!(err, SnippetError::Http(_)));

    let outcome = fetch_data(&source(), "http://127.0.0.1:9/posts/1").await;
    assert!(matches!(outcome, FetchOutcome::Failed(_)));
}

#[tokio::test]
async fn test_timeout_is_applied() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/slow");
        then.status(200)
            .delay(Duration::from_secs(3))
            .body("{}");
    });

    let quick = ReqwestSource::new(Duration::from_millis(200)).unwrap();
    let outcome = fetch_data(&quick, &server.url("/slow")).await;

    assert!(!outcome.is_fetched());
}
