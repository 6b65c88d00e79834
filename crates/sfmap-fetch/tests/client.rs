//! Integration tests for `MapDataClient` using wiremock HTTP mocks.

use sfmap_fetch::{FetchError, FetchSettings, MapDataClient, ACCEPT_HEADER};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const MAP_PATH: &str = "/data/json/mapData/en-Stable.json";

fn test_client(server: &MockServer, max_retries: u32) -> MapDataClient {
    MapDataClient::with_settings(FetchSettings {
        source_url: format!("{}{MAP_PATH}?v=1759732267", server.uri()),
        referer: "https://satisfactory-calculator.com/".to_owned(),
        user_agent: "sfmap-test/0.1".to_owned(),
        timeout_secs: 5,
        max_retries,
        backoff_base_ms: 0,
    })
    .expect("client construction should not fail")
}

#[tokio::test]
async fn fetch_document_returns_parsed_json() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "version": 4,
        "lastBuild": "264901",
        "options": [{"tabId": "resource_nodes", "options": []}]
    });

    Mock::given(method("GET"))
        .and(path(MAP_PATH))
        .and(query_param("v", "1759732267"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    let doc = client.fetch_document().await.expect("should fetch document");

    assert_eq!(doc, body);
}

#[tokio::test]
async fn fetch_document_sends_site_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(|req: &Request| {
            req.headers.get("accept").and_then(|v| v.to_str().ok()) == Some(ACCEPT_HEADER)
        })
        .and(header("referer", "https://satisfactory-calculator.com/"))
        .and(header("user-agent", "sfmap-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    client
        .fetch_document()
        .await
        .expect("headers should match the mock");
}

#[tokio::test]
async fn fetch_document_retries_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"version": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 3);
    let doc = client
        .fetch_document()
        .await
        .expect("should succeed after two 503s");

    assert_eq!(doc["version"], 1);
}

#[tokio::test]
async fn fetch_document_does_not_retry_client_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 3);
    let err = client.fetch_document().await.unwrap_err();

    assert!(
        matches!(err, FetchError::UnexpectedStatus { status: 403, .. }),
        "expected UnexpectedStatus(403), got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_document_gives_up_after_max_retries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server, 1);
    let err = client.fetch_document().await.unwrap_err();

    assert!(matches!(
        err,
        FetchError::UnexpectedStatus { status: 500, .. }
    ));
}

#[tokio::test]
async fn fetch_document_rejects_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>blocked</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    let err = client.fetch_document().await.unwrap_err();

    assert!(
        matches!(err, FetchError::Deserialize { .. }),
        "expected Deserialize error, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_document_rejects_null_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    let err = client.fetch_document().await.unwrap_err();

    assert!(matches!(err, FetchError::EmptyDocument));
}
