//! Integration tests for the Marvel client.

use marvel::{Client, ClientConfig, ComicsParams, CommonParams, FixedClock, MarvelError};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(mock_server: &MockServer) -> Client {
    Client::with_config(
        "1234",
        "abcd",
        ClientConfig {
            base_url: Some(mock_server.uri()),
            ..Default::default()
        },
    )
    .unwrap()
    .with_clock(FixedClock(1))
}

fn envelope(results: serde_json::Value) -> serde_json::Value {
    let count = results.as_array().map(|r| r.len()).unwrap_or(0);
    serde_json::json!({
        "code": 200,
        "status": "Ok",
        "copyright": "© 2024 MARVEL",
        "attributionText": "Data provided by Marvel. © 2024 MARVEL",
        "data": {
            "offset": 0,
            "limit": 20,
            "total": count,
            "count": count,
            "results": results
        }
    })
}

#[tokio::test]
async fn test_client_creation() {
    let client = Client::new("public", "private");
    assert!(client.base_url().starts_with("https://"));
}

#[tokio::test]
async fn test_client_with_custom_config() {
    let client = Client::with_config(
        "public",
        "private",
        ClientConfig {
            base_url: Some("https://staging.example.com".to_string()),
            timeout: Some(Duration::from_secs(60)),
            user_agent: Some("test-agent/1.0".to_string()),
        },
    )
    .unwrap();
    assert_eq!(client.base_url(), "https://staging.example.com");
}

#[tokio::test]
async fn test_get_request_is_signed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public/characters/1009610"))
        .and(query_param("ts", "1"))
        .and(query_param("apikey", "1234"))
        .and(query_param("hash", "ffd275c5130566a2916217b101f26150"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!([
            {"id": 1009610, "name": "Spider-Man"}
        ]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.characters().get(1009610).await.unwrap();

    assert_eq!(response.code, Some(200));
    assert_eq!(response.data.results.len(), 1);
    assert_eq!(response.data.results[0].name.as_deref(), Some("Spider-Man"));
}

#[tokio::test]
async fn test_filters_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public/comics"))
        .and(query_param("titleStartsWith", "Uncanny"))
        .and(query_param("characters", "1009610,1009718"))
        .and(query_param("orderBy", "onsaleDate"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!([]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .comics()
        .list(&ComicsParams {
            common: CommonParams {
                limit: Some(10),
                order_by: Some("onsaleDate".to_string()),
                ..Default::default()
            },
            title_starts_with: Some("Uncanny".to_string()),
            characters: vec![1009610, 1009718],
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(response.data.results.is_empty());
}

#[tokio::test]
async fn test_rate_limited_error_keeps_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public/series/2258/comics"))
        .respond_with(
            ResponseTemplate::new(409).set_body_string(r#"{"code":409,"status":"rate limited"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.series().comics(2258, &ComicsParams::default()).await;

    match result {
        Err(MarvelError::Api { status_code, body }) => {
            assert_eq!(status_code, 409);
            assert!(body.contains("rate limited"));
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public/creators"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "code": "InvalidCredentials",
            "message": "That hash, timestamp and key combination is invalid."
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .creators()
        .list(&Default::default())
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
    assert_eq!(err.status_code(), Some(401));
    assert!(err.to_string().contains("InvalidCredentials"));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public/events/116"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.events().get(116).await;

    assert!(matches!(result, Err(MarvelError::Decode(_))));
}

#[tokio::test]
async fn test_wrong_shape_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public/stories/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "data": {"results": [{"id": "seven"}]}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.stories().get(7).await;

    assert!(matches!(result, Err(MarvelError::Decode(_))));
}

#[tokio::test]
async fn test_absent_and_zero_survive_the_wire() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public/comics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!([
            {"id": 1, "title": "No page count"},
            {"id": 2, "title": "Zero pages", "pageCount": 0}
        ]))))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.comics().list(&ComicsParams::default()).await.unwrap();

    assert_eq!(response.data.results[0].page_count, None);
    assert_eq!(response.data.results[1].page_count, Some(0));
}

#[tokio::test]
async fn test_transport_error() {
    // Nothing listens on port 1.
    let client = Client::with_config(
        "1234",
        "abcd",
        ClientConfig {
            base_url: Some("http://127.0.0.1:1".to_string()),
            timeout: Some(Duration::from_secs(5)),
            ..Default::default()
        },
    )
    .unwrap();

    let err = client.series().get(2258).await.unwrap_err();
    assert!(matches!(err, MarvelError::Transport(_)));
    assert!(err.is_retryable());
}
