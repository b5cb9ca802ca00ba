//! Configuration and client tests.
//!
//! Tests actual behavior, not constants.

use std::path::PathBuf;

use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scholar_graph_mcp::client::{ScholarClient, request};
use scholar_graph_mcp::config::Config;
use scholar_graph_mcp::error::ClientError;
use scholar_graph_mcp::models::{GetPaperBatchInput, GetPaperInput};

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_default_has_no_api_key() {
    let config = Config::default();
    assert!(!config.has_api_key());
}

#[test]
fn test_config_with_api_key() {
    let config = Config::new(Some("test-key".to_string()), None);
    assert!(config.has_api_key());
    assert_eq!(config.api_key.as_deref(), Some("test-key"));
}

#[test]
fn test_config_download_dir_override() {
    let config = Config::new(None, Some(PathBuf::from("/srv/papers")));
    assert_eq!(config.download_dir, PathBuf::from("/srv/papers"));
}

#[test]
fn test_config_for_testing_points_at_mock() {
    let config = Config::for_testing("http://127.0.0.1:4000/");
    assert_eq!(config.graph_api_url, "http://127.0.0.1:4000/graph/v1");
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_reports_api_key_status() {
    let client = ScholarClient::new(&Config::new(Some("key".to_string()), None)).unwrap();
    assert!(client.has_api_key());

    let client_no_key = ScholarClient::new(&Config::default()).unwrap();
    assert!(!client_no_key.has_api_key());
}

#[test]
fn test_client_debug_hides_api_key() {
    let config = Config::new(Some("super-secret-key".to_string()), None);
    let client = ScholarClient::new(&config).unwrap();
    let debug = format!("{client:?}");
    assert!(!debug.contains("super-secret-key"));
    assert!(debug.contains("has_api_key"));
}

#[test]
fn test_client_url_joins_paths() {
    let client = ScholarClient::new(&Config::for_testing("http://localhost:1")).unwrap();
    assert_eq!(client.url("paper/abc"), "http://localhost:1/graph/v1/paper/abc");
    assert_eq!(client.url("/paper/abc"), "http://localhost:1/graph/v1/paper/abc");
}

#[tokio::test]
async fn test_api_key_header_sent_when_configured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .and(header("x-api-key", "my-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"paperId": "p1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config::for_testing_with_key(&mock_server.uri(), "my-key");
    let client = ScholarClient::new(&config).unwrap();
    let input = GetPaperInput { paper_id: "p1".into(), fields: None };

    let value = client.execute(&request::get_paper(&input).unwrap()).await.unwrap();
    assert_eq!(value["paperId"], "p1");
}

#[tokio::test]
async fn test_pdf_fetch_does_not_send_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/a.pdf"))
        .and(header_exists("x-api-key"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/a.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4".to_vec()))
        .mount(&mock_server)
        .await;

    let config = Config::for_testing_with_key(&mock_server.uri(), "my-key");
    let client = ScholarClient::new(&config).unwrap();

    let payload = client.fetch_pdf(&format!("{}/files/a.pdf", mock_server.uri())).await.unwrap();
    assert!(payload.looks_like_pdf());
    assert_eq!(payload.bytes, b"%PDF-1.4");
}

#[tokio::test]
async fn test_batch_is_post_with_ids_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graph/v1/paper/batch"))
        .and(query_param("fields", "paperId,title"))
        .and(body_json(json!({"ids": ["a", "b"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"paperId": "a"}, null])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ScholarClient::new(&Config::for_testing(&mock_server.uri())).unwrap();
    let input = GetPaperBatchInput {
        paper_ids: Some(vec!["a".into(), "b".into()]),
        fields: Some(vec!["paperId".into(), "title".into()]),
    };

    let value = client.execute(&request::get_paper_batch(&input).unwrap()).await.unwrap();
    assert_eq!(value[1], serde_json::Value::Null);
}

#[tokio::test]
async fn test_non_json_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = ScholarClient::new(&Config::for_testing(&mock_server.uri())).unwrap();
    let input = GetPaperInput { paper_id: "p1".into(), fields: None };

    let err = client.execute(&request::get_paper(&input).unwrap()).await.unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)));
}

#[tokio::test]
async fn test_retry_after_header_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ScholarClient::new(&Config::for_testing(&mock_server.uri())).unwrap();
    let input = GetPaperInput { paper_id: "p1".into(), fields: None };

    let err = client.execute(&request::get_paper(&input).unwrap()).await.unwrap_err();
    assert!(matches!(err, ClientError::RateLimited { retry_after: Some(7) }));
}
