//! Tests for MCP protocol JSON-RPC handling.
//!
//! These tests drive the dispatcher and the HTTP router the way a client would.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scholar_graph_mcp::config::Config;
use scholar_graph_mcp::server::McpServer;
use scholar_graph_mcp::server::protocol::{Dispatcher, INVALID_PARAMS, PARSE_ERROR};
use scholar_graph_mcp::server::transport::create_router;
use scholar_graph_mcp::tools::{self, ToolContext};

fn build_dispatcher(base_url: &str) -> Arc<Dispatcher> {
    let ctx = ToolContext::from_config(&Config::for_testing(base_url)).unwrap();
    Arc::new(Dispatcher::new(tools::register_all_tools(), ctx))
}

fn build_test_router(base_url: &str) -> axum::Router {
    create_router(build_dispatcher(base_url))
}

async fn post_mcp(app: axum::Router, body: &str) -> (StatusCode, Option<Value>) {
    let response = app
        .oneshot(
            Request::post("/mcp")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = (!bytes.is_empty()).then(|| serde_json::from_slice(&bytes).unwrap());
    (status, json)
}

// =============================================================================
// Server surface
// =============================================================================

#[test]
fn test_server_lists_all_tools() {
    let server = McpServer::from_config(&Config::for_testing("http://127.0.0.1:9")).unwrap();
    let names: Vec<&str> = server.list_tools().into_iter().map(|(name, _)| name).collect();

    for expected in [
        "search_papers",
        "get_paper",
        "get_paper_batch",
        "search_authors",
        "get_author",
        "search_snippets",
        "get_paper_citations",
        "get_paper_references",
        "get_citation_context",
        "get_paper_pdf_info",
        "download_paper_pdf",
    ] {
        assert!(names.contains(&expected), "missing {expected}");
        assert!(server.get_tool(expected).is_some());
    }
    assert_eq!(names.len(), 11);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = build_test_router("http://127.0.0.1:9");
    let response = app.oneshot(Request::get("/health").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "scholar-graph-mcp");
    assert_eq!(json["tools"], 11);
}

// =============================================================================
// HTTP transport
// =============================================================================

#[tokio::test]
async fn test_http_initialize() {
    let request = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {"protocolVersion": "2024-11-05"}
    });
    let (status, json) =
        post_mcp(build_test_router("http://127.0.0.1:9"), &request.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let json = json.unwrap();
    assert_eq!(json["jsonrpc"], "2.0");
    assert_eq!(json["id"], 1);
    assert_eq!(json["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(json["result"]["capabilities"]["tools"]["listChanged"], false);
}

#[tokio::test]
async fn test_http_notification_is_accepted_without_body() {
    let (status, json) = post_mcp(
        build_test_router("http://127.0.0.1:9"),
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert!(json.is_none());
}

#[tokio::test]
async fn test_http_parse_error() {
    let (status, json) = post_mcp(build_test_router("http://127.0.0.1:9"), "{oops").await;

    assert_eq!(status, StatusCode::OK);
    let json = json.unwrap();
    assert_eq!(json["error"]["code"], PARSE_ERROR);
    assert_eq!(json["id"], Value::Null);
}

#[tokio::test]
async fn test_http_tools_list_schemas() {
    let (_, json) = post_mcp(
        build_test_router("http://127.0.0.1:9"),
        r#"{"jsonrpc":"2.0","id":"list","method":"tools/list"}"#,
    )
    .await;

    let tools = json.unwrap()["result"]["tools"].as_array().unwrap().clone();
    assert_eq!(tools.len(), 11);
    for tool in &tools {
        assert_eq!(tool["inputSchema"]["type"], "object", "{}", tool["name"]);
        assert!(tool["description"].as_str().is_some_and(|d| !d.is_empty()));
    }

    let download = tools.iter().find(|t| t["name"] == "download_paper_pdf").unwrap();
    assert_eq!(download["inputSchema"]["required"], json!(["paperId"]));
}

// =============================================================================
// tools/call
// =============================================================================

#[tokio::test]
async fn test_tools_call_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "data": [{"paperId": "p1", "title": "Only Result", "authors": []}]
        })))
        .mount(&mock_server)
        .await;

    let (_, json) = post_mcp(
        build_test_router(&mock_server.uri()),
        &json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": {"name": "search_papers", "arguments": {"query": "only", "limit": "1"}}
        })
        .to_string(),
    )
    .await;

    let result = &json.unwrap()["result"];
    assert_eq!(result["isError"], false);
    assert_eq!(result["content"][0]["type"], "text");
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("Found 1 total papers (showing 1):"));
}

#[tokio::test]
async fn test_tools_call_api_error_is_tool_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let dispatcher = build_dispatcher(&mock_server.uri());
    let request = json!({
        "jsonrpc": "2.0",
        "id": 8,
        "method": "tools/call",
        "params": {"name": "get_author", "arguments": {"authorId": "1"}}
    });
    let response = dispatcher.handle_str(&request.to_string()).await.unwrap();

    assert!(response.error.is_none());
    let result = response.result.unwrap();
    assert_eq!(result["isError"], true);
    assert!(result["content"][0]["text"].as_str().unwrap().contains("HTTP 403"));
}

#[tokio::test]
async fn test_tools_call_missing_name() {
    let dispatcher = build_dispatcher("http://127.0.0.1:9");
    let response = dispatcher
        .handle_str(r#"{"jsonrpc":"2.0","id":9,"method":"tools/call","params":{}}"#)
        .await
        .unwrap();

    assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    assert_eq!(response.id, Some(json!(9)));
}

#[tokio::test]
async fn test_tools_call_without_arguments() {
    let dispatcher = build_dispatcher("http://127.0.0.1:9");
    let request = json!({
        "jsonrpc": "2.0",
        "id": 10,
        "method": "tools/call",
        "params": {"name": "search_snippets"}
    });
    let response = dispatcher.handle_str(&request.to_string()).await.unwrap();

    let result = response.result.unwrap();
    assert_eq!(result["isError"], true);
    assert!(result["content"][0]["text"].as_str().unwrap().contains("query"));
}
