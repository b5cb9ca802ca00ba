//! HTTP transport for MCP protocol.
//!
//! One JSON-RPC message per `POST /mcp`, answered in the response body.
//! Notifications are acknowledged with 202 and no body.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::protocol::{Dispatcher, SERVER_NAME};

/// Create the HTTP router for MCP.
pub fn create_router(dispatcher: Arc<Dispatcher>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/mcp", post(handle_mcp_post))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(dispatcher)
}

async fn health_check(State(dispatcher): State<Arc<Dispatcher>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": SERVER_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "tools": dispatcher.tools().len()
    }))
}

/// The body is taken as text so malformed JSON gets a JSON-RPC parse error
/// rather than axum's plain-text rejection.
async fn handle_mcp_post(State(dispatcher): State<Arc<Dispatcher>>, body: String) -> Response {
    match dispatcher.handle_str(&body).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
