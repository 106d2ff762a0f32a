//! Shared test harness.
//!
//! Builds the full application router over an in-memory video store, so
//! tests exercise the same middleware stack (CORS, request ID, timeout,
//! tracing, panic recovery) that production uses, without a database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use videoteca_api::config::ServerConfig;
use videoteca_api::router::build_app_router;
use videoteca_api::state::AppState;
use videoteca_db::store::memory::MemoryVideoStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![],
        request_timeout_secs: 30,
    }
}

/// Build the full application router backed by an empty in-memory store.
pub fn build_test_app() -> Router {
    let state = AppState {
        store: Arc::new(MemoryVideoStore::new()),
    };
    build_app_router(state, &test_config())
}

/// Send a request through the router. The router is cloned so a single
/// app instance can serve a multi-step scenario.
pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    request(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, json: serde_json::Value) -> Response {
    request(app, Method::POST, uri, Some(json)).await
}

pub async fn put_json(app: &Router, uri: &str, json: serde_json::Value) -> Response {
    request(app, Method::PUT, uri, Some(json)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    request(app, Method::DELETE, uri, None).await
}

/// Read the response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read the response body as text (error bodies are bare message strings).
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
