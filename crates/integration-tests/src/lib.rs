//! Integration test harness for Krishi Jyothi.
//!
//! Builds the full storefront router over an in-memory key-value store with
//! zero simulated latency, so tests exercise the real handlers through
//! `tower::ServiceExt::oneshot` without a listening socket or a data
//! directory.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::Request;

use krishi_jyothi_storefront::config::StorefrontConfig;
use krishi_jyothi_storefront::routes;
use krishi_jyothi_storefront::state::AppState;
use krishi_jyothi_storefront::store::MemoryStore;

/// Build a fresh storefront router backed by an in-memory store.
#[must_use]
pub fn test_app() -> Router {
    let (router, _state) = test_app_with_state();
    router
}

/// Build a fresh router and keep a handle to its state for direct assertions.
#[must_use]
pub fn test_app_with_state() -> (Router, AppState) {
    let state = AppState::new(StorefrontConfig::default(), Arc::new(MemoryStore::new()));
    let router = routes::routes().with_state(state.clone());
    (router, state)
}

/// Build a GET request.
///
/// # Panics
///
/// Panics if `uri` is not a valid request URI.
#[must_use]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_else(|err| panic!("invalid test request for {uri}: {err}"))
}

/// Build a POST request with a JSON body.
///
/// # Panics
///
/// Panics if `uri` is not a valid request URI.
#[must_use]
pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|err| panic!("invalid test request for {uri}: {err}"))
}

/// Build a request with a method, JSON body, and arbitrary method string.
///
/// # Panics
///
/// Panics if `uri` is not a valid request URI.
#[must_use]
pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|err| panic!("invalid test request for {uri}: {err}"))
}

/// Build a POST request with a form-encoded body.
///
/// # Panics
///
/// Panics if `uri` is not a valid request URI.
#[must_use]
pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|err| panic!("invalid test request for {uri}: {err}"))
}

/// Read a response body as JSON.
///
/// # Panics
///
/// Panics if the body is not valid JSON.
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap_or_else(|err| panic!("failed to read response body: {err}"));
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|err| panic!("response body was not JSON: {err}"))
}
