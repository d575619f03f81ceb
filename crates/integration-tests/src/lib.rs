//! Integration tests for Centralized Management Tools.
//!
//! Requests are driven through the full `cmt_web::app` router in-process with
//! `tower::ServiceExt::oneshot`; no port is bound and nothing external is
//! needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cmt-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `api` - JSON payloads, search and health
//! - `pages` - Server-rendered HTML, theme stylesheet and static assets
//! - `middleware` - Request IDs, security headers and the 404 fallback

use std::path::PathBuf;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode};
use cmt_web::config::WebConfig;
use cmt_web::state::AppState;
use tower::ServiceExt;

/// Upper bound on response bodies read by tests.
const BODY_LIMIT: usize = 1024 * 1024;

/// Build the web app with the stub catalog and the real static directory.
#[must_use]
pub fn app() -> Router {
    let config = WebConfig {
        static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../web/static")),
        ..WebConfig::default()
    };
    cmt_web::app(AppState::new(config))
}

/// A buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Header value as a string, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Parse the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }
}

async fn collect(response: Response<Body>) -> TestResponse {
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .unwrap_or_default();
    TestResponse {
        status,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

/// Send `request` through a fresh app.
///
/// # Panics
///
/// Panics if the router itself errors, which axum routers never do.
#[allow(clippy::expect_used)]
pub async fn send(request: Request<Body>) -> TestResponse {
    let response = app().oneshot(request).await.expect("router is infallible");
    collect(response).await
}

/// GET `uri` with no extra headers.
///
/// # Panics
///
/// Panics if `uri` is not a valid request target.
#[allow(clippy::expect_used)]
pub async fn get(uri: &str) -> TestResponse {
    let request = Request::get(uri)
        .body(Body::empty())
        .expect("valid request");
    send(request).await
}
