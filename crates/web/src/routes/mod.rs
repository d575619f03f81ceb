//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! # Pages
//! GET  /                  - Home page with section navigation
//! GET  /inventory         - Inventory page
//! GET  /orders            - Orders page
//! GET  /samples           - Samples page
//! GET  /settings          - Settings page
//! GET  /theme.css         - Theme tokens as CSS custom properties
//!
//! # API (each also served without the trailing slash)
//! GET  /api/inventory/    - {"items": [...]}
//! GET  /api/orders/       - {"orders": [...]}
//! GET  /api/samples/      - {"samples": [...]}
//! GET  /api/settings/     - {"theme", "version", "features"}
//! GET  /api/search/       - Ranked search across the collections
//!
//! # Health
//! GET  /health            - Liveness ("ok")
//! GET  /api/health        - {"status": "ok", "timestamp": ...}
//! ```

pub mod api;
pub mod pages;
pub mod theme_css;

use axum::{Router, http::Uri, routing::get};

use crate::error::AppError;
use crate::state::AppState;

/// Create all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .route("/theme.css", get(theme_css::stylesheet))
        .merge(api::routes())
}

/// Fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
