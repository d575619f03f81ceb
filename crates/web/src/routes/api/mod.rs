//! JSON API routers.
//!
//! Every collection is served at `/api/<resource>/`, and also without the
//! trailing slash so either spelling resolves to the same handler.

pub mod health;
pub mod inventory;
pub mod orders;
pub mod samples;
pub mod search;
pub mod settings;

use axum::{Router, handler::Handler, routing::get};

use crate::state::AppState;

/// Register `handler` for GET at `path` and `path/`.
fn collection<H, T>(path: &str, handler: H) -> Router<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    Router::new()
        .route(path, get(handler.clone()))
        .route(&format!("{path}/"), get(handler))
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(inventory::router())
        .merge(samples::router())
        .merge(orders::router())
        .merge(settings::router())
        .merge(search::router())
        .merge(health::router())
}
