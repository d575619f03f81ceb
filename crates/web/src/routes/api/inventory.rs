//! Inventory API.

use axum::{Json, Router, extract::State};
use cmt_core::InventoryList;
use tracing::instrument;

use crate::state::AppState;

/// List the stubbed inventory items.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Json<InventoryList> {
    Json(state.catalog().inventory.clone())
}

/// Create the inventory API router.
pub fn router() -> Router<AppState> {
    super::collection("/api/inventory", list)
}
