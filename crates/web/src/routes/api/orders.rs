//! Orders API.

use axum::{Json, Router, extract::State};
use cmt_core::OrderList;
use tracing::instrument;

use crate::state::AppState;

/// List the stubbed orders.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Json<OrderList> {
    Json(state.catalog().orders.clone())
}

pub fn router() -> Router<AppState> {
    super::collection("/api/orders", list)
}
