//! Settings API.

use axum::{Json, Router, extract::State};
use cmt_core::AppSettings;
use tracing::instrument;

use crate::state::AppState;

/// Return the stubbed application settings.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<AppSettings> {
    Json(state.catalog().settings.clone())
}

pub fn router() -> Router<AppState> {
    super::collection("/api/settings", show)
}
