//! Samples API.

use axum::{Json, Router, extract::State};
use cmt_core::SampleList;
use tracing::instrument;

use crate::state::AppState;

/// List the stubbed samples.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Json<SampleList> {
    Json(state.catalog().samples.clone())
}

pub fn router() -> Router<AppState> {
    super::collection("/api/samples", list)
}
