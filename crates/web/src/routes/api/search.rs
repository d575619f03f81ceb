//! Search API.
//!
//! ```text
//! GET /api/search/?q=buffer&types=inventory,order
//! ```

use axum::{
    Json, Router,
    extract::{Query, State},
};
use cmt_core::search::{SearchHit, SearchQuery};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    /// Comma-separated record kinds.
    pub types: Option<String>,
}

/// Search response body.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub total: usize,
    pub results: Vec<SearchHit>,
}

/// Search the stub collections.
///
/// # Errors
///
/// Returns 400 if `q` is blank or `types` names an unknown kind.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let query = SearchQuery::parse(&params.q, params.types.as_deref())?;
    let results = state.catalog().search(&query);

    tracing::debug!(hits = results.len(), "search complete");

    Ok(Json(SearchResponse {
        total: results.len(),
        results,
    }))
}

pub fn router() -> Router<AppState> {
    super::collection("/api/search", search)
}
