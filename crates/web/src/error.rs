//! Unified error handling.
//!
//! Provides a unified `AppError` type for fallible route handlers, which
//! return `Result<T, AppError>`. Every variant is a client error; the stub
//! handlers have no server-side failure path.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cmt_core::search::SearchError;
use thiserror::Error;

/// Application-level error type for the web backend.
#[derive(Debug, Error)]
pub enum AppError {
    /// Search request could not be parsed.
    #[error("Bad request: {0}")]
    Search(#[from] SearchError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Search(_) => StatusCode::BAD_REQUEST,
        };

        tracing::debug!(error = %self, %status, "request rejected");

        (status, self.to_string()).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
