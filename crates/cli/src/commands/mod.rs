pub mod search;
pub mod show;
pub mod window;

use cmt_core::search::SearchError;
use cmt_core::shell::ShellError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Shell(#[from] ShellError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("invalid display size `{0}` (expected WIDTHxHEIGHT)")]
    InvalidDisplay(String),
}
