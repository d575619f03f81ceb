//! Desktop error types.

use cmt_core::shell::ShellError;
use thiserror::Error;

use crate::layout::LayoutError;

/// Failures that stop the shell before or while it runs.
#[derive(Debug, Error)]
pub enum DesktopError {
    #[error("configuration error: {0}")]
    Config(#[from] ShellError),

    #[error("bootstrap failed: {0}")]
    Bootstrap(#[from] LayoutError),

    #[error("window error: {0}")]
    Eframe(#[from] eframe::Error),
}
