//! Toolkit-independent parts of the desktop shell: which screens exist, in
//! what order, and how big the window is.

pub mod screens;
pub mod window;

use thiserror::Error;

pub use screens::{ScreenId, ScreenRegistry};
pub use window::{Display, Position, Size, Sizing, WindowGeometry, WindowPolicy, resolve};

/// Errors from parsing shell identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("unknown screen: {0}")]
    UnknownScreen(String),
    #[error("unknown window mode: {0} (expected `fixed` or `adaptive`)")]
    UnknownWindowMode(String),
}

/// Why adaptive sizing fell back to the default window size.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    #[error("no display detected")]
    NoDisplay,
    #[error("display reports a degenerate size {width}x{height}")]
    DegenerateDisplay { width: u32, height: u32 },
    #[error("window ratio {0} is outside (0, 1]")]
    InvalidRatio(f32),
}
