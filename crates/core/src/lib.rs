//! CMT Core - Shared types library.
//!
//! This crate provides the pieces shared by every CMT component:
//! - `desktop` - The eframe shell (window, theme, screens)
//! - `web` - The server-rendered pages and stub JSON API
//! - `cli` - Developer tooling that prints what the others would show
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no UI toolkit. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Stub record shapes and their newtype IDs
//! - [`catalog`] - The literal collections served by the API
//! - [`search`] - Substring search over the catalog
//! - [`theme`] - Colors, spacing, radii and typography presets
//! - [`shell`] - Screen registry and window sizing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod search;
pub mod shell;
pub mod theme;
pub mod types;

pub use catalog::Catalog;
pub use theme::Theme;
pub use types::*;
