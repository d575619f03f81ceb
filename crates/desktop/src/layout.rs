//! Declarative screen layouts.
//!
//! Each screen's content lives in a TOML file under `crates/desktop/layouts/`.
//! The files are embedded at compile time from fixed paths and parsed once at
//! startup; a malformed file aborts bootstrap instead of showing a blank screen.

use cmt_core::shell::ScreenId;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading layout descriptors.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout `{file}` is malformed: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: toml::de::Error,
    },
    #[error("layout `{file}` has an empty title")]
    EmptyTitle { file: &'static str },
    #[error("layout `{file}` defines no navigation entries")]
    EmptyNav { file: &'static str },
}

/// Shell chrome shared by every screen.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaseLayout {
    pub title: String,
    pub nav: Vec<Link>,
}

/// Content of a single screen.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScreenLayout {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Shown where the screen's data would be.
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub actions: Vec<Link>,
}

/// A button that switches the active screen.
///
/// Targets deserialize straight into [`ScreenId`], so an unknown screen name
/// is a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub label: String,
    pub target: ScreenId,
}

const BASE: (&str, &str) = ("base.toml", include_str!("../layouts/base.toml"));

/// Embedded layout source for a screen, as `(file name, contents)`.
const fn screen_source(id: ScreenId) -> (&'static str, &'static str) {
    match id {
        ScreenId::Home => ("home.toml", include_str!("../layouts/home.toml")),
        ScreenId::Inventory => ("inventory.toml", include_str!("../layouts/inventory.toml")),
        ScreenId::SampleManager => (
            "sample_manager.toml",
            include_str!("../layouts/sample_manager.toml"),
        ),
        ScreenId::Orders => ("orders.toml", include_str!("../layouts/orders.toml")),
        ScreenId::Settings => ("settings.toml", include_str!("../layouts/settings.toml")),
    }
}

fn parse<T: for<'de> Deserialize<'de>>(file: &'static str, source: &str) -> Result<T, LayoutError> {
    toml::from_str(source).map_err(|source| LayoutError::Parse { file, source })
}

/// Load the shared shell layout.
pub fn load_base() -> Result<BaseLayout, LayoutError> {
    let (file, source) = BASE;
    let layout: BaseLayout = parse(file, source)?;
    if layout.title.trim().is_empty() {
        return Err(LayoutError::EmptyTitle { file });
    }
    if layout.nav.is_empty() {
        return Err(LayoutError::EmptyNav { file });
    }
    Ok(layout)
}

/// Load the layout for one screen.
pub fn load_screen(id: ScreenId) -> Result<ScreenLayout, LayoutError> {
    let (file, source) = screen_source(id);
    parse_screen(file, source)
}

fn parse_screen(file: &'static str, source: &str) -> Result<ScreenLayout, LayoutError> {
    let layout: ScreenLayout = parse(file, source)?;
    if layout.title.trim().is_empty() {
        return Err(LayoutError::EmptyTitle { file });
    }
    Ok(layout)
}
