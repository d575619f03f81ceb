//! Application state shared across handlers.

use std::sync::Arc;

use cmt_core::{Catalog, Theme};

use crate::config::WebConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Everything behind it is
/// read-only after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    catalog: Catalog,
    theme: Theme,
}

impl AppState {
    /// Create the application state with the stub catalog and default theme.
    #[must_use]
    pub fn new(config: WebConfig) -> Self {
        Self::with_parts(config, Catalog::stub(), Theme::DEFAULT)
    }

    #[must_use]
    pub fn with_parts(config: WebConfig, catalog: Catalog, theme: Theme) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                theme,
            }),
        }
    }

    /// Get a reference to the web configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// Get a reference to the stub catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.inner.theme
    }
}
