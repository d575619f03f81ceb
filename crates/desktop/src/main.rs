//! CMT Desktop - the native shell.
//!
//! Opens one window holding five screens (home, inventory, sample manager,
//! orders, settings) with a navigation bar on top. Screen content comes from
//! the TOML layouts under `layouts/`; colors and spacing come from
//! [`cmt_core::Theme::DEFAULT`].
//!
//! # Environment
//!
//! - `CMT_WINDOW_MODE`: `adaptive` (default) sizes the window to 40% x 85% of
//!   the monitor, `fixed` keeps it at 400 x 700 unless the monitor is smaller
//! - `RUST_LOG`: tracing filter (default: `cmt_desktop=info`)

#![cfg_attr(not(test), forbid(unsafe_code))]

mod app;
mod config;
mod error;
mod layout;
mod style;

use cmt_core::Theme;
use cmt_core::shell::WindowPolicy;

use crate::app::CmtApp;
use crate::config::DesktopConfig;
use crate::error::DesktopError;

fn run() -> Result<(), DesktopError> {
    let config = DesktopConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let theme = Theme::DEFAULT;
    let app = CmtApp::bootstrap(theme, config.window)?;

    // Start at the default size; the first frame resizes once the monitor is known.
    let initial = WindowPolicy::DEFAULT_SIZE;
    #[allow(clippy::cast_precision_loss)]
    let viewport = egui::ViewportBuilder::default()
        .with_title(app.title())
        .with_inner_size([initial.width as f32, initial.height as f32]);
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let title = app.title().to_owned();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            style::apply(&cc.egui_ctx, &theme);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cmt_desktop=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Err(e) = run() {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
