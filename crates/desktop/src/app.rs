//! The shell application: screen registry, navigation and window sizing.

use cmt_core::Theme;
use cmt_core::catalog::SETTINGS_VERSION;
use cmt_core::shell::{self, Display, ScreenId, ScreenRegistry, Size, Sizing, WindowPolicy};
use egui::{Color32, RichText, ViewportCommand};
use tracing::{info, warn};

use crate::layout::{self, BaseLayout, Link, ScreenLayout};
use crate::style;

/// Running shell state.
pub struct CmtApp {
    theme: Theme,
    policy: WindowPolicy,
    base: BaseLayout,
    screens: ScreenRegistry<ScreenLayout>,
    /// Set once the first frame has resolved the window geometry.
    sizing: Option<Sizing>,
}

impl CmtApp {
    /// Load every layout and register the five screens, starting on Home.
    ///
    /// # Errors
    ///
    /// Returns an error if any layout file is malformed.
    pub fn bootstrap(theme: Theme, policy: WindowPolicy) -> Result<Self, layout::LayoutError> {
        let base = layout::load_base()?;
        let screens = ScreenRegistry::build(layout::load_screen)?;
        info!(
            screens = ScreenId::ALL.len(),
            current = %screens.current(),
            "shell bootstrapped"
        );
        Ok(Self {
            theme,
            policy,
            base,
            screens,
            sizing: None,
        })
    }

    pub fn title(&self) -> &str {
        &self.base.title
    }

    pub const fn current(&self) -> ScreenId {
        self.screens.current()
    }

    pub fn navigate(&mut self, target: ScreenId) {
        let previous = self.screens.set_current(target);
        if previous != target {
            info!(from = %previous, to = %target, "screen changed");
        }
    }

    /// Resolve window geometry once the monitor size is known.
    fn apply_window_sizing(&mut self, ctx: &egui::Context) {
        if self.sizing.is_some() {
            return;
        }

        let display = ctx
            .input(|i| i.viewport().monitor_size)
            .map(|size| Display::at_origin(Size::new(to_pixels(size.x), to_pixels(size.y))));
        let sizing = shell::resolve(self.policy, display);

        if let Some(reason) = sizing.fallback_reason() {
            warn!(%reason, "adaptive window sizing failed, using default size");
        }

        let geometry = sizing.geometry();
        info!(
            width = geometry.size.width,
            height = geometry.size.height,
            "window sized"
        );
        let minimum = self.policy.minimum().clamp_to(geometry.size);
        ctx.send_viewport_cmd(ViewportCommand::MinInnerSize(to_vec2(minimum)));
        ctx.send_viewport_cmd(ViewportCommand::InnerSize(to_vec2(geometry.size)));
        if let Some(position) = geometry.position {
            #[allow(clippy::cast_precision_loss)]
            let pos = egui::pos2(position.x as f32, position.y as f32);
            ctx.send_viewport_cmd(ViewportCommand::OuterPosition(pos));
        }

        self.sizing = Some(sizing);
    }

    fn nav_bar(&self, ctx: &egui::Context) -> Option<ScreenId> {
        let theme = &self.theme;
        let frame = egui::Frame::new()
            .fill(style::color32(theme.colors.primary_1))
            .inner_margin(style::margin_xy(theme.padding.sm, theme.spacing.sm));

        let mut clicked = None;
        egui::TopBottomPanel::top("app_bar").frame(frame).show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(&self.base.title).strong().color(Color32::WHITE));
                ui.add_space(f32::from(theme.spacing.base));
                for link in &self.base.nav {
                    let selected = link.target == self.current();
                    let text = RichText::new(&link.label).color(Color32::WHITE);
                    if ui.selectable_label(selected, text).clicked() {
                        clicked = Some(link.target);
                    }
                }
            });
        });
        clicked
    }

    fn screen(&self, ctx: &egui::Context) -> Option<ScreenId> {
        let theme = &self.theme;
        let layout = self.screens.current_screen();
        let frame = egui::Frame::new()
            .fill(style::color32(theme.background()))
            .inner_margin(style::margin(theme.padding.base));

        let mut clicked = None;
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.set_max_width(f32::from(theme.max_content_width));
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new(&layout.title).color(style::color32(theme.primary())));
                if let Some(subtitle) = &layout.subtitle {
                    ui.label(
                        RichText::new(subtitle).color(style::color32(theme.text_secondary())),
                    );
                }
                ui.add_space(f32::from(theme.spacing.lg));

                if self.current() == ScreenId::Settings {
                    self.settings_details(ui);
                    ui.add_space(f32::from(theme.spacing.lg));
                }
                if let Some(placeholder) = &layout.placeholder {
                    ui.label(
                        RichText::new(placeholder).color(style::color32(theme.colors.text_disabled)),
                    );
                    ui.add_space(f32::from(theme.spacing.lg));
                }

                clicked = action_buttons(ui, &layout.actions);
            });
        });
        clicked
    }

    fn settings_details(&self, ui: &mut egui::Ui) {
        egui::Grid::new("settings_details")
            .num_columns(2)
            .spacing(egui::vec2(
                f32::from(self.theme.spacing.xl),
                f32::from(self.theme.spacing.sm),
            ))
            .show(ui, |ui| {
                ui.label("Theme");
                ui.label(self.theme.style.as_str());
                ui.end_row();
                ui.label("Palette");
                ui.label(self.theme.palette_name);
                ui.end_row();
                ui.label("Version");
                ui.label(SETTINGS_VERSION);
                ui.end_row();
            });
    }
}

fn action_buttons(ui: &mut egui::Ui, actions: &[Link]) -> Option<ScreenId> {
    let mut clicked = None;
    for action in actions {
        if ui.button(&action.label).clicked() {
            clicked = Some(action.target);
        }
    }
    clicked
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "monitor sizes are small positive values; anything else becomes a degenerate display"
)]
fn to_pixels(points: f32) -> u32 {
    if points.is_finite() && points > 0.0 {
        points.round().min(u32::MAX as f32) as u32
    } else {
        0
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_vec2(size: Size) -> egui::Vec2 {
    egui::vec2(size.width as f32, size.height as f32)
}

impl eframe::App for CmtApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_window_sizing(ctx);

        let from_nav = self.nav_bar(ctx);
        let from_screen = self.screen(ctx);
        if let Some(target) = from_nav.or(from_screen) {
            self.navigate(target);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn app() -> CmtApp {
        CmtApp::bootstrap(Theme::DEFAULT, WindowPolicy::ADAPTIVE).unwrap()
    }

    #[test]
    fn test_starts_on_home() {
        let app = app();
        assert_eq!(app.current(), ScreenId::Home);
        assert_eq!(app.title(), "Centralized Management Tools");
    }

    #[test]
    fn test_every_screen_is_registered() {
        let app = app();
        let ids: Vec<ScreenId> = app.screens.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, ScreenId::ALL);
    }

    #[test]
    fn test_navigate_switches_screen() {
        let mut app = app();
        app.navigate(ScreenId::SampleManager);
        assert_eq!(app.current(), ScreenId::SampleManager);
        assert_eq!(app.screens.current_screen().title, "Sample Manager");
        app.navigate(ScreenId::Home);
        assert_eq!(app.current(), ScreenId::Home);
    }

    #[test]
    fn test_first_frame_without_monitor_falls_back() {
        let mut app = app();
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.apply_window_sizing(ctx));
        let sizing = app.sizing.clone().unwrap();
        assert_eq!(sizing.geometry().size, WindowPolicy::DEFAULT_SIZE);
        assert!(sizing.fallback_reason().is_some());
    }

    #[test]
    fn test_fixed_mode_fits_short_monitor() {
        let mut app = CmtApp::bootstrap(Theme::DEFAULT, WindowPolicy::FIXED).unwrap();
        let mut input = egui::RawInput::default();
        input
            .viewports
            .entry(egui::ViewportId::ROOT)
            .or_default()
            .monitor_size = Some(egui::vec2(1366.0, 600.0));
        let ctx = egui::Context::default();
        let _ = ctx.run(input, |ctx| app.apply_window_sizing(ctx));
        let geometry = app.sizing.clone().unwrap().geometry();
        assert_eq!(geometry.size, Size::new(400, 600));
        assert!(geometry.position.is_some());
    }

    #[test]
    fn test_pixels_from_points() {
        assert_eq!(to_pixels(1920.0), 1920);
        assert_eq!(to_pixels(1079.6), 1080);
        assert_eq!(to_pixels(-5.0), 0);
        assert_eq!(to_pixels(f32::NAN), 0);
    }
}
