//! Mapping from theme tokens to egui styling.

use cmt_core::theme::{Color, ThemeStyle};
use cmt_core::Theme;
use egui::{Color32, CornerRadius, FontId, Margin, Shadow, Stroke, TextStyle, Visuals};

/// Convert a theme color to egui's color type.
#[must_use]
pub const fn color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// Uniform margin, saturating at egui's `i8` limit.
#[must_use]
pub fn margin(value: u16) -> Margin {
    Margin::same(i8::try_from(value).unwrap_or(i8::MAX))
}

/// Symmetric margin, saturating at egui's `i8` limit.
#[must_use]
pub fn margin_xy(x: u16, y: u16) -> Margin {
    Margin::symmetric(
        i8::try_from(x).unwrap_or(i8::MAX),
        i8::try_from(y).unwrap_or(i8::MAX),
    )
}

fn visuals(theme: &Theme) -> Visuals {
    let mut visuals = match theme.style {
        ThemeStyle::Light => Visuals::light(),
        ThemeStyle::Dark => Visuals::dark(),
    };

    visuals.panel_fill = color32(theme.background());
    visuals.window_fill = color32(theme.surface());
    visuals.faint_bg_color = color32(theme.surface());
    visuals.hyperlink_color = color32(theme.primary_accent());
    visuals.error_fg_color = color32(theme.colors.error);
    visuals.warn_fg_color = color32(theme.colors.warning);
    visuals.override_text_color = Some(color32(theme.text_primary()));
    visuals.selection.bg_fill = color32(theme.colors.primary_1);
    visuals.selection.stroke = Stroke::new(1.0, color32(theme.primary()));

    visuals.window_corner_radius = CornerRadius::same(theme.radii.card);
    visuals.menu_corner_radius = CornerRadius::same(theme.radii.base);

    let button = CornerRadius::same(theme.radii.button);
    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
        &mut visuals.widgets.open,
    ] {
        widget.corner_radius = button;
    }
    visuals.widgets.inactive.weak_bg_fill = color32(theme.primary());
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    visuals.widgets.hovered.weak_bg_fill = color32(theme.primary_accent());
    visuals.widgets.active.weak_bg_fill = color32(theme.colors.primary_1);

    if theme.elevation == 0 {
        visuals.window_shadow = Shadow::NONE;
        visuals.popup_shadow = Shadow::NONE;
    }

    visuals
}

/// Install the theme on an egui context.
pub fn apply(ctx: &egui::Context, theme: &Theme) {
    let mut style = (*ctx.style()).clone();
    style.visuals = visuals(theme);

    let spacing = &theme.spacing;
    style.spacing.item_spacing = egui::vec2(f32::from(spacing.base), f32::from(spacing.sm));
    style.spacing.button_padding = egui::vec2(f32::from(theme.padding.sm), f32::from(spacing.xs));
    style.spacing.window_margin = margin(theme.padding.base);

    let text = &theme.text;
    for (text_style, size) in [
        (TextStyle::Heading, text.large.size_sp()),
        (TextStyle::Body, text.body.size_sp()),
        (TextStyle::Button, text.button.size_sp()),
        (TextStyle::Small, text.small.size_sp()),
    ] {
        style
            .text_styles
            .insert(text_style, FontId::proportional(f32::from(size)));
    }

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_convert_exactly() {
        let c = color32(Color::from_u32(0x00c0f3));
        assert_eq!(c, Color32::from_rgb(0x00, 0xc0, 0xf3));
    }

    #[test]
    fn test_margins_saturate() {
        assert_eq!(margin(20), Margin::same(20));
        assert_eq!(margin(1000), Margin::same(i8::MAX));
        assert_eq!(margin_xy(12, 300), Margin::symmetric(12, i8::MAX));
    }

    #[test]
    fn test_flat_theme_drops_shadows() {
        let v = visuals(&Theme::DEFAULT);
        assert_eq!(v.window_shadow, Shadow::NONE);
        assert_eq!(v.window_corner_radius, CornerRadius::same(16));
        assert_eq!(v.widgets.inactive.corner_radius, CornerRadius::same(10));
        assert!(!v.dark_mode);
    }

    #[test]
    fn test_apply_installs_text_sizes() {
        let ctx = egui::Context::default();
        apply(&ctx, &Theme::DEFAULT);
        let style = ctx.style();
        let body = style.text_styles.get(&TextStyle::Body).map(|f| f.size);
        assert_eq!(body, Some(16.0));
        assert_eq!(style.spacing.item_spacing, egui::vec2(12.0, 8.0));
    }
}
