//! Theme stylesheet route handler.
//!
//! Renders the shared [`Theme`] as CSS custom properties so the pages use the
//! same palette and spacing as the desktop shell.

use std::fmt::Write;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use cmt_core::Theme;

use crate::state::AppState;

/// Render `theme` as a `:root` block of `--cmt-*` custom properties.
#[must_use]
pub fn render(theme: &Theme) -> String {
    let c = &theme.colors;
    let colors = [
        ("primary-1", c.primary_1),
        ("primary-2", c.primary_2),
        ("primary-3", c.primary_3),
        ("secondary-1", c.secondary_1),
        ("secondary-2", c.secondary_2),
        ("secondary-3", c.secondary_3),
        ("background", c.background),
        ("surface", c.surface),
        ("text-primary", c.text_primary),
        ("text-secondary", c.text_secondary),
        ("text-disabled", c.text_disabled),
        ("success", c.success),
        ("warning", c.warning),
        ("error", c.error),
        ("primary", theme.primary()),
        ("primary-accent", theme.primary_accent()),
    ];
    let lengths = [
        ("radius", u16::from(theme.radii.base)),
        ("card-radius", u16::from(theme.radii.card)),
        ("button-radius", u16::from(theme.radii.button)),
        ("spacing-xs", theme.spacing.xs),
        ("spacing-sm", theme.spacing.sm),
        ("spacing", theme.spacing.base),
        ("spacing-lg", theme.spacing.lg),
        ("spacing-xl", theme.spacing.xl),
        ("padding-sm", theme.padding.sm),
        ("padding", theme.padding.base),
        ("padding-lg", theme.padding.lg),
        ("margin-sm", theme.margin.sm),
        ("margin", theme.margin.base),
        ("margin-lg", theme.margin.lg),
        ("max-content-width", theme.max_content_width),
    ];

    let mut css = String::from(":root {\n");
    for (name, color) in colors {
        let _ = writeln!(css, "  --cmt-{name}: {color};");
    }
    for (name, px) in lengths {
        let _ = writeln!(css, "  --cmt-{name}: {px}px;");
    }
    let _ = writeln!(css, "  color-scheme: {};", theme.style.as_str());
    css.push_str("}\n");
    css
}

/// Serve the theme stylesheet.
pub async fn stylesheet(State(state): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        render(state.theme()),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_palette_and_tokens() {
        let css = render(&Theme::DEFAULT);
        assert!(css.starts_with(":root {"));
        assert!(css.contains("  --cmt-primary-1: #00c0f3;\n"));
        assert!(css.contains("  --cmt-primary: #00334f;\n"));
        assert!(css.contains("  --cmt-card-radius: 16px;\n"));
        assert!(css.contains("  --cmt-max-content-width: 800px;\n"));
        assert!(css.contains("color-scheme: light;"));
    }
}
