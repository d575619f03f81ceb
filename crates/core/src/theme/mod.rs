//! Visual constants shared by the desktop shell and the web pages.
//!
//! There is exactly one theme definition, [`Theme::DEFAULT`]. It is an
//! immutable value handed to UI construction at startup; nothing mutates it
//! afterwards.

pub mod colors;
pub mod typography;

use serde::{Deserialize, Serialize};

pub use colors::{Color, Palette};
pub use typography::{Font, FontStyle, HAlign, TextPreset, Typography};

/// Light or dark rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeStyle {
    #[default]
    Light,
    Dark,
}

impl ThemeStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Corner radii in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Radii {
    pub base: u8,
    pub card: u8,
    pub button: u8,
}

/// Gap tokens in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Spacing {
    pub xs: u16,
    pub sm: u16,
    pub base: u16,
    pub lg: u16,
    pub xl: u16,
}

/// Three-step scale used for padding and margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scale {
    pub sm: u16,
    pub base: u16,
    pub lg: u16,
}

/// The complete set of visual tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Toolkit palette name.
    pub palette_name: &'static str,
    pub style: ThemeStyle,
    pub colors: Palette,
    pub text: Typography,
    pub radii: Radii,
    /// Shadow depth. Zero keeps shadows off entirely.
    pub elevation: u8,
    pub spacing: Spacing,
    pub padding: Scale,
    pub margin: Scale,
    /// Content width cap for readability on wide screens.
    pub max_content_width: u16,
}

impl Theme {
    pub const DEFAULT: Self = Self {
        palette_name: "Blue",
        style: ThemeStyle::Light,
        colors: Palette::BRAND,
        text: Typography::DEFAULT,
        radii: Radii {
            base: 12,
            card: 16,
            button: 10,
        },
        elevation: 0,
        spacing: Spacing {
            xs: 6,
            sm: 8,
            base: 12,
            lg: 16,
            xl: 24,
        },
        padding: Scale {
            sm: 12,
            base: 20,
            lg: 28,
        },
        margin: Scale {
            sm: 12,
            base: 20,
            lg: 28,
        },
        max_content_width: 800,
    };

    #[must_use]
    pub const fn primary(&self) -> Color {
        self.colors.primary_3
    }

    #[must_use]
    pub const fn primary_accent(&self) -> Color {
        self.colors.primary_2
    }

    #[must_use]
    pub const fn surface(&self) -> Color {
        self.colors.surface
    }

    #[must_use]
    pub const fn background(&self) -> Color {
        self.colors.background
    }

    #[must_use]
    pub const fn text_primary(&self) -> Color {
        self.colors.text_primary
    }

    #[must_use]
    pub const fn text_secondary(&self) -> Color {
        self.colors.text_secondary
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_aliases() {
        let theme = Theme::DEFAULT;
        assert_eq!(theme.primary().hex(), "#00334f");
        assert_eq!(theme.primary_accent().hex(), "#006285");
        assert_eq!(theme.surface().hex(), "#f5f5f5");
        assert_eq!(theme.background().hex(), "#ffffff");
    }

    #[test]
    fn test_spacing_scale_is_increasing() {
        let s = Theme::DEFAULT.spacing;
        assert!(s.xs < s.sm && s.sm < s.base && s.base < s.lg && s.lg < s.xl);
    }

    #[test]
    fn test_elevation_is_flat() {
        assert_eq!(Theme::DEFAULT.elevation, 0);
    }

    #[test]
    fn test_style_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ThemeStyle::Light).unwrap(),
            "\"light\""
        );
    }

    #[test]
    fn test_theme_serializes_palette_as_hex() {
        let json = serde_json::to_value(Theme::DEFAULT).unwrap();
        assert_eq!(json["palette_name"], "Blue");
        assert_eq!(json["colors"]["primary_1"], "#00c0f3");
        assert_eq!(json["radii"]["card"], 16);
    }
}
