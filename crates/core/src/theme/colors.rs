//! Brand palette.

use std::fmt;

use serde::{Serialize, Serializer};

/// An opaque sRGB color.
///
/// Serializes as a lowercase `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a `0xRRGGBB` literal.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // each channel is masked to 8 bits
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The brand palette plus surface, text and status colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Brand blue.
    pub primary_1: Color,
    pub primary_2: Color,
    /// Brand dark blue.
    pub primary_3: Color,

    pub secondary_1: Color,
    pub secondary_2: Color,
    pub secondary_3: Color,

    pub background: Color,
    pub surface: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    pub const BRAND: Self = Self {
        primary_1: Color::from_u32(0x00c0f3),
        primary_2: Color::from_u32(0x006285),
        primary_3: Color::from_u32(0x00334f),

        secondary_1: Color::from_u32(0x00b5da),
        secondary_2: Color::from_u32(0xf4950d),
        secondary_3: Color::from_u32(0x36bdb2),

        background: Color::from_u32(0xffffff),
        surface: Color::from_u32(0xf5f5f5),

        text_primary: Color::from_u32(0x00334f),
        text_secondary: Color::from_u32(0x006285),
        text_disabled: Color::from_u32(0x9e9e9e),

        success: Color::from_u32(0x43a047),
        warning: Color::from_u32(0xfb8c00),
        error: Color::from_u32(0xe53935),
    };
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u32_unpacks_channels() {
        assert_eq!(Color::from_u32(0x00c0f3), Color::rgb(0x00, 0xc0, 0xf3));
    }

    #[test]
    fn test_hex_is_lowercase_and_padded() {
        assert_eq!(Color::rgb(0, 0x33, 0x4f).hex(), "#00334f");
        assert_eq!(Palette::BRAND.background.hex(), "#ffffff");
    }

    #[test]
    fn test_text_colors_alias_brand_blues() {
        let p = Palette::BRAND;
        assert_eq!(p.text_primary, p.primary_3);
        assert_eq!(p.text_secondary, p.primary_2);
    }

    #[test]
    fn test_color_serializes_as_hex_string() {
        assert_eq!(
            serde_json::to_string(&Palette::BRAND.error).unwrap(),
            "\"#e53935\""
        );
    }
}
