//! Typography presets.

use serde::Serialize;

/// Material type-scale styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FontStyle {
    H1,
    H2,
    H3,
    H4,
    Subtitle1,
    Body1,
    Button,
}

impl FontStyle {
    /// Nominal size in scale-independent pixels.
    #[must_use]
    pub const fn size_sp(self) -> u16 {
        match self {
            Self::H1 => 96,
            Self::H2 => 60,
            Self::H3 => 48,
            Self::H4 => 34,
            Self::Subtitle1 | Self::Body1 => 16,
            Self::Button => 14,
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HAlign {
    Left,
    Center,
}

/// Either a named style or an explicit size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Font {
    Style(FontStyle),
    SizeSp(u16),
}

/// A font plus alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TextPreset {
    pub font: Font,
    pub align: HAlign,
}

impl TextPreset {
    const fn style(style: FontStyle, align: HAlign) -> Self {
        Self {
            font: Font::Style(style),
            align,
        }
    }

    const fn sized(sp: u16, align: HAlign) -> Self {
        Self {
            font: Font::SizeSp(sp),
            align,
        }
    }

    /// Resolved size in scale-independent pixels.
    #[must_use]
    pub const fn size_sp(self) -> u16 {
        match self.font {
            Font::Style(style) => style.size_sp(),
            Font::SizeSp(sp) => sp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Typography {
    pub h1: TextPreset,
    pub h2: TextPreset,
    pub h3: TextPreset,
    pub h4: TextPreset,
    pub subtitle: TextPreset,
    pub body: TextPreset,
    pub button: TextPreset,
    pub small: TextPreset,
    pub medium: TextPreset,
    pub large: TextPreset,
    pub xlarge: TextPreset,
}

impl Typography {
    pub const DEFAULT: Self = Self {
        h1: TextPreset::style(FontStyle::H1, HAlign::Center),
        h2: TextPreset::style(FontStyle::H2, HAlign::Center),
        h3: TextPreset::style(FontStyle::H3, HAlign::Center),
        h4: TextPreset::style(FontStyle::H4, HAlign::Center),
        subtitle: TextPreset::style(FontStyle::Subtitle1, HAlign::Center),
        body: TextPreset::style(FontStyle::Body1, HAlign::Left),
        button: TextPreset::style(FontStyle::Button, HAlign::Center),
        small: TextPreset::sized(14, HAlign::Left),
        medium: TextPreset::sized(16, HAlign::Left),
        large: TextPreset::sized(22, HAlign::Center),
        xlarge: TextPreset::sized(34, HAlign::Center),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_sizes() {
        let t = Typography::DEFAULT;
        assert_eq!(t.small.size_sp(), 14);
        assert_eq!(t.medium.size_sp(), 16);
        assert_eq!(t.large.size_sp(), 22);
        assert_eq!(t.xlarge.size_sp(), 34);
    }

    #[test]
    fn test_body_is_left_aligned_headings_centered() {
        let t = Typography::DEFAULT;
        assert_eq!(t.body.align, HAlign::Left);
        for heading in [t.h1, t.h2, t.h3, t.h4] {
            assert_eq!(heading.align, HAlign::Center);
        }
    }
}
