//! Window sizing for the desktop shell.
//!
//! [`resolve`] turns a [`WindowPolicy`] and the detected display (if any) into
//! a [`Sizing`]. It never fails: every problem becomes a
//! [`Sizing::Fallback`] carrying the reason, so callers can log it and tests
//! can assert on it.

use std::str::FromStr;

use serde::Serialize;

use super::{ShellError, SizingError};

/// Width and height in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Shrink each dimension to fit inside `bound`.
    #[must_use]
    pub const fn clamp_to(self, bound: Self) -> Self {
        Self {
            width: if self.width > bound.width {
                bound.width
            } else {
                self.width
            },
            height: if self.height > bound.height {
                bound.height
            } else {
                self.height
            },
        }
    }
}

/// Top-left corner in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// A detected monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Display {
    pub origin: Position,
    pub size: Size,
}

impl Display {
    /// A display whose top-left corner is the desktop origin.
    #[must_use]
    pub const fn at_origin(size: Size) -> Self {
        Self {
            origin: Position { x: 0, y: 0 },
            size,
        }
    }

    /// Position that centers `size` on this display.
    #[must_use]
    pub fn center(&self, size: Size) -> Position {
        let dx = i64::from(self.size.width.saturating_sub(size.width)) / 2;
        let dy = i64::from(self.size.height.saturating_sub(size.height)) / 2;
        Position {
            x: saturating_i32(i64::from(self.origin.x) + dx),
            y: saturating_i32(i64::from(self.origin.y) + dy),
        }
    }
}

fn saturating_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Final window size, and position when a display was available to center on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowGeometry {
    pub size: Size,
    pub position: Option<Position>,
}

/// How the window should be sized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowPolicy {
    /// This size, shrunk to fit and centered when the display is known.
    Fixed(Size),
    /// A fraction of the display, never below `minimum`, centered.
    Adaptive {
        width_ratio: f32,
        height_ratio: f32,
        minimum: Size,
    },
}

impl WindowPolicy {
    /// Size used by the fixed policy and by every fallback.
    pub const DEFAULT_SIZE: Size = Size::new(400, 700);

    /// Smallest adaptive window.
    pub const MINIMUM_SIZE: Size = Size::new(360, 640);

    pub const FIXED: Self = Self::Fixed(Self::DEFAULT_SIZE);

    pub const ADAPTIVE: Self = Self::Adaptive {
        width_ratio: 0.4,
        height_ratio: 0.85,
        minimum: Self::MINIMUM_SIZE,
    };

    /// Smallest size the window may be resized to.
    #[must_use]
    pub const fn minimum(&self) -> Size {
        match self {
            Self::Fixed(size) => *size,
            Self::Adaptive { minimum, .. } => *minimum,
        }
    }
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self::ADAPTIVE
    }
}

impl FromStr for WindowPolicy {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::FIXED),
            "adaptive" => Ok(Self::ADAPTIVE),
            other => Err(ShellError::UnknownWindowMode(other.to_string())),
        }
    }
}

/// Outcome of window sizing.
#[derive(Debug, Clone, PartialEq)]
pub enum Sizing {
    Fixed(WindowGeometry),
    Adaptive(WindowGeometry),
    Fallback {
        geometry: WindowGeometry,
        reason: SizingError,
    },
}

impl Sizing {
    #[must_use]
    pub const fn geometry(&self) -> WindowGeometry {
        match self {
            Self::Fixed(geometry) | Self::Adaptive(geometry) | Self::Fallback { geometry, .. } => {
                *geometry
            }
        }
    }

    #[must_use]
    pub const fn fallback_reason(&self) -> Option<&SizingError> {
        match self {
            Self::Fallback { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Compute the window geometry for `policy` on `display`.
#[must_use]
pub fn resolve(policy: WindowPolicy, display: Option<Display>) -> Sizing {
    match policy {
        WindowPolicy::Fixed(size) => Sizing::Fixed(place(size, display)),
        WindowPolicy::Adaptive {
            width_ratio,
            height_ratio,
            minimum,
        } => match adaptive(width_ratio, height_ratio, minimum, display) {
            Ok(geometry) => Sizing::Adaptive(geometry),
            Err(reason) => Sizing::Fallback {
                geometry: place(WindowPolicy::DEFAULT_SIZE, display),
                reason,
            },
        },
    }
}

fn adaptive(
    width_ratio: f32,
    height_ratio: f32,
    minimum: Size,
    display: Option<Display>,
) -> Result<WindowGeometry, SizingError> {
    let display = usable(display)?;
    for ratio in [width_ratio, height_ratio] {
        if !(ratio.is_finite() && ratio > 0.0 && ratio <= 1.0) {
            return Err(SizingError::InvalidRatio(ratio));
        }
    }

    let wanted = Size::new(
        scale(display.size.width, width_ratio).max(minimum.width),
        scale(display.size.height, height_ratio).max(minimum.height),
    );
    let size = wanted.clamp_to(display.size);

    Ok(WindowGeometry {
        size,
        position: Some(display.center(size)),
    })
}

fn usable(display: Option<Display>) -> Result<Display, SizingError> {
    let display = display.ok_or(SizingError::NoDisplay)?;
    if display.size.width == 0 || display.size.height == 0 {
        return Err(SizingError::DegenerateDisplay {
            width: display.size.width,
            height: display.size.height,
        });
    }
    Ok(display)
}

/// `size` clamped to and centered on `display` when it is usable, else left
/// to the window manager.
fn place(size: Size, display: Option<Display>) -> WindowGeometry {
    match usable(display) {
        Ok(display) => {
            let size = size.clamp_to(display.size);
            WindowGeometry {
                size,
                position: Some(display.center(size)),
            }
        }
        Err(_) => WindowGeometry {
            size,
            position: None,
        },
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // ratio is in (0, 1]
fn scale(extent: u32, ratio: f32) -> u32 {
    (f64::from(extent) * f64::from(ratio)).round() as u32
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn display(width: u32, height: u32) -> Option<Display> {
        Some(Display::at_origin(Size::new(width, height)))
    }

    fn assert_within(sizing: &Sizing, minimum: Size, bound: Size) {
        let size = sizing.geometry().size;
        assert!(size.width <= bound.width && size.height <= bound.height);
        assert!(
            size.width >= minimum.width.min(bound.width)
                && size.height >= minimum.height.min(bound.height)
        );
    }

    #[test]
    fn test_fixed_keeps_size_and_centers() {
        let sizing = resolve(WindowPolicy::FIXED, display(3840, 2160));
        assert_eq!(
            sizing,
            Sizing::Fixed(WindowGeometry {
                size: Size::new(400, 700),
                position: Some(Position { x: 1720, y: 730 }),
            })
        );
    }

    #[test]
    fn test_fixed_is_clamped_to_short_display() {
        let sizing = resolve(WindowPolicy::FIXED, display(1366, 600));
        let geometry = sizing.geometry();
        assert!(matches!(sizing, Sizing::Fixed(_)));
        assert_eq!(geometry.size, Size::new(400, 600));
        assert_eq!(geometry.position, Some(Position { x: 483, y: 0 }));
    }

    #[test]
    fn test_fixed_without_display_is_unplaced() {
        let sizing = resolve(WindowPolicy::FIXED, None);
        assert_eq!(
            sizing.geometry(),
            WindowGeometry {
                size: Size::new(400, 700),
                position: None,
            }
        );
        assert!(sizing.fallback_reason().is_none());
    }

    #[test]
    fn test_adaptive_scales_and_centers() {
        let sizing = resolve(WindowPolicy::ADAPTIVE, display(1920, 1080));
        let geometry = sizing.geometry();
        assert!(matches!(sizing, Sizing::Adaptive(_)));
        assert_eq!(geometry.size, Size::new(768, 918));
        assert_eq!(geometry.position, Some(Position { x: 576, y: 81 }));
    }

    #[test]
    fn test_adaptive_enforces_minimum() {
        let sizing = resolve(WindowPolicy::ADAPTIVE, display(800, 700));
        assert_eq!(sizing.geometry().size, Size::new(360, 640));
    }

    #[test]
    fn test_display_smaller_than_minimum_wins() {
        let sizing = resolve(WindowPolicy::ADAPTIVE, display(320, 480));
        assert!(matches!(sizing, Sizing::Adaptive(_)));
        assert_eq!(sizing.geometry().size, Size::new(320, 480));
        assert_eq!(sizing.geometry().position, Some(Position { x: 0, y: 0 }));
    }

    #[test]
    fn test_centers_on_offset_display() {
        let second = Display {
            origin: Position { x: 1920, y: -200 },
            size: Size::new(1000, 1000),
        };
        let sizing = resolve(WindowPolicy::ADAPTIVE, Some(second));
        assert_eq!(sizing.geometry().size, Size::new(400, 850));
        assert_eq!(
            sizing.geometry().position,
            Some(Position { x: 2220, y: -125 })
        );
    }

    #[test]
    fn test_missing_display_falls_back() {
        let sizing = resolve(WindowPolicy::ADAPTIVE, None);
        assert_eq!(sizing.fallback_reason(), Some(&SizingError::NoDisplay));
        assert_eq!(sizing.geometry().size, WindowPolicy::DEFAULT_SIZE);
        assert_eq!(sizing.geometry().position, None);
    }

    #[test]
    fn test_zero_sized_display_falls_back() {
        let sizing = resolve(WindowPolicy::ADAPTIVE, display(0, 1080));
        assert_eq!(
            sizing.fallback_reason(),
            Some(&SizingError::DegenerateDisplay {
                width: 0,
                height: 1080
            })
        );
    }

    #[test]
    fn test_invalid_ratio_falls_back_centered() {
        let policy = WindowPolicy::Adaptive {
            width_ratio: f32::NAN,
            height_ratio: 0.5,
            minimum: WindowPolicy::MINIMUM_SIZE,
        };
        let sizing = resolve(policy, display(1000, 1000));
        assert!(matches!(
            sizing.fallback_reason(),
            Some(SizingError::InvalidRatio(_))
        ));
        assert_eq!(sizing.geometry().size, Size::new(400, 700));
        assert_eq!(sizing.geometry().position, Some(Position { x: 300, y: 150 }));
    }

    #[test]
    fn test_size_always_within_bounds() {
        let displays = [
            (1, 1),
            (200, 300),
            (360, 640),
            (1280, 720),
            (2560, 1440),
            (7680, 4320),
            (u32::MAX, u32::MAX),
        ];
        for (w, h) in displays {
            for policy in [WindowPolicy::ADAPTIVE, WindowPolicy::FIXED] {
                let sizing = resolve(policy, display(w, h));
                assert_within(&sizing, policy.minimum(), Size::new(w, h));
            }
        }
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("Fixed".parse::<WindowPolicy>().unwrap(), WindowPolicy::FIXED);
        assert_eq!(
            " adaptive ".parse::<WindowPolicy>().unwrap(),
            WindowPolicy::ADAPTIVE
        );
        assert!("fullscreen".parse::<WindowPolicy>().is_err());
    }
}
