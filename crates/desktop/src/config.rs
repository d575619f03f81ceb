//! Desktop configuration loaded from environment variables.

use cmt_core::shell::{ShellError, WindowPolicy};

/// Desktop shell configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DesktopConfig {
    pub window: WindowPolicy,
}

impl DesktopConfig {
    /// Load configuration from the process environment (and `.env`, if present).
    ///
    /// # Environment Variables
    ///
    /// - `CMT_WINDOW_MODE`: `fixed` or `adaptive` (default: `adaptive`)
    ///
    /// # Errors
    ///
    /// Returns an error if `CMT_WINDOW_MODE` is set to anything else.
    pub fn from_env() -> Result<Self, ShellError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `CMT_WINDOW_MODE` is not a known mode.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ShellError> {
        let window = match lookup("CMT_WINDOW_MODE") {
            Some(mode) => mode.trim().parse()?,
            None => WindowPolicy::default(),
        };
        Ok(Self { window })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_adaptive() {
        let config = DesktopConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.window, WindowPolicy::ADAPTIVE);
    }

    #[test]
    fn test_fixed_mode() {
        let config = DesktopConfig::from_lookup(|_| Some("fixed".to_owned())).unwrap();
        assert_eq!(config.window, WindowPolicy::FIXED);
    }

    #[test]
    fn test_unknown_mode_is_an_error() {
        let err = DesktopConfig::from_lookup(|_| Some("fullscreen".to_owned())).unwrap_err();
        assert_eq!(err, ShellError::UnknownWindowMode("fullscreen".to_owned()));
    }
}
