//! Window sizing preview.

use std::io::Write;

use cmt_core::shell::{self, Display, Size, Sizing, WindowGeometry, WindowPolicy};
use serde::Serialize;

use super::CliError;

#[derive(Debug, Serialize)]
struct Report {
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    geometry: WindowGeometry,
}

impl From<&Sizing> for Report {
    fn from(sizing: &Sizing) -> Self {
        let outcome = match sizing {
            Sizing::Fixed(_) => "fixed",
            Sizing::Adaptive(_) => "adaptive",
            Sizing::Fallback { .. } => "fallback",
        };
        Self {
            outcome,
            reason: sizing.fallback_reason().map(ToString::to_string),
            geometry: sizing.geometry(),
        }
    }
}

/// Parse `WIDTHxHEIGHT`.
fn parse_display(text: &str) -> Result<Display, CliError> {
    let invalid = || CliError::InvalidDisplay(text.to_string());
    let (width, height) = text
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(invalid)?;
    let width = width.trim().parse().map_err(|_| invalid())?;
    let height = height.trim().parse().map_err(|_| invalid())?;
    Ok(Display::at_origin(Size::new(width, height)))
}

/// Resolve and print the window geometry for `mode` on `display`.
pub fn resolve(out: &mut impl Write, display: Option<&str>, mode: &str) -> Result<(), CliError> {
    let policy: WindowPolicy = mode.parse()?;
    let display = display.map(parse_display).transpose()?;
    let sizing = shell::resolve(policy, display);
    if let Some(reason) = sizing.fallback_reason() {
        tracing::warn!(%reason, "adaptive sizing fell back to default");
    }
    serde_json::to_writer(&mut *out, &Report::from(&sizing))?;
    writeln!(out)?;
    Ok(())
}
