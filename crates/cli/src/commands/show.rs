//! Read-only views of the theme, the screen list and the stub payloads.

use std::io::Write;

use cmt_core::shell::ScreenId;
use cmt_core::{Catalog, Theme};

use super::CliError;

/// Which stub collection to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    Inventory,
    Orders,
    Samples,
    Settings,
}

/// Write [`Theme::DEFAULT`] as pretty JSON.
pub fn theme(out: &mut impl Write) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, &Theme::DEFAULT)?;
    writeln!(out)?;
    Ok(())
}

/// Write one line per screen: registry name and title.
pub fn screens(out: &mut impl Write) -> Result<(), CliError> {
    for id in ScreenId::ALL {
        let marker = if id == ScreenId::INITIAL { " (initial)" } else { "" };
        writeln!(out, "{:<16}{}{marker}", id.name(), id.title())?;
    }
    Ok(())
}

/// Write a stub collection byte-for-byte as the API serves it.
pub fn payload(out: &mut impl Write, which: Payload) -> Result<(), CliError> {
    let catalog = Catalog::stub();
    match which {
        Payload::Inventory => serde_json::to_writer(&mut *out, &catalog.inventory)?,
        Payload::Orders => serde_json::to_writer(&mut *out, &catalog.orders)?,
        Payload::Samples => serde_json::to_writer(&mut *out, &catalog.samples)?,
        Payload::Settings => serde_json::to_writer(&mut *out, &catalog.settings)?,
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_inventory_payload_matches_api() {
        let out = capture(|out| payload(out, Payload::Inventory));
        assert_eq!(
            out,
            "{\"items\":[{\"id\":1,\"name\":\"Buffer A\",\"qty\":10},{\"id\":2,\"name\":\"Tube 1.5ml\",\"qty\":500}]}\n"
        );
    }

    #[test]
    fn test_settings_payload_matches_api() {
        let out = capture(|out| payload(out, Payload::Settings));
        assert_eq!(
            out,
            "{\"theme\":\"light\",\"version\":\"0.1.0\",\"features\":[\"inventory\",\"orders\",\"samples\"]}\n"
        );
    }

    #[test]
    fn test_screens_are_listed_in_order() {
        let out = capture(|out| screens(out));
        let names: Vec<&str> = out
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(
            names,
            ["home", "inventory", "sample_manager", "orders", "settings"]
        );
        assert!(out.lines().next().unwrap().ends_with("(initial)"));
    }

    #[test]
    fn test_theme_is_json() {
        let out = capture(|out| theme(out));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["palette_name"], "Blue");
        assert_eq!(value["colors"]["primary_1"], "#00c0f3");
    }
}
