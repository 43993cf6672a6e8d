//! Configuration file support
//!
//! Loads highlight settings from ~/.manager-highlight.toml (or
//! %USERPROFILE%\.manager-highlight.toml on Windows).
//!
//! Example:
//! ```toml
//! prominence = "medium"    # low | medium | high
//!
//! [state]
//! color = "#FF5733"
//!
//! [settings]
//! color = "#FFFFFF"
//! ```
//!
//! Loading never fails: a missing file, unparsable file, or invalid
//! field falls back to the defaults for whatever could not be read.

use std::fs;
use std::path::PathBuf;

use log::warn;

use crate::find::Manager;
use crate::highlight::Rgb;

/// Prominence tier for the highlight treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prominence {
    Low,
    Medium,
    High,
}

impl Prominence {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Prominence::Low),
            "medium" => Some(Prominence::Medium),
            "high" => Some(Prominence::High),
            _ => None,
        }
    }
}

/// Highlight configuration
#[derive(Debug, Clone)]
pub struct HighlightConfig {
    /// How strongly highlights stand out
    pub prominence: Prominence,
    /// Color for state-manager highlights
    pub state_color: Rgb,
    /// Color for settings-manager highlights
    pub settings_color: Rgb,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            prominence: Prominence::Medium,
            state_color: Rgb::new(0xFF, 0x57, 0x33),
            settings_color: Rgb::new(0xFF, 0xFF, 0xFF),
        }
    }
}

impl HighlightConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".manager-highlight.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".manager-highlight.toml"))
        }
    }

    /// Load configuration from file
    pub fn load() -> Self {
        let mut config = HighlightConfig::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                match contents.parse::<toml::Table>() {
                    Ok(table) => config.apply(&table),
                    Err(e) => warn!("ignoring unparsable config {}: {}", path.display(), e),
                }
            }
        }

        config
    }

    /// Apply settings from a parsed config table
    fn apply(&mut self, table: &toml::Table) {
        if let Some(value) = table.get("prominence") {
            match value.as_str().and_then(Prominence::parse) {
                Some(prominence) => self.prominence = prominence,
                None => warn!("ignoring invalid prominence: {}", value),
            }
        }

        for manager in Manager::ALL {
            let section = match table.get(manager.name()).and_then(|v| v.as_table()) {
                Some(section) => section,
                None => continue,
            };
            if let Some(value) = section.get("color") {
                match value.as_str().and_then(parse_hex_color) {
                    Some(color) => match manager {
                        Manager::State => self.state_color = color,
                        Manager::Settings => self.settings_color = color,
                    },
                    None => warn!("ignoring invalid {} color: {}", manager, value),
                }
            }
        }
    }

    /// Get the configured color for a manager
    pub fn color_for(&self, manager: Manager) -> Rgb {
        match manager {
            Manager::State => self.state_color,
            Manager::Settings => self.settings_color,
        }
    }
}

/// Parse a `#RRGGBB` color string
fn parse_hex_color(s: &str) -> Option<Rgb> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_settings() {
        let contents = r##"
prominence = "high"

[state]
color = "#102030"

[settings]
color = "#405060"
"##;
        let table: toml::Table = contents.parse().unwrap();
        let mut config = HighlightConfig::default();
        config.apply(&table);

        assert_eq!(config.prominence, Prominence::High);
        assert_eq!(config.state_color, Rgb::new(0x10, 0x20, 0x30));
        assert_eq!(config.settings_color, Rgb::new(0x40, 0x50, 0x60));
    }

    #[test]
    fn test_invalid_fields_fall_back() {
        let contents = r##"
prominence = "shouting"

[state]
color = "not-a-color"
"##;
        let table: toml::Table = contents.parse().unwrap();
        let mut config = HighlightConfig::default();
        config.apply(&table);

        let defaults = HighlightConfig::default();
        assert_eq!(config.prominence, defaults.prominence);
        assert_eq!(config.state_color, defaults.state_color);
    }

    #[test]
    fn test_color_for() {
        let config = HighlightConfig::default();
        assert_eq!(config.color_for(Manager::State), config.state_color);
        assert_eq!(config.color_for(Manager::Settings), config.settings_color);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF5733"), Some(Rgb::new(0xFF, 0x57, 0x33)));
        assert_eq!(parse_hex_color("#ff5733"), Some(Rgb::new(0xFF, 0x57, 0x33)));
        assert_eq!(parse_hex_color("FF5733"), None);
        assert_eq!(parse_hex_color("#FF573"), None);
        assert_eq!(parse_hex_color("#GG5733"), None);
    }
}
