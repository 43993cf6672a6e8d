//! Style types for highlighted ranges
//!
//! Visual-style handles handed to the presentation layer alongside the
//! computed ranges. The core never applies these itself.

use crate::config::{HighlightConfig, Prominence};
use crate::find::Manager;

/// A 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Terminal text style for one highlight tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color (None = terminal default)
    pub fg: Option<Rgb>,
    /// Bold text
    pub bold: bool,
    /// Underlined text
    pub underline: bool,
    /// Faint text (used for whole-buffer dimming)
    pub dim: bool,
}

impl Style {
    /// Create a style with just a foreground color
    pub fn fg(color: Rgb) -> Self {
        Self {
            fg: Some(color),
            ..Default::default()
        }
    }

    /// Create the faint style used for dimming unhighlighted text
    pub fn dimmed() -> Self {
        Self {
            dim: true,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Builder: set dim
    pub fn with_dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// The kind of match a range represents
///
/// Routes ranges to the appropriate visual treatment: direct manager
/// references get the prominent tier, destructured variables the
/// lighter one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchCategory {
    /// A direct reference to a manager alias token
    ManagerReference,
    /// A local variable destructured from a manager
    DestructuredVariable,
}

impl MatchCategory {
    /// Get a human-readable name for this category
    pub fn name(&self) -> &'static str {
        match self {
            MatchCategory::ManagerReference => "manager reference",
            MatchCategory::DestructuredVariable => "destructured variable",
        }
    }
}

/// Resolve the style for a (manager, category) pair under a config
pub fn style_for(manager: Manager, category: MatchCategory, config: &HighlightConfig) -> Style {
    let base = Style::fg(config.color_for(manager));

    match (config.prominence, category) {
        (Prominence::Low, MatchCategory::ManagerReference) => base,
        (Prominence::Low, MatchCategory::DestructuredVariable) => base.with_dim(),
        (Prominence::Medium, MatchCategory::ManagerReference) => base.with_bold(),
        (Prominence::Medium, MatchCategory::DestructuredVariable) => base,
        (Prominence::High, MatchCategory::ManagerReference) => base.with_bold().with_underline(),
        (Prominence::High, MatchCategory::DestructuredVariable) => base.with_bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default() {
        let style = Style::default();
        assert!(style.is_default());
        assert_eq!(style.fg, None);
        assert!(!style.bold);
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Rgb::new(255, 87, 51)).with_bold();
        assert_eq!(style.fg, Some(Rgb::new(255, 87, 51)));
        assert!(style.bold);
        assert!(!style.underline);
        assert!(!style.is_default());
    }

    #[test]
    fn test_reference_tier_outranks_variable_tier() {
        let config = HighlightConfig::default();
        let reference = style_for(Manager::State, MatchCategory::ManagerReference, &config);
        let variable = style_for(Manager::State, MatchCategory::DestructuredVariable, &config);
        assert_eq!(reference.fg, variable.fg);
        assert!(reference.bold);
        assert!(!variable.bold);
    }

    #[test]
    fn test_low_prominence_variables_are_faint() {
        let mut config = HighlightConfig::default();
        config.prominence = Prominence::Low;
        let variable = style_for(Manager::Settings, MatchCategory::DestructuredVariable, &config);
        assert!(variable.dim);
    }
}
