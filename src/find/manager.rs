//! Manager enumeration and alias tables
//!
//! This module defines the closed set of identifier managers the
//! scanner knows about and the fixed alias tokens that count as a
//! direct reference to each of them.

use std::collections::HashSet;

/// The architectural roles whose usages get highlighted
///
/// A closed domain: managers are compile-time constants, never
/// created or destroyed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Manager {
    /// The application state manager
    State,
    /// The application settings manager
    Settings,
}

const STATE_ALIASES: [&str; 3] = ["state", "useState", "updateState"];
const SETTINGS_ALIASES: [&str; 3] = ["settings", "useSettings", "updateSettings"];

impl Manager {
    /// All managers, in scan order
    pub const ALL: [Manager; 2] = [Manager::State, Manager::Settings];

    /// The manager's own name token, as it appears in source text
    pub fn name(&self) -> &'static str {
        match self {
            Manager::State => "state",
            Manager::Settings => "settings",
        }
    }

    /// Fixed tokens recognized as direct references to this manager
    ///
    /// The manager's own name plus its conventional accessor and
    /// updater function names.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Manager::State => &STATE_ALIASES,
            Manager::Settings => &SETTINGS_ALIASES,
        }
    }

    /// The alias table as an owned identifier set, ready for range scanning
    pub fn alias_set(&self) -> HashSet<String> {
        self.aliases().iter().map(|s| s.to_string()).collect()
    }
}

impl std::fmt::Display for Manager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Manager::State.name(), "state");
        assert_eq!(Manager::Settings.name(), "settings");
    }

    #[test]
    fn test_aliases_include_name() {
        for manager in Manager::ALL {
            assert!(manager.aliases().contains(&manager.name()));
        }
    }

    #[test]
    fn test_alias_set() {
        let set = Manager::Settings.alias_set();
        assert_eq!(set.len(), 3);
        assert!(set.contains("useSettings"));
        assert!(set.contains("updateSettings"));
    }
}
