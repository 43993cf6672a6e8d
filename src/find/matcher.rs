//! Identifier matcher
//!
//! This module discovers local variable names bound by destructuring
//! from a manager, using lexical pattern matching over the raw buffer
//! text. It is not a parser: scoping, shadowing and renamed or nested
//! destructuring are out of scope.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use super::manager::Manager;

/// Identifier shape accepted by the scanner: one ASCII letter followed
/// by ASCII letters or digits. No underscores, no Unicode, no leading
/// digit. A name like `foo_bar` therefore yields `foo` and `bar`; this
/// is a documented limitation of the contract, not a defect.
pub const IDENTIFIER: &str = "[a-zA-Z][a-zA-Z0-9]*";

fn identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(IDENTIFIER).expect("valid identifier pattern"))
}

/// Destructuring-site pattern for one manager
///
/// Matches a declaration keyword, a brace-delimited list restricted to
/// word characters, whitespace and commas, then `=` and the manager's
/// name token. `\s` matches line breaks, so multi-line lists are found.
/// Capture group 1 is the brace interior.
fn destructuring_regex(manager: Manager) -> &'static Regex {
    static STATE: OnceLock<Regex> = OnceLock::new();
    static SETTINGS: OnceLock<Regex> = OnceLock::new();
    let cell = match manager {
        Manager::State => &STATE,
        Manager::Settings => &SETTINGS,
    };
    cell.get_or_init(|| {
        let pattern = format!(
            r"(?:let|const|var)\s*\{{([\w\s,]*)\}}\s*=\s*{}",
            manager.name()
        );
        Regex::new(&pattern).expect("valid destructuring pattern")
    })
}

/// Return the unique variable names destructured from a manager
///
/// Scans the whole text for destructuring sites whose right-hand side
/// is the manager, and collects every identifier-shaped substring
/// strictly inside the braces. Returns the empty set when no site
/// exists. Pure: identical text always yields an identical set.
pub fn destructured_variables(manager: Manager, text: &str) -> HashSet<String> {
    let mut variables = HashSet::new();

    for site in destructuring_regex(manager).captures_iter(text) {
        let interior = &site[1];
        for ident in identifier_regex().find_iter(interior) {
            variables.insert(ident.as_str().to_string());
        }
    }

    variables
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(set: &HashSet<String>) -> Vec<&str> {
        let mut v: Vec<&str> = set.iter().map(|s| s.as_str()).collect();
        v.sort();
        v
    }

    #[test]
    fn test_no_sites() {
        assert!(destructured_variables(Manager::State, "").is_empty());
        assert!(destructured_variables(Manager::State, "let x = 1;").is_empty());
        assert!(destructured_variables(Manager::State, "state.foo()").is_empty());
    }

    #[test]
    fn test_simple_site() {
        let vars = destructured_variables(Manager::State, "const { a, b } = state;");
        assert_eq!(names(&vars), vec!["a", "b"]);
    }

    #[test]
    fn test_declaration_keywords() {
        for keyword in ["let", "const", "var"] {
            let text = format!("{} {{ total }} = settings;", keyword);
            let vars = destructured_variables(Manager::Settings, &text);
            assert_eq!(names(&vars), vec!["total"]);
        }
    }

    #[test]
    fn test_multiline_site() {
        let text = "const {\n  speed,\n  heading,\n} = state;\n";
        let vars = destructured_variables(Manager::State, text);
        assert_eq!(names(&vars), vec!["heading", "speed"]);
    }

    #[test]
    fn test_unique_across_sites() {
        let text = "let { a } = state;\nconst { a, b } = state;\n";
        let vars = destructured_variables(Manager::State, text);
        assert_eq!(names(&vars), vec!["a", "b"]);
    }

    #[test]
    fn test_managers_are_independent() {
        let text = "const { a } = state;\nconst { b } = settings;\n";
        assert_eq!(names(&destructured_variables(Manager::State, text)), vec!["a"]);
        assert_eq!(
            names(&destructured_variables(Manager::Settings, text)),
            vec!["b"]
        );
    }

    #[test]
    fn test_idempotent() {
        let text = "const { a, b } = state;";
        let first = destructured_variables(Manager::State, text);
        let second = destructured_variables(Manager::State, text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_underscore_split() {
        // Underscores are outside the identifier contract, so a snake_case
        // binding contributes its alphabetic fragments.
        let vars = destructured_variables(Manager::State, "const { max_speed } = state;");
        assert_eq!(names(&vars), vec!["max", "speed"]);
    }

    #[test]
    fn test_array_destructuring_ignored() {
        let vars = destructured_variables(Manager::State, "const [ a, b ] = state;");
        assert!(vars.is_empty());
    }
}
