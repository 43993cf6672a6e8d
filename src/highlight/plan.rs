//! Highlight plan computation
//!
//! This module runs the find engine for every (manager, category) pair
//! over an immutable buffer snapshot and produces a complete plan of
//! styled ranges for the presentation layer to apply.

use crate::config::HighlightConfig;
use crate::find::{destructured_variables, entire_text, ranges, Manager, Range};

use super::style::{style_for, MatchCategory, Style};

/// An immutable view of the buffer and configuration for one scan
///
/// Snapshots are built wholesale and replaced, never mutated in place:
/// the surrounding system constructs a fresh one on every buffer edit
/// or configuration change and discards the old plan along with it.
#[derive(Debug, Clone)]
pub struct BufferSnapshot {
    pub text: String,
    pub config: HighlightConfig,
}

impl BufferSnapshot {
    pub fn new(text: impl Into<String>, config: HighlightConfig) -> Self {
        Self {
            text: text.into(),
            config,
        }
    }
}

/// Computed highlights for one manager
#[derive(Debug, Clone)]
pub struct ManagerHighlights {
    pub manager: Manager,
    /// Ranges of direct alias references, with their style
    pub references: Vec<Range>,
    pub reference_style: Style,
    /// Ranges of destructured variables, with their style
    pub variables: Vec<Range>,
    pub variable_style: Style,
}

impl ManagerHighlights {
    /// Iterate every styled range in this set with its category
    pub fn styled_ranges(&self) -> impl Iterator<Item = (Range, Style, MatchCategory)> + '_ {
        let references = self
            .references
            .iter()
            .map(move |&r| (r, self.reference_style, MatchCategory::ManagerReference));
        let variables = self
            .variables
            .iter()
            .map(move |&r| (r, self.variable_style, MatchCategory::DestructuredVariable));
        references.chain(variables)
    }
}

/// The full output of one scan
#[derive(Debug, Clone)]
pub struct HighlightPlan {
    /// Per-manager highlights, in Manager::ALL order
    pub managers: Vec<ManagerHighlights>,
    /// Whole-buffer range for dimming unhighlighted text
    pub dim: Range,
    pub dim_style: Style,
}

impl HighlightPlan {
    /// Total number of highlighted ranges across all managers
    pub fn len(&self) -> usize {
        self.managers
            .iter()
            .map(|m| m.references.len() + m.variables.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scan a snapshot and compute its highlight plan
///
/// Pure and synchronous: a full-text rescan with no caching or
/// incremental diffing, so the cost is proportional to text size times
/// configured identifiers. Throttling of rapid rescans is the caller's
/// concern.
pub fn scan(snapshot: &BufferSnapshot) -> HighlightPlan {
    let text = snapshot.text.as_str();
    let config = &snapshot.config;

    let managers = Manager::ALL
        .iter()
        .map(|&manager| {
            let references = ranges(&manager.alias_set(), text);
            let variables = ranges(&destructured_variables(manager, text), text);
            ManagerHighlights {
                manager,
                references,
                reference_style: style_for(manager, MatchCategory::ManagerReference, config),
                variables,
                variable_style: style_for(manager, MatchCategory::DestructuredVariable, config),
            }
        })
        .collect();

    HighlightPlan {
        managers,
        dim: entire_text(text),
        dim_style: Style::dimmed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::find::Position;

    fn snapshot(text: &str) -> BufferSnapshot {
        BufferSnapshot::new(text, HighlightConfig::default())
    }

    #[test]
    fn test_empty_buffer() {
        let plan = scan(&snapshot(""));
        assert!(plan.is_empty());
        assert_eq!(plan.managers.len(), 2);
        assert_eq!(plan.dim.start, Position::new(0, 0));
    }

    #[test]
    fn test_references_and_variables() {
        let text = "const { speed } = state;\nupdateState({ speed: 1 });\nspeed += 1;\n";
        let plan = scan(&snapshot(text));

        let state = &plan.managers[0];
        assert_eq!(state.manager, Manager::State);
        // "state" on line 0 and "updateState" on line 1.
        assert_eq!(state.references.len(), 2);
        // "speed" inside the braces on lines 0 and 1 and bare on line 2.
        assert_eq!(state.variables.len(), 3);

        let settings = &plan.managers[1];
        assert!(settings.references.is_empty());
        assert!(settings.variables.is_empty());
    }

    #[test]
    fn test_dim_covers_buffer() {
        let text = "one\ntwo\nthree";
        let plan = scan(&snapshot(text));
        assert_eq!(plan.dim, entire_text(text));
        assert!(plan.dim_style.dim);
    }

    #[test]
    fn test_scan_is_pure() {
        let snap = snapshot("const { a } = settings; settings.b;\n");
        let first = scan(&snap);
        let second = scan(&snap);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.managers.iter().zip(second.managers.iter()) {
            assert_eq!(a.references, b.references);
            assert_eq!(a.variables, b.variables);
        }
    }

    #[test]
    fn test_styled_ranges_iterates_both_categories() {
        let plan = scan(&snapshot("const { a } = state; a;\n"));
        let state = &plan.managers[0];
        let categories: Vec<MatchCategory> =
            state.styled_ranges().map(|(_, _, c)| c).collect();
        assert!(categories.contains(&MatchCategory::ManagerReference));
        assert!(categories.contains(&MatchCategory::DestructuredVariable));
    }
}
