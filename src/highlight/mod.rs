//! Highlight plan and styling
//!
//! This module sits between the find engine and the presentation
//! layer: it pairs computed ranges with visual styles and packages the
//! result per (manager, category) pair.

mod plan;
mod style;

pub use plan::{scan, BufferSnapshot, HighlightPlan, ManagerHighlights};
pub use style::{style_for, MatchCategory, Rgb, Style};
