//! manager-highlight - highlight state/settings manager usages
//!
//! Scans a source buffer for uses of two conventional identifier
//! managers (a state manager and a settings manager) and computes
//! precise text ranges for direct alias references and for local
//! variables destructured from them. Detection is lexical/regex-based
//! by design: no AST, no scope resolution, no cross-file analysis.

pub mod config;
pub mod error;
pub mod find;
pub mod highlight;
pub mod render;

pub use config::{HighlightConfig, Prominence};
pub use error::{HighlightError, Result};
pub use find::{destructured_variables, entire_text, ranges, Manager, Position, Range};
pub use highlight::{scan, BufferSnapshot, HighlightPlan, MatchCategory, Style};
