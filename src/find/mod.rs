//! Pattern-detection and range-computation engine
//!
//! This module finds manager-qualified identifiers and destructured
//! variables in raw buffer text and resolves them to precise text
//! ranges:
//! - matcher: destructuring-site discovery
//! - resolver: token ranges and position arithmetic
//!
//! Everything here is pure and synchronous: each scan is a function of
//! the text snapshot it is handed, with no shared mutable state.

mod manager;
mod matcher;
mod resolver;

pub use manager::Manager;
pub use matcher::destructured_variables;
pub use resolver::{entire_text, ranges, LineIndex, Position, Range};
