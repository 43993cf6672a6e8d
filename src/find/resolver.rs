//! Range resolver
//!
//! This module turns a set of identifier tokens into concrete text
//! ranges within a buffer, converting absolute match offsets into
//! zero-based line/column positions through a line-break index.

use std::collections::HashSet;

use log::debug;
use regex::Regex;

/// A zero-based position in a buffer
///
/// Columns count characters, not bytes, so positions stay meaningful
/// in buffers holding non-ASCII text around the matched identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A half-open span of buffer positions
///
/// Ranges reference text as it existed at scan time; any buffer
/// mutation invalidates them and a fresh scan must recompute them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Whether this range starts and ends on one line
    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }
}

/// Line-break index for one text snapshot
///
/// Records the byte offset of every line start so absolute match
/// offsets can be resolved to line/column positions.
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { text, line_starts }
    }

    /// Resolve an absolute byte offset to a position
    ///
    /// Returns None when the offset is past the end of the text or not
    /// on a character boundary. Offset 0 resolves like any other; "no
    /// position" is expressed by the None sentinel, never by a zero
    /// value doing double duty.
    pub fn position_at(&self, offset: usize) -> Option<Position> {
        if offset > self.text.len() || !self.text.is_char_boundary(offset) {
            return None;
        }
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let column = self.text[self.line_starts[line]..offset].chars().count();
        Some(Position::new(line, column))
    }
}

/// Boundary-respecting alternation over an identifier set
///
/// Each identifier must be followed by exactly one non-word character
/// or line break. The identifier alternatives sit in capture group 1
/// so the boundary character can be excluded from the emitted range
/// without byte arithmetic (the boundary may be a multi-byte char such
/// as NBSP or a guillemet). Identifiers are escaped and sorted so the
/// same set always compiles to the same pattern.
fn alternation(identifiers: &HashSet<String>) -> Option<Regex> {
    let mut tokens: Vec<String> = identifiers.iter().map(|s| regex::escape(s)).collect();
    tokens.sort_unstable();
    Regex::new(&format!(r"({})\W", tokens.join("|"))).ok()
}

/// Return the ranges where any of the identifiers occur as whole tokens
///
/// Matches are produced in left-to-right scan order. Each emitted range
/// covers exactly the identifier text; the boundary character that
/// follows it is required by the match but excluded from the range.
/// Overlapping ranges from non-disjoint identifier sets (say "state"
/// and "stateful") are emitted as-is, not merged.
///
/// Known gap, kept intentionally: an identifier that is the very last
/// token of the text with no trailing delimiter has no boundary
/// character and is never matched.
pub fn ranges(identifiers: &HashSet<String>, text: &str) -> Vec<Range> {
    // An empty set must never reach the regex builder: an empty
    // alternation would degenerate into matching every position.
    if identifiers.is_empty() {
        return Vec::new();
    }
    let regex = match alternation(identifiers) {
        Some(regex) => regex,
        None => return Vec::new(),
    };

    let index = LineIndex::new(text);
    let mut out = Vec::new();

    for caps in regex.captures_iter(text) {
        let token = match caps.get(1) {
            Some(token) => token,
            None => continue,
        };
        // The group covers exactly the identifier; the boundary
        // character sits past its end and stays unstyled.
        let positions = (index.position_at(token.start()), index.position_at(token.end()));
        match positions {
            (Some(start), Some(end)) => out.push(Range::new(start, end)),
            _ => debug!(
                "skipping match at {}..{}: offset not resolvable",
                token.start(),
                token.end()
            ),
        }
    }

    out
}

/// Return a range spanning the whole text, for whole-buffer dimming
pub fn entire_text(text: &str) -> Range {
    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;
    let column = lines[last].chars().count().saturating_sub(1);
    Range::new(Position::new(0, 0), Position::new(last, column))
}
