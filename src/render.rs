//! Terminal presentation of a highlight plan
//!
//! The stand-in host collaborator: takes the buffer text plus a
//! computed plan and applies the styles, either as ANSI-styled output
//! or as a plain-text report with caret markers. The find engine never
//! calls into this module.

use std::collections::HashMap;
use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use unicode_width::UnicodeWidthStr;

use crate::find::Manager;
use crate::highlight::{HighlightPlan, MatchCategory, Rgb, Style};

/// A styled span on one line, in char columns
#[derive(Debug, Clone, Copy)]
struct LineSpan {
    start: usize,
    end: usize,
    style: Style,
    manager: Manager,
    category: MatchCategory,
}

/// Group the plan's ranges by line, sorted by start column
fn spans_by_line(plan: &HighlightPlan) -> HashMap<usize, Vec<LineSpan>> {
    let mut by_line: HashMap<usize, Vec<LineSpan>> = HashMap::new();

    for set in &plan.managers {
        for (range, style, category) in set.styled_ranges() {
            // Identifier matches never contain a line break.
            if !range.is_single_line() {
                continue;
            }
            by_line.entry(range.start.line).or_default().push(LineSpan {
                start: range.start.column,
                end: range.end.column,
                style,
                manager: set.manager,
                category,
            });
        }
    }

    for spans in by_line.values_mut() {
        spans.sort_by_key(|s| (s.start, s.end));
    }

    by_line
}

/// Byte offset of a char column within a line
fn byte_of_column(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

fn set_style(out: &mut impl Write, style: Style) -> io::Result<()> {
    if let Some(Rgb { r, g, b }) = style.fg {
        queue!(out, SetForegroundColor(Color::Rgb { r, g, b }))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn write_segment(out: &mut impl Write, text: &str, style: Style) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    if style.is_default() {
        queue!(out, Print(text))?;
    } else {
        set_style(out, style)?;
        queue!(out, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;
    }
    Ok(())
}

/// Write the buffer with every planned range styled
///
/// With `dim_rest` set, unhighlighted text gets the plan's dim style,
/// mirroring the whole-buffer dimming treatment.
pub fn render_ansi(
    text: &str,
    plan: &HighlightPlan,
    dim_rest: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    let by_line = spans_by_line(plan);
    let gap_style = if dim_rest {
        plan.dim_style
    } else {
        Style::default()
    };

    for (line_no, line) in text.split('\n').enumerate() {
        if line_no > 0 {
            queue!(out, Print("\n"))?;
        }

        let mut column = 0;
        if let Some(spans) = by_line.get(&line_no) {
            for span in spans {
                if span.start < column {
                    // Overlapping span; the first one claimed the text.
                    continue;
                }
                let gap = &line[byte_of_column(line, column)..byte_of_column(line, span.start)];
                write_segment(out, gap, gap_style)?;
                let body = &line[byte_of_column(line, span.start)..byte_of_column(line, span.end)];
                write_segment(out, body, span.style)?;
                column = span.end;
            }
        }

        let tail = &line[byte_of_column(line, column)..];
        write_segment(out, tail, gap_style)?;
    }

    out.flush()
}

/// Write a plain-text report of every highlighted range
///
/// Each line holding matches is printed with its line number, followed
/// by marker lines with carets under the matched text, aligned by
/// display width so wide characters do not skew the markers.
pub fn write_report(text: &str, plan: &HighlightPlan, out: &mut impl Write) -> io::Result<()> {
    let by_line = spans_by_line(plan);

    for (line_no, line) in text.split('\n').enumerate() {
        let spans = match by_line.get(&line_no) {
            Some(spans) => spans,
            None => continue,
        };

        writeln!(out, "{:>4} | {}", line_no + 1, line)?;
        for span in spans {
            let lead = line[..byte_of_column(line, span.start)].width();
            let body = &line[byte_of_column(line, span.start)..byte_of_column(line, span.end)];
            writeln!(
                out,
                "     | {}{} {} from {}",
                " ".repeat(lead),
                "^".repeat(body.width().max(1)),
                span.category.name(),
                span.manager
            )?;
        }
    }

    writeln!(out, "{} highlighted range(s)", plan.len())
}
