//! Per-line check evaluators.
//!
//! Each evaluator receives a [`LineContext`] for one non-comment line and
//! returns the violations it finds there. Cell-level rules report a 1-based
//! column; line-level rules report column 0.

use super::{LineContext, Violation, meta};

/// E1: the raw line carries a carriage return in any position.
///
/// Covers `\r\n` and bare `\r` terminators as well as the stray `\r` line a
/// `\n\r` sequence splits into.
pub(super) fn line_break_encoding(ctx: &LineContext) -> Vec<Violation> {
    if ctx.line.raw().contains('\r') {
        vec![meta::LINE_BREAK_ENCODING.violation(
            ctx.line.number(),
            0,
            format!("Invalid line break in line {}.", ctx.line.number()),
        )]
    } else {
        Vec::new()
    }
}

/// E2: a cell starts with whitespace.
pub(super) fn leading_whitespace(ctx: &LineContext) -> Vec<Violation> {
    ctx.line
        .cells()
        .enumerate()
        .filter(|(_, cell)| cell.starts_with(char::is_whitespace))
        .map(|(idx, _)| {
            meta::LEADING_WHITESPACE.violation(
                ctx.line.number(),
                idx + 1,
                format!(
                    "Redundant leading whitespace in column {} at line number {}.",
                    idx + 1,
                    ctx.line.number()
                ),
            )
        })
        .collect()
}

/// E3: a cell ends with whitespace.
pub(super) fn trailing_whitespace(ctx: &LineContext) -> Vec<Violation> {
    ctx.line
        .cells()
        .enumerate()
        .filter(|(_, cell)| cell.ends_with(char::is_whitespace))
        .map(|(idx, _)| {
            meta::TRAILING_WHITESPACE.violation(
                ctx.line.number(),
                idx + 1,
                format!(
                    "Redundant trailing whitespace in column {} at line number {}.",
                    idx + 1,
                    ctx.line.number()
                ),
            )
        })
        .collect()
}

/// E4: tab count differs from the header's tab count.
///
/// The header itself defines the expected count and is never flagged.
pub(super) fn wrong_number_of_tabs(ctx: &LineContext) -> Vec<Violation> {
    if ctx.is_header {
        return Vec::new();
    }
    match ctx.header_tab_count {
        Some(expected) if ctx.line.tab_count() != expected => {
            vec![meta::WRONG_NUMBER_OF_TABS.violation(
                ctx.line.number(),
                0,
                format!(
                    "Number of tabs in line {} does not match tabs in header.",
                    ctx.line.number()
                ),
            )]
        }
        _ => Vec::new(),
    }
}

/// E5: the line is empty and not the last physical line.
///
/// The last line is exempt because a trailing blank row is the expected file
/// ending (see E9).
pub(super) fn empty_line(ctx: &LineContext) -> Vec<Violation> {
    if ctx.line.is_empty() && !ctx.is_last {
        vec![meta::EMPTY_LINE.violation(
            ctx.line.number(),
            0,
            format!("Empty line {}.", ctx.line.number()),
        )]
    } else {
        Vec::new()
    }
}

/// E6: a header cell is empty or whitespace-only. Header line only.
pub(super) fn missing_header_value(ctx: &LineContext) -> Vec<Violation> {
    if !ctx.is_header {
        return Vec::new();
    }
    ctx.line
        .cells()
        .enumerate()
        .filter(|(_, cell)| cell.trim().is_empty())
        .map(|(idx, _)| {
            meta::MISSING_HEADER_VALUE.violation(
                ctx.line.number(),
                idx + 1,
                format!(
                    "Header row has missing values, line {}.",
                    ctx.line.number()
                ),
            )
        })
        .collect()
}

/// W1: a cell contains a character outside printable ASCII.
pub(super) fn non_ascii(ctx: &LineContext) -> Vec<Violation> {
    ctx.line
        .cells()
        .enumerate()
        .filter(|(_, cell)| cell.chars().any(|c| !is_printable_ascii(c)))
        .map(|(idx, _)| {
            meta::NON_ASCII.violation(
                ctx.line.number(),
                idx + 1,
                format!(
                    "Non ASCII character in column {} at line number {}.",
                    idx + 1,
                    ctx.line.number()
                ),
            )
        })
        .collect()
}

const fn is_printable_ascii(c: char) -> bool {
    c.is_ascii_graphic() || c == ' '
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
