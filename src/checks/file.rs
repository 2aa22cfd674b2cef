//! Whole-file check evaluators, run once after the line pass.

use std::collections::HashSet;

use super::{FileContext, Violation, meta};

/// E8: every cell in a column index is empty across all non-comment rows.
///
/// Column indices are taken positionally from each row, so a ragged file can
/// contribute cells beyond the header width. Reported at line 0 with a
/// 1-based column.
pub(super) fn empty_column(ctx: &FileContext) -> Vec<Violation> {
    let mut column_filled: Vec<bool> = Vec::new();

    for line in ctx.data_lines() {
        for (idx, cell) in line.cells().enumerate() {
            if column_filled.len() <= idx {
                column_filled.resize(idx + 1, false);
            }
            if !cell.trim().is_empty() {
                column_filled[idx] = true;
            }
        }
    }

    column_filled
        .iter()
        .enumerate()
        .filter(|(_, filled)| !**filled)
        .map(|(idx, _)| {
            meta::EMPTY_COLUMN.violation(
                0,
                idx + 1,
                format!("TSV file contains empty column at column index {}.", idx + 1),
            )
        })
        .collect()
}

/// E9: the last physical line is not an empty trailing row.
///
/// Because the line split never materializes a trailing empty line, this
/// amounts to the file not ending with `\n`. Empty files pass.
pub(super) fn empty_last_row(ctx: &FileContext) -> Vec<Violation> {
    match ctx.lines.last() {
        Some(last) if !last.raw().ends_with('\n') => {
            vec![meta::EMPTY_LAST_ROW.violation(
                last.number(),
                0,
                "Last row in file should be empty.".to_string(),
            )]
        }
        _ => Vec::new(),
    }
}

/// E10: two header cells hold the same value. Reported at the header line.
pub(super) fn duplicate_header_value(ctx: &FileContext) -> Vec<Violation> {
    let Some(header) = ctx.header else {
        return Vec::new();
    };

    let cells: Vec<&str> = header.cells().collect();
    let unique: HashSet<&str> = cells.iter().copied().collect();
    if unique.len() == cells.len() {
        return Vec::new();
    }

    vec![meta::DUPLICATE_HEADER_VALUE.violation(
        header.number(),
        0,
        format!("Header row has duplicate values, line {}.", header.number()),
    )]
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
