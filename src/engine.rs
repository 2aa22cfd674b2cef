//! Drives the active checks over a line sequence and aggregates violations.

use indexmap::IndexMap;
use serde::Serialize;

use crate::checks::{CheckDefinition, CheckEvaluator, FileContext, LineContext, Violation};
use crate::source::Line;

/// One entry of the per-code aggregate report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub count: usize,
}

/// The ordered violation sequence of one validation run.
///
/// Created fresh per invocation and discarded after reporting. Data-quality
/// problems always land here as violations; the engine never fails on
/// malformed data.
#[derive(Debug, Default)]
pub struct RunResult {
    violations: Vec<Violation>,
}

impl RunResult {
    #[must_use]
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Per-code counts, ordered by first occurrence in the violation sequence.
    #[must_use]
    pub fn summary(&self) -> Vec<SummaryEntry> {
        let mut counts: IndexMap<&'static str, SummaryEntry> = IndexMap::new();
        for violation in &self.violations {
            counts
                .entry(violation.code)
                .or_insert_with(|| SummaryEntry {
                    code: violation.code,
                    name: violation.check_name,
                    count: 0,
                })
                .count += 1;
        }
        counts.into_values().collect()
    }
}

/// Executes the active checks against a line sequence.
///
/// Single-threaded and deterministic: identical lines, comment prefix, and
/// active-check set always yield the identical violation sequence.
pub struct ValidationEngine<'a> {
    checks: Vec<&'a CheckDefinition>,
    comment_prefix: Option<String>,
}

impl<'a> ValidationEngine<'a> {
    #[must_use]
    pub fn new(checks: Vec<&'a CheckDefinition>, comment_prefix: Option<String>) -> Self {
        Self {
            checks,
            comment_prefix,
        }
    }

    /// Runs one pass over the lines, then the whole-file checks.
    ///
    /// Comment lines are excluded from per-line checks but keep their place in
    /// the numbering. The header is the first non-comment line; header-relative
    /// checks see it as context for every subsequent line.
    #[must_use]
    pub fn run(&self, lines: &[Line]) -> RunResult {
        let mut violations = Vec::new();

        let header = lines.iter().find(|l| !self.is_comment(l));
        let header_tab_count = header.map(Line::tab_count);
        let last_number = lines.last().map_or(0, Line::number);

        for line in lines {
            if self.is_comment(line) {
                continue;
            }
            let ctx = LineContext {
                line,
                header,
                header_tab_count,
                is_header: header.is_some_and(|h| h.number() == line.number()),
                is_last: line.number() == last_number,
            };
            for check in &self.checks {
                if let CheckEvaluator::Line(evaluate) = check.evaluator {
                    violations.extend(evaluate(&ctx));
                }
            }
        }

        let ctx = FileContext {
            lines,
            header,
            comment_prefix: self.comment_prefix.as_deref(),
        };
        for check in &self.checks {
            if let CheckEvaluator::File(evaluate) = check.evaluator {
                violations.extend(evaluate(&ctx));
            }
        }

        RunResult { violations }
    }

    fn is_comment(&self, line: &Line) -> bool {
        self.comment_prefix
            .as_deref()
            .is_some_and(|p| line.is_comment(p))
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
