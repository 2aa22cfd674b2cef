use indexmap::IndexMap;

use crate::error::{Result, TsvGuardError};

use super::{CheckDefinition, CheckEvaluator, file, line, meta};

/// The fixed, ordered catalogue of all known checks, keyed by error code.
///
/// Iteration order is ascending numeric code with `E` codes before `W` codes;
/// it drives both evaluation order and default report order. The code set is
/// the single source of truth for valid codes accepted by skip filters.
/// Read-only after construction.
#[derive(Debug)]
pub struct CheckRegistry {
    checks: IndexMap<&'static str, CheckDefinition>,
}

impl CheckRegistry {
    #[must_use]
    pub fn new() -> Self {
        let definitions = [
            CheckDefinition {
                meta: &meta::LINE_BREAK_ENCODING,
                evaluator: CheckEvaluator::Line(line::line_break_encoding),
            },
            CheckDefinition {
                meta: &meta::LEADING_WHITESPACE,
                evaluator: CheckEvaluator::Line(line::leading_whitespace),
            },
            CheckDefinition {
                meta: &meta::TRAILING_WHITESPACE,
                evaluator: CheckEvaluator::Line(line::trailing_whitespace),
            },
            CheckDefinition {
                meta: &meta::WRONG_NUMBER_OF_TABS,
                evaluator: CheckEvaluator::Line(line::wrong_number_of_tabs),
            },
            CheckDefinition {
                meta: &meta::EMPTY_LINE,
                evaluator: CheckEvaluator::Line(line::empty_line),
            },
            CheckDefinition {
                meta: &meta::MISSING_HEADER_VALUE,
                evaluator: CheckEvaluator::Line(line::missing_header_value),
            },
            CheckDefinition {
                meta: &meta::EMPTY_COLUMN,
                evaluator: CheckEvaluator::File(file::empty_column),
            },
            CheckDefinition {
                meta: &meta::EMPTY_LAST_ROW,
                evaluator: CheckEvaluator::File(file::empty_last_row),
            },
            CheckDefinition {
                meta: &meta::DUPLICATE_HEADER_VALUE,
                evaluator: CheckEvaluator::File(file::duplicate_header_value),
            },
            CheckDefinition {
                meta: &meta::NON_ASCII,
                evaluator: CheckEvaluator::Line(line::non_ascii),
            },
        ];

        Self {
            checks: definitions.into_iter().map(|d| (d.code(), d)).collect(),
        }
    }

    /// All checks in stable catalogue order.
    pub fn all(&self) -> impl Iterator<Item = &CheckDefinition> {
        self.checks.values()
    }

    /// All registered codes in catalogue order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> {
        self.checks.keys().copied()
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.checks.contains_key(code)
    }

    /// Looks up a check by its error code.
    ///
    /// # Errors
    /// Returns an error for a code not present in the catalogue.
    pub fn lookup(&self, code: &str) -> Result<&CheckDefinition> {
        self.checks
            .get(code)
            .ok_or_else(|| TsvGuardError::UnknownCheck(code.to_string()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
