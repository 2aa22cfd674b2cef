mod file;
mod line;
mod registry;

pub use registry::CheckRegistry;

use serde::Serialize;

use crate::source::Line;

/// A single reported instance of a rule being broken, tied to a location.
///
/// `line` 0 means file-level; `column` 0 means the finding is not tied to a
/// specific cell. Violations are produced by check evaluators and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub code: &'static str,
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub check_name: &'static str,
}

/// Whether a check evaluates one line at a time or the file as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckScope {
    Line,
    File,
}

/// Context handed to a per-line evaluator.
///
/// Comment lines never reach evaluators; the header is the first non-comment
/// line of the file.
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    pub line: &'a Line,
    pub header: Option<&'a Line>,
    pub header_tab_count: Option<usize>,
    pub is_header: bool,
    pub is_last: bool,
}

/// Context handed to a whole-file evaluator after the line pass.
#[derive(Debug, Clone, Copy)]
pub struct FileContext<'a> {
    pub lines: &'a [Line],
    pub header: Option<&'a Line>,
    pub comment_prefix: Option<&'a str>,
}

impl<'a> FileContext<'a> {
    /// Non-comment lines, in file order.
    pub fn data_lines(&self) -> impl Iterator<Item = &'a Line> {
        let prefix = self.comment_prefix;
        self.lines
            .iter()
            .filter(move |l| !prefix.is_some_and(|p| l.is_comment(p)))
    }
}

/// Stable identity of a check: error code plus human-readable name.
#[derive(Debug)]
pub struct CheckMeta {
    pub code: &'static str,
    pub name: &'static str,
}

impl CheckMeta {
    #[must_use]
    pub fn violation(&'static self, line: usize, column: usize, message: String) -> Violation {
        Violation {
            code: self.code,
            line,
            column,
            message,
            check_name: self.name,
        }
    }
}

pub mod meta {
    use super::CheckMeta;

    pub static LINE_BREAK_ENCODING: CheckMeta = CheckMeta {
        code: "E1",
        name: "Line break encoding",
    };
    pub static LEADING_WHITESPACE: CheckMeta = CheckMeta {
        code: "E2",
        name: "Redundant leading whitespace",
    };
    pub static TRAILING_WHITESPACE: CheckMeta = CheckMeta {
        code: "E3",
        name: "Redundant trailing whitespace",
    };
    pub static WRONG_NUMBER_OF_TABS: CheckMeta = CheckMeta {
        code: "E4",
        name: "Wrong number of tabs",
    };
    pub static EMPTY_LINE: CheckMeta = CheckMeta {
        code: "E5",
        name: "Empty line",
    };
    pub static MISSING_HEADER_VALUE: CheckMeta = CheckMeta {
        code: "E6",
        name: "Missing value in header",
    };
    pub static EMPTY_COLUMN: CheckMeta = CheckMeta {
        code: "E8",
        name: "Empty column",
    };
    pub static EMPTY_LAST_ROW: CheckMeta = CheckMeta {
        code: "E9",
        name: "Empty last row",
    };
    pub static DUPLICATE_HEADER_VALUE: CheckMeta = CheckMeta {
        code: "E10",
        name: "Duplicate value in header",
    };
    pub static NON_ASCII: CheckMeta = CheckMeta {
        code: "W1",
        name: "Non ASCII character in cell",
    };
}

/// Evaluator function for a check, dispatched on scope.
///
/// Evaluators are pure: identical input always yields identical violations.
#[derive(Debug, Clone, Copy)]
pub enum CheckEvaluator {
    Line(fn(&LineContext) -> Vec<Violation>),
    File(fn(&FileContext) -> Vec<Violation>),
}

/// One entry of the fixed check catalogue.
#[derive(Debug, Clone, Copy)]
pub struct CheckDefinition {
    pub meta: &'static CheckMeta,
    pub evaluator: CheckEvaluator,
}

impl CheckDefinition {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.meta.code
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.meta.name
    }

    #[must_use]
    pub const fn scope(&self) -> CheckScope {
        match self.evaluator {
            CheckEvaluator::Line(_) => CheckScope::Line,
            CheckEvaluator::File(_) => CheckScope::File,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
