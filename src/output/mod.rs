mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::engine::RunResult;
use crate::error::Result;

/// Everything a formatter needs to render one validation run.
#[derive(Debug, Clone, Copy)]
pub struct RunReport<'a> {
    /// Source name prefixed to each violation line (normally the input path).
    pub source: &'a str,
    pub result: &'a RunResult,
    pub summary_enabled: bool,
}

/// Trait for rendering a run report into an output format.
pub trait ReportFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &RunReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
