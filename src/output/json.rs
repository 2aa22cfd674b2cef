use serde::Serialize;

use crate::checks::Violation;
use crate::engine::SummaryEntry;
use crate::error::Result;

use super::{ReportFormatter, RunReport};

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    violations: &'a [Violation],
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<Vec<SummaryEntry>>,
}

/// Serializes the run report as pretty-printed JSON.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let json = serde_json::to_string_pretty(&JsonReport {
            source: report.source,
            violations: report.result.violations(),
            summary: report.summary_enabled.then(|| report.result.summary()),
        })?;
        Ok(format!("{json}\n"))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
