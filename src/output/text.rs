use std::fmt::Write;

use crate::error::Result;

use super::{ReportFormatter, RunReport};

/// Renders one position-tagged line per violation, followed by the optional
/// per-code summary block.
///
/// Violation lines use the `<source>:<line>:<column>: <code>: <message>`
/// layout. Summary entries appear in order of first occurrence in the
/// violation sequence.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut output = String::new();

        for violation in report.result.violations() {
            let _ = writeln!(
                output,
                "{}:{}:{}: {}: {}",
                report.source, violation.line, violation.column, violation.code, violation.message
            );
        }

        if report.summary_enabled {
            let summary = report.result.summary();
            if !summary.is_empty() {
                if !output.is_empty() {
                    output.push('\n');
                }
                output.push_str("Summary\n");
                for entry in &summary {
                    let _ = writeln!(output, "  {} ({}): {}", entry.name, entry.code, entry.count);
                }
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
