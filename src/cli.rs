use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "tsv-guard")]
#[command(author, version, about = "TSV validator - gate tab-separated files on structural rules")]
#[command(long_about = "Validates a TSV file against a fixed catalogue of structural and \
    encoding rules.\n\n\
    Exit codes:\n  \
    0 - No violations found\n  \
    1 - Violations found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Path to the TSV file to validate
    pub input: PathBuf,

    /// Skip checks by exact code or regex (can be specified multiple times)
    #[arg(long, short = 's', value_name = "CODE_OR_REGEX")]
    pub skip: Vec<String>,

    /// Lines starting with this prefix are ignored by per-line checks
    #[arg(long, value_name = "PREFIX")]
    pub comment: Option<String>,

    /// Text encoding used to read the file
    #[arg(long, default_value = "utf-8", value_name = "NAME")]
    pub encoding: String,

    /// Emit an aggregated per-code summary after the violation list
    #[arg(long)]
    pub summary: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write report to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress the report (exit status still reflects violations)
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
