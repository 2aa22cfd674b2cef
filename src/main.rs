use std::fs;
use std::path::Path;

use clap::Parser;

use tsv_guard::checks::CheckRegistry;
use tsv_guard::cli::Cli;
use tsv_guard::engine::ValidationEngine;
use tsv_guard::output::{
    JsonFormatter, OutputFormat, ReportFormatter, RunReport, TextFormatter,
};
use tsv_guard::{selector, source};
use tsv_guard::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> tsv_guard::Result<i32> {
    // 1. Resolve the active check set. Filter problems are fatal and must
    //    surface before any file processing.
    let registry = CheckRegistry::new();
    let active = selector::select(&registry, &cli.skip)?;

    // 2. Read and decode the input
    let lines = source::read_lines(&cli.input, &cli.encoding)?;

    // 3. Run the engine
    let engine = ValidationEngine::new(active, cli.comment.clone());
    let result = engine.run(&lines);

    // 4. Format report
    let source_name = cli.input.display().to_string();
    let report = RunReport {
        source: &source_name,
        result: &result,
        summary_enabled: cli.summary,
    };
    let output = format_report(cli.format, &report)?;

    // 5. Write output
    write_output(cli.output.as_deref(), &output, cli.quiet)?;

    // 6. Determine exit code
    if result.is_clean() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_VIOLATIONS_FOUND)
    }
}

fn format_report(format: OutputFormat, report: &RunReport) -> tsv_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter.format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> tsv_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
