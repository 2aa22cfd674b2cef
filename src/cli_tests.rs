use clap::Parser;

use super::*;
use crate::output::OutputFormat;

#[test]
fn parses_minimal_invocation() {
    let cli = Cli::try_parse_from(["tsv-guard", "data.tsv"]).unwrap();
    assert_eq!(cli.input, PathBuf::from("data.tsv"));
    assert!(cli.skip.is_empty());
    assert_eq!(cli.comment, None);
    assert_eq!(cli.encoding, "utf-8");
    assert!(!cli.summary);
    assert_eq!(cli.format, OutputFormat::Text);
    assert!(!cli.quiet);
}

#[test]
fn input_path_is_required() {
    assert!(Cli::try_parse_from(["tsv-guard"]).is_err());
}

#[test]
fn skip_is_repeatable() {
    let cli =
        Cli::try_parse_from(["tsv-guard", "data.tsv", "--skip", "E9", "-s", "E.*"]).unwrap();
    assert_eq!(cli.skip, vec!["E9", "E.*"]);
}

#[test]
fn comment_and_encoding_are_settable() {
    let cli = Cli::try_parse_from([
        "tsv-guard",
        "data.tsv",
        "--comment",
        "#",
        "--encoding",
        "latin1",
    ])
    .unwrap();
    assert_eq!(cli.comment.as_deref(), Some("#"));
    assert_eq!(cli.encoding, "latin1");
}

#[test]
fn summary_flag_toggles() {
    let cli = Cli::try_parse_from(["tsv-guard", "data.tsv", "--summary"]).unwrap();
    assert!(cli.summary);
}

#[test]
fn format_accepts_json() {
    let cli = Cli::try_parse_from(["tsv-guard", "data.tsv", "--format", "json"]).unwrap();
    assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn format_rejects_unknown_value() {
    assert!(Cli::try_parse_from(["tsv-guard", "data.tsv", "--format", "yaml"]).is_err());
}

#[test]
fn output_and_quiet_flags_parse() {
    let cli =
        Cli::try_parse_from(["tsv-guard", "data.tsv", "-o", "report.txt", "--quiet"]).unwrap();
    assert_eq!(cli.output, Some(PathBuf::from("report.txt")));
    assert!(cli.quiet);
}
