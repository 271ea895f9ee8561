//! Additional tests for the CLI and format types

#![cfg(feature = "cli")]

use chatstats::cli::{Args, OutputFormat as CliFormat};
use chatstats::format::OutputFormat;
use clap::Parser;
use std::str::FromStr;

#[test]
fn test_format_from_str_all_variants() {
    assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str("pretty").unwrap(), OutputFormat::Pretty);
    assert_eq!(OutputFormat::from_str("Text").unwrap(), OutputFormat::Pretty);
    assert_eq!(OutputFormat::from_str("txt").unwrap(), OutputFormat::Pretty);
}

#[test]
fn test_format_from_str_error_lists_names() {
    let err = OutputFormat::from_str("yaml").unwrap_err();
    assert!(err.contains("yaml"));
    for name in OutputFormat::all_names() {
        assert!(err.contains(name));
    }
}

#[test]
fn test_every_format_round_trips_through_display() {
    for format in OutputFormat::all() {
        let parsed = OutputFormat::from_str(&format.to_string()).unwrap();
        assert_eq!(parsed, *format);
    }
}

#[test]
fn test_cli_format_converts_to_library_format() {
    assert_eq!(OutputFormat::from(CliFormat::Json), OutputFormat::Json);
    assert_eq!(OutputFormat::from(CliFormat::Pretty), OutputFormat::Pretty);
    assert_eq!(CliFormat::default(), CliFormat::Json);
}

#[test]
fn test_args_missing_transcript() {
    assert!(Args::try_parse_from(["chatstats"]).is_err());
}

#[test]
fn test_args_long_flags() {
    let args = Args::try_parse_from([
        "chatstats",
        "_chat.txt",
        "--numbers",
        "numbers.json",
        "--format",
        "txt",
        "--output",
        "report.txt",
        "--workers",
        "0",
        "--quiet",
    ])
    .unwrap();

    assert_eq!(args.format, Some(CliFormat::Pretty));
    assert_eq!(args.output_format(), OutputFormat::Pretty);
    assert!(args.quiet);
    assert_eq!(args.stats_config().workers, 0);
    assert_eq!(args.stats_config().top_limit, 3);
}

#[test]
fn test_args_rejects_negative_workers() {
    assert!(Args::try_parse_from(["chatstats", "_chat.txt", "-w", "-1"]).is_err());
}
