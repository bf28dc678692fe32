//! CLI integration tests.
//!
//! Tests for argument parsing and how options become a rubric selection.

use clap::Parser;
use lab_rubric::cli::args::{Cli, Command, OutputFormat};
use lab_rubric::engine::orchestrator::Selection;
use lab_rubric::{CheckFamily, RubricConfig};
use std::path::PathBuf;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("lab-rubric").chain(args.iter().copied())).unwrap()
}

fn config(args: &[&str]) -> RubricConfig {
    RubricConfig::from_args(&parse(args).options)
}

#[test]
fn test_version_command() {
    assert_eq!(parse(&["version"]).command(), Command::Version);
}

#[test]
fn test_check_command() {
    assert_eq!(parse(&["check"]).command(), Command::Check);
}

#[test]
fn test_path_options() {
    let cli = parse(&[
        "--lab-dir",
        "labs/weather",
        "--markup",
        "page.html",
        "--stylesheet",
        "page.css",
    ]);
    assert_eq!(cli.options.lab_dir, Some(PathBuf::from("labs/weather")));
    assert_eq!(cli.options.markup, Some(PathBuf::from("page.html")));
    assert_eq!(cli.options.stylesheet, Some(PathBuf::from("page.css")));
}

#[test]
fn test_report_options() {
    let cli = parse(&["--html", "--html-report", "out/report.html", "--baseline", "prev.json"]);
    assert!(cli.options.html);
    assert_eq!(cli.options.html_report, Some(PathBuf::from("out/report.html")));
    assert_eq!(cli.options.baseline, Some(PathBuf::from("prev.json")));
}

#[test]
fn test_format_values() {
    assert_eq!(parse(&["--format", "junit"]).options.format, OutputFormat::Junit);
    assert_eq!(parse(&["--format", "html"]).options.format, OutputFormat::Html);
}

#[test]
fn test_short_flags() {
    let cli = parse(&["-q", "-v"]);
    assert!(cli.options.quiet);
    assert!(cli.options.verbose);
}

#[test]
fn test_strict_flag() {
    assert!(config(&["--strict"]).strict);
}

#[test]
fn test_unknown_family_rejected() {
    assert!(Cli::try_parse_from(["lab-rubric", "--family", "javascript"]).is_err());
}

#[test]
fn test_unknown_subcommand_rejected() {
    assert!(Cli::try_parse_from(["lab-rubric", "audit"]).is_err());
}

#[test]
fn test_default_selection_is_all() {
    assert_eq!(config(&[]).selection(), Selection::All);
}

#[test]
fn test_family_selection() {
    assert_eq!(
        config(&["--family", "style"]).selection(),
        Selection::Families(vec![CheckFamily::Style])
    );
}

#[test]
fn test_skip_overrides_family() {
    assert_eq!(
        config(&["--family", "style", "--skip", "CSS-001"]).selection(),
        Selection::Excluding(vec!["CSS-001".to_string()])
    );
}

#[test]
fn test_only_overrides_skip() {
    assert_eq!(
        config(&["--skip", "CSS-001", "--only", "HTML-002", "--only", "HTML-003"]).selection(),
        Selection::Only(vec!["HTML-002".to_string(), "HTML-003".to_string()])
    );
}
