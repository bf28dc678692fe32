//! End-to-end tests of the `lab-rubric` binary.
//!
//! Exit status, input failures and report destinations, run against a lab laid out
//! in a temporary project directory.

use crate::fixtures::*;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// A project root holding `lab/index.html` and `lab/style.css`
fn project(markup: &str, stylesheet: &str) -> TempDir {
    let root = TempDir::new().unwrap();
    let lab = root.path().join("lab");
    fs::create_dir_all(&lab).unwrap();
    fs::write(lab.join("index.html"), markup).unwrap();
    fs::write(lab.join("style.css"), stylesheet).unwrap();
    root
}

fn failing_project() -> TempDir {
    project("<h1>Weather</h1>", "body { display: flex; }")
}

fn run(root: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_lab-rubric"));
    command
        .current_dir(root)
        .args(args)
        .env_remove("LAB_RUBRIC_STRICT")
        .env_remove("LAB_RUBRIC_FORMAT")
        .env_remove("LAB_RUBRIC_LAB_DIR")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_passing_lab_exits_zero() {
    let root = project(PASSING_MARKUP, PASSING_STYLESHEET);

    let output = run(root.path(), &[], &[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Success Rate: 100.0%"));
}

#[test]
fn test_failed_checks_exit_zero_without_strict() {
    let root = failing_project();

    let output = run(root.path(), &[], &[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("❌"));
}

#[test]
fn test_strict_flag_exits_one_on_failures() {
    let root = failing_project();

    assert_eq!(run(root.path(), &["--strict"], &[]).status.code(), Some(1));
}

#[test]
fn test_strict_from_environment() {
    let root = failing_project();

    let output = run(root.path(), &[], &[("LAB_RUBRIC_STRICT", "1")]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_strict_passing_lab_exits_zero() {
    let root = project(PASSING_MARKUP, PASSING_STYLESHEET);

    assert_eq!(run(root.path(), &["--strict"], &[]).status.code(), Some(0));
}

#[test]
fn test_missing_baseline_stops_before_evaluation() {
    let root = failing_project();

    let output = run(root.path(), &["--html", "--baseline", "missing.json"], &[]);

    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).is_empty());
    assert!(!root.path().join("lab/tests/test-results.html").exists());
    assert_eq!(stderr(&output).matches("os error").count(), 1);
}

#[test]
fn test_missing_stylesheet_exits_three() {
    let root = failing_project();
    fs::remove_file(root.path().join("lab/style.css")).unwrap();

    let output = run(root.path(), &[], &[]);

    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("stylesheet unavailable"));
}

#[test]
fn test_bad_argument_exits_three() {
    let root = failing_project();

    assert_eq!(run(root.path(), &["--format", "yaml"], &[]).status.code(), Some(3));
}

#[test]
fn test_html_written_to_default_destination() {
    let root = project(PASSING_MARKUP, PASSING_STYLESHEET);

    let output = run(root.path(), &["--html"], &[]);

    assert_eq!(output.status.code(), Some(0));
    let report = fs::read_to_string(root.path().join("lab/tests/test-results.html")).unwrap();
    assert!(report.contains("Congratulations"));
    assert!(stdout(&output).contains("Test results page generated"));
}

#[test]
fn test_baseline_comparison_printed() {
    let root = failing_project();
    let baseline = root.path().join("baseline.json");
    let json = run(root.path(), &["--format", "json"], &[]);
    fs::write(&baseline, &json.stdout).unwrap();

    let output = run(root.path(), &["--baseline", "baseline.json"], &[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Regressions: none"));
}

#[test]
fn test_log_output_has_no_ansi_escapes() {
    let root = failing_project();

    let output = run(root.path(), &["--verbose"], &[]);

    assert!(!stderr(&output).is_empty());
    assert!(!stderr(&output).contains('\x1b'));
}
