//! Artifact loading and report writing tests.
//!
//! Exercises the filesystem edges: lab layout detection, unreadable inputs,
//! report destinations and baselines.

use crate::fixtures::*;
use lab_rubric::artifact::{self, ArtifactPaths, LabLayout, MARKUP_FILE, STYLESHEET_FILE};
use lab_rubric::engine::orchestrator::RubricEvaluator;
use lab_rubric::engine::result::load_baseline;
use lab_rubric::report::json::JsonFormatter;
use lab_rubric::report::{html, ReportFormatter};
use lab_rubric::RubricError;
use std::fs;
use tempfile::TempDir;

fn lab_with(markup: &[u8], stylesheet: Option<&[u8]>) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(MARKUP_FILE), markup).unwrap();
    if let Some(css) = stylesheet {
        fs::write(dir.path().join(STYLESHEET_FILE), css).unwrap();
    }
    dir
}

#[test]
fn test_load_reads_both_artifacts() {
    let dir = lab_with(
        PASSING_MARKUP.as_bytes(),
        Some(PASSING_STYLESHEET.as_bytes()),
    );

    let artifacts = artifact::load(&ArtifactPaths::in_lab_dir(dir.path())).unwrap();

    assert_eq!(artifacts.markup, PASSING_MARKUP);
    assert_eq!(artifacts.stylesheet, PASSING_STYLESHEET);
}

#[test]
fn test_missing_stylesheet_is_input_unavailable() {
    let dir = lab_with(PASSING_MARKUP.as_bytes(), None);

    let err = artifact::load(&ArtifactPaths::in_lab_dir(dir.path())).unwrap_err();

    match err {
        RubricError::InputUnavailable { artifact, path, .. } => {
            assert_eq!(artifact, "stylesheet");
            assert_eq!(path, dir.path().join(STYLESHEET_FILE));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_non_utf8_markup_is_parse_error() {
    let dir = lab_with(&[0x3c, 0x68, 0x31, 0xff, 0xfe], Some(b"body {}"));

    let err = artifact::load(&ArtifactPaths::in_lab_dir(dir.path())).unwrap_err();

    assert!(matches!(
        err,
        RubricError::ParseError {
            artifact: "markup",
            ..
        }
    ));
}

#[test]
fn test_override_paths_are_read() {
    let dir = lab_with(b"<h1>Weather</h1>", Some(b""));
    let other_css = dir.path().join("theme.css");
    fs::write(&other_css, PASSING_STYLESHEET).unwrap();

    let paths = ArtifactPaths::in_lab_dir(dir.path()).with_overrides(None, Some(&other_css));
    let artifacts = artifact::load(&paths).unwrap();

    assert_eq!(artifacts.stylesheet, PASSING_STYLESHEET);
}

#[test]
fn test_detect_from_project_root() {
    let root = TempDir::new().unwrap();
    let lab = root.path().join("lab");
    fs::create_dir_all(&lab).unwrap();
    fs::write(lab.join(MARKUP_FILE), PASSING_MARKUP).unwrap();

    let layout = LabLayout::detect(root.path());

    assert_eq!(layout.lab_dir, lab);
    assert_eq!(layout.report_path, lab.join("tests").join("test-results.html"));
}

#[test]
fn test_detect_from_tests_directory() {
    let tests_dir = TempDir::new().unwrap();

    let layout = LabLayout::detect(tests_dir.path());

    assert_eq!(layout.lab_dir, tests_dir.path().join(".."));
    assert_eq!(layout.report_path, tests_dir.path().join("test-results.html"));
}

#[test]
fn test_write_report_creates_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lab").join("tests").join("test-results.html");
    let aggregate = RubricEvaluator::with_rubric().evaluate(PASSING_MARKUP, PASSING_STYLESHEET);

    html::write_report(&aggregate, &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, html::render(&aggregate));
    assert!(written.contains("Congratulations"));
}

#[test]
fn test_write_report_into_file_fails() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let err = html::write_report(
        &RubricEvaluator::new().evaluate("", ""),
        &blocker.join("report.html"),
    )
    .unwrap_err();

    assert!(matches!(err, RubricError::ReportWrite { .. }));
}

#[test]
fn test_baseline_from_json_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("baseline.json");
    let css = without(PASSING_STYLESHEET, "cursor: pointer;", "");
    let before = RubricEvaluator::with_rubric().evaluate(PASSING_MARKUP, &css);
    fs::write(&path, JsonFormatter::new(true).format(&before).unwrap()).unwrap();

    let baseline = load_baseline(&path).unwrap();
    let after = RubricEvaluator::with_rubric().evaluate(PASSING_MARKUP, PASSING_STYLESHEET);
    let comparison = after.compare_to_baseline(&baseline);

    assert_eq!(baseline.results.len(), RUBRIC_SIZE as usize);
    assert_eq!(comparison.resolved, vec!["CSS-010", "INT-002"]);
    assert!(!comparison.has_regressions());
}

#[test]
fn test_corrupt_baseline_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("baseline.json");
    fs::write(&path, "{ \"results\": [").unwrap();

    assert!(matches!(
        load_baseline(&path),
        Err(RubricError::ParseError {
            artifact: "baseline",
            ..
        })
    ));
}

#[test]
fn test_missing_baseline_is_input_unavailable() {
    let dir = TempDir::new().unwrap();

    assert!(matches!(
        load_baseline(&dir.path().join("absent.json")),
        Err(RubricError::InputUnavailable { .. })
    ));
}
