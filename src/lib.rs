//! lab-rubric library
//!
//! Structural conformance checker for HTML/CSS lab assignments.
//!
//! This library evaluates a fixed rubric of named checks against a page's markup
//! and stylesheet:
//! - Structure checks: selector queries against the parsed HTML document
//! - Style checks: block-local pattern matches against the raw stylesheet text
//! - Integration checks: composites of the two, mirroring the lab's acceptance suite
//! - Reporting: console summary, JSON, JUnit XML and a self-contained HTML report
//! - Baseline comparison against a previous JSON report
//!
//! # Example
//!
//! ```no_run
//! use lab_rubric::artifact::{self, ArtifactPaths};
//! use lab_rubric::{run_rubric, RubricConfig};
//!
//! let paths = ArtifactPaths::in_lab_dir("lab");
//! let artifacts = artifact::load(&paths).expect("artifacts unavailable");
//! let aggregate = run_rubric(&RubricConfig::default(), &artifacts);
//! println!("Checks passed: {}", aggregate.passed());
//! ```

pub mod artifact;
pub mod checks;
pub mod cli;
pub mod engine;
pub mod report;
pub mod version;

use artifact::Artifacts;
use cli::args::CheckOptions;
use engine::orchestrator::{RubricEvaluator, Selection};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// Re-exports for public API
pub use engine::orchestrator::RubricEvaluator as Evaluator;
pub use engine::result::{Aggregate, ResultSummary};

/// Outcome of a single check evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Passed => write!(f, "passed"),
            Outcome::Failed => write!(f, "failed"),
        }
    }
}

/// Check family for grouping related checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CheckFamily {
    /// Markup structure checks (selector queries on the parsed document)
    Structure,
    /// Stylesheet checks (block-local pattern matches)
    Style,
    /// Composite checks spanning markup and stylesheet
    Integration,
}

impl CheckFamily {
    /// All families in report order
    pub const ALL: [CheckFamily; 3] = [
        CheckFamily::Structure,
        CheckFamily::Style,
        CheckFamily::Integration,
    ];

    /// Lowercase identifier used in JSON, JUnit and on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            CheckFamily::Structure => "structure",
            CheckFamily::Style => "style",
            CheckFamily::Integration => "integration",
        }
    }
}

impl fmt::Display for CheckFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckFamily::Structure => write!(f, "HTML Structure"),
            CheckFamily::Style => write!(f, "CSS Styling"),
            CheckFamily::Integration => write!(f, "Integration"),
        }
    }
}

/// The recorded result of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Stable identifier (e.g., "CSS-004")
    pub id: String,
    /// Human-readable name, unique within a run
    pub name: String,
    pub family: CheckFamily,
    pub outcome: Outcome,
    /// Check name when passed, failure message (or fault diagnostic) when failed
    pub message: String,
}

impl CheckResult {
    pub fn is_passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }

    pub fn is_failed(&self) -> bool {
        self.outcome == Outcome::Failed
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Passed => write!(f, "PASS: {}", self.name),
            Outcome::Failed => write!(f, "FAIL: {} ({})", self.name, self.message),
        }
    }
}

/// A fault raised while evaluating a single check predicate.
///
/// Faults never abort a run; the evaluator records the check as failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckFault {
    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("check panicked: {0}")]
    Panicked(String),
}

/// Error types for lab-rubric operations.
#[derive(Debug, Error)]
pub enum RubricError {
    /// An input artifact could not be read
    #[error("{artifact} unavailable at {path:?}")]
    InputUnavailable {
        artifact: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An input artifact could not be decoded
    #[error("Parse error in {artifact}: {message}")]
    ParseError {
        artifact: &'static str,
        message: String,
    },
    /// Success rate requested for a run with no checks
    #[error("success rate is undefined for a run with no checks")]
    DivisionUndefined,
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    /// A rendered report could not be written
    #[error("failed to write report to {path:?}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Exit status of a completed run, failed checks included
pub const EXIT_OK: u8 = 0;
/// Exit status of a strict run with at least one failed check
pub const EXIT_CHECKS_FAILED: u8 = 1;
/// Exit status for unusable input, bad arguments or an unwritable report
pub const EXIT_RUNTIME_ERROR: u8 = 3;

/// Configuration for a rubric run.
#[derive(Debug, Clone, Default)]
pub struct RubricConfig {
    /// Families to run (None = all)
    pub families: Option<Vec<CheckFamily>>,
    /// Specific checks to skip (by ID)
    pub skip_checks: Vec<String>,
    /// Specific checks to run (by ID)
    pub only_checks: Vec<String>,
    /// Treat failed checks as a failing exit status
    pub strict: bool,
}

impl RubricConfig {
    /// Create configuration from command line options
    pub fn from_args(options: &CheckOptions) -> Self {
        let families = if options.family.is_empty() {
            None
        } else {
            Some(options.family.clone())
        };

        RubricConfig {
            families,
            skip_checks: options.skip.clone(),
            only_checks: options.only.clone(),
            strict: options.strict,
        }
    }

    /// Process exit status for a completed run. Failed checks only count in strict mode.
    pub fn exit_status(&self, aggregate: &Aggregate) -> u8 {
        if self.strict && aggregate.has_failures() {
            EXIT_CHECKS_FAILED
        } else {
            EXIT_OK
        }
    }

    /// Which checks this configuration selects. `only` wins over `skip`, which
    /// wins over the family filter.
    pub fn selection(&self) -> Selection {
        if !self.only_checks.is_empty() {
            Selection::Only(self.only_checks.clone())
        } else if !self.skip_checks.is_empty() {
            Selection::Excluding(self.skip_checks.clone())
        } else {
            match self.families {
                Some(ref families) if !families.is_empty() => {
                    Selection::Families(families.clone())
                }
                _ => Selection::All,
            }
        }
    }
}

/// Run the rubric against loaded artifacts.
///
/// This is the main entry point: the markup is parsed once, every selected check
/// is evaluated in declaration order and the resulting [`Aggregate`] is returned.
/// Individual check faults are absorbed into failed results, so this never fails.
///
/// # Example
///
/// ```
/// use lab_rubric::artifact::Artifacts;
/// use lab_rubric::{run_rubric, CheckFamily, RubricConfig};
///
/// let artifacts = Artifacts {
///     markup: "<main><h1>Weather</h1></main>".to_string(),
///     stylesheet: "body { display: flex; }".to_string(),
/// };
/// let config = RubricConfig {
///     families: Some(vec![CheckFamily::Structure]),
///     ..Default::default()
/// };
///
/// let aggregate = run_rubric(&config, &artifacts);
/// assert_eq!(aggregate.total(), aggregate.passed() + aggregate.failed());
/// ```
pub fn run_rubric(config: &RubricConfig, artifacts: &Artifacts) -> Aggregate {
    let evaluator = RubricEvaluator::with_rubric();
    evaluator.evaluate_selected(&artifacts.markup, &artifacts.stylesheet, &config.selection())
}
