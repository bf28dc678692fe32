//! Result aggregation.
//!
//! Collects check results, computes summary statistics, and supports comparison
//! against a baseline report.

use crate::{CheckFamily, CheckResult, Outcome, RubricError};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Result summary statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSummary {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    /// Percentage of passed checks, None when no checks ran
    pub success_rate: Option<f64>,
}

/// Accumulated results of one rubric run.
///
/// Grows by exactly one result per evaluated check; the counters always satisfy
/// `total == passed + failed == results.len()`.
#[derive(Debug, Clone)]
pub struct Aggregate {
    evaluated_at: DateTime<Local>,
    total: u32,
    passed: u32,
    failed: u32,
    results: Vec<CheckResult>,
}

impl Aggregate {
    /// Create an empty aggregate stamped with the current time
    pub fn new() -> Self {
        Self::with_timestamp(Local::now())
    }

    pub fn with_timestamp(evaluated_at: DateTime<Local>) -> Self {
        Aggregate {
            evaluated_at,
            total: 0,
            passed: 0,
            failed: 0,
            results: Vec::new(),
        }
    }

    /// Build an aggregate from results already in declaration order
    pub fn from_results(evaluated_at: DateTime<Local>, results: Vec<CheckResult>) -> Self {
        let mut aggregate = Self::with_timestamp(evaluated_at);
        for result in results {
            aggregate.record(result);
        }
        aggregate
    }

    /// Add a completed check result
    pub fn record(&mut self, result: CheckResult) {
        self.total += 1;
        match result.outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed => self.failed += 1,
        }
        self.results.push(result);
    }

    pub fn evaluated_at(&self) -> DateTime<Local> {
        self.evaluated_at
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn passed(&self) -> u32 {
        self.passed
    }

    pub fn failed(&self) -> u32 {
        self.failed
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Check if there are any failures
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Percentage of passed checks.
    pub fn success_rate(&self) -> Result<f64, RubricError> {
        if self.total == 0 {
            return Err(RubricError::DivisionUndefined);
        }
        Ok(f64::from(self.passed) / f64::from(self.total) * 100.0)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ResultSummary {
        ResultSummary {
            total: self.total,
            passed: self.passed,
            failed: self.failed,
            success_rate: self.success_rate().ok(),
        }
    }

    /// Get results of one family
    pub fn by_family(&self, family: CheckFamily) -> Vec<&CheckResult> {
        self.results.iter().filter(|r| r.family == family).collect()
    }

    /// Get only failed results
    pub fn failures(&self) -> Vec<&CheckResult> {
        self.results.iter().filter(|r| r.is_failed()).collect()
    }

    /// Compare against a baseline report
    pub fn compare_to_baseline(&self, baseline: &BaselineReport) -> Comparison {
        let mut comparison = Comparison::default();

        let baseline_outcomes: HashMap<&str, Outcome> = baseline
            .results
            .iter()
            .map(|r| (r.id.as_str(), r.outcome))
            .collect();

        for result in &self.results {
            match (baseline_outcomes.get(result.id.as_str()), result.outcome) {
                (Some(Outcome::Passed), Outcome::Failed) => {
                    comparison.regressions.push(result.id.clone());
                }
                (Some(Outcome::Failed), Outcome::Passed) => {
                    comparison.resolved.push(result.id.clone());
                }
                (None, Outcome::Failed) => {
                    comparison.new_failures.push(result.id.clone());
                }
                _ => {
                    comparison.unchanged.push(result.id.clone());
                }
            }
        }

        comparison
    }
}

impl Default for Aggregate {
    fn default() -> Self {
        Self::new()
    }
}

/// A previous run, as written by the JSON formatter
#[derive(Debug, Clone, Deserialize)]
pub struct BaselineReport {
    pub results: Vec<CheckResult>,
}

/// Baseline comparison result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    pub regressions: Vec<String>,
    pub resolved: Vec<String>,
    pub new_failures: Vec<String>,
    pub unchanged: Vec<String>,
}

impl Comparison {
    pub fn has_regressions(&self) -> bool {
        !self.regressions.is_empty() || !self.new_failures.is_empty()
    }
}

/// Load a baseline from a JSON report
pub fn load_baseline(path: &Path) -> Result<BaselineReport, RubricError> {
    let content = crate::artifact::read_text("baseline", path)?;

    serde_json::from_str(&content).map_err(|e| RubricError::ParseError {
        artifact: "baseline",
        message: e.to_string(),
    })
}
