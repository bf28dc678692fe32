//! Rubric evaluation.
//!
//! Holds the registered checks and runs them against a document view and a
//! stylesheet view.
//!
//! # Graceful Degradation
//!
//! This module handles errors gracefully:
//! - Predicate fault: recorded as a failed result with a generic diagnostic
//! - Predicate panic: caught via std::panic::catch_unwind, recorded the same way
//! - Failed check: never stops the run, every selected check is evaluated
//! - Unknown check ID: silently ignored by `Selection::Only` and `Selection::Excluding`
//! - Empty selection: returns an empty aggregate (not an error)
//!
//! Results are always recorded in check declaration order.

use crate::artifact::{DocumentView, HtmlDocument, StyleRules, Stylesheet};
use crate::engine::result::Aggregate;
use crate::{CheckFamily, CheckFault, CheckResult, Outcome};
use std::panic::{self, AssertUnwindSafe};

/// Message recorded when a predicate could not be evaluated
pub const FAULT_MESSAGE: &str = "Check could not be evaluated (internal error)";

/// Predicate over the document and stylesheet views
pub type Predicate =
    Box<dyn Fn(&dyn DocumentView, &dyn StyleRules) -> Result<bool, CheckFault> + Send + Sync>;

/// A registered check with its predicate
pub struct RubricCheck {
    pub id: String,
    pub name: String,
    pub family: CheckFamily,
    pub description: String,
    pub failure_message: String,
    pub predicate: Predicate,
}

impl RubricCheck {
    pub fn new(
        id: &str,
        name: &str,
        family: CheckFamily,
        description: &str,
        failure_message: &str,
        predicate: impl Fn(&dyn DocumentView, &dyn StyleRules) -> Result<bool, CheckFault>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        RubricCheck {
            id: id.to_string(),
            name: name.to_string(),
            family,
            description: description.to_string(),
            failure_message: failure_message.to_string(),
            predicate: Box::new(predicate),
        }
    }
}

impl std::fmt::Debug for RubricCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RubricCheck")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

/// Which registered checks a run evaluates
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Families(Vec<CheckFamily>),
    Only(Vec<String>),
    Excluding(Vec<String>),
}

impl Selection {
    fn includes(&self, check: &RubricCheck) -> bool {
        match self {
            Selection::All => true,
            Selection::Families(families) => families.contains(&check.family),
            Selection::Only(ids) => ids.iter().any(|id| id == &check.id),
            Selection::Excluding(ids) => !ids.iter().any(|id| id == &check.id),
        }
    }
}

/// Rubric evaluator
#[derive(Debug, Default)]
pub struct RubricEvaluator {
    checks: Vec<RubricCheck>,
}

impl RubricEvaluator {
    /// Create an evaluator with no checks registered
    pub fn new() -> Self {
        RubricEvaluator { checks: Vec::new() }
    }

    /// Create an evaluator with the lab rubric registered
    pub fn with_rubric() -> Self {
        let mut evaluator = Self::new();
        evaluator.register_checks(crate::checks::rubric());
        evaluator
    }

    /// Register checks for execution
    pub fn register_checks(&mut self, checks: Vec<RubricCheck>) {
        self.checks.extend(checks);
    }

    /// Register a single check
    pub fn register_check(&mut self, check: RubricCheck) {
        self.checks.push(check);
    }

    /// Registered checks in declaration order
    pub fn checks(&self) -> &[RubricCheck] {
        &self.checks
    }

    /// Parse `markup` once and run every registered check
    pub fn evaluate(&self, markup: &str, stylesheet: &str) -> Aggregate {
        self.evaluate_selected(markup, stylesheet, &Selection::All)
    }

    /// Parse `markup` once and run the selected checks
    pub fn evaluate_selected(&self, markup: &str, stylesheet: &str, selection: &Selection) -> Aggregate {
        let document = HtmlDocument::parse(markup);
        let styles = Stylesheet::new(stylesheet);
        self.run(&document, &styles, selection)
    }

    /// Run every registered check against injected views
    pub fn evaluate_with(&self, document: &dyn DocumentView, styles: &dyn StyleRules) -> Aggregate {
        self.run(document, styles, &Selection::All)
    }

    /// Run the selected checks against injected views
    pub fn run(&self, document: &dyn DocumentView, styles: &dyn StyleRules, selection: &Selection) -> Aggregate {
        let mut aggregate = Aggregate::new();

        for check in self.checks.iter().filter(|c| selection.includes(c)) {
            let result = Self::execute_check(check, document, styles);
            tracing::debug!(id = %result.id, outcome = %result.outcome, "check evaluated");
            aggregate.record(result);
        }

        tracing::info!(
            total = aggregate.total(),
            passed = aggregate.passed(),
            failed = aggregate.failed(),
            "rubric run complete"
        );
        aggregate
    }

    /// Evaluate a single check, absorbing faults and panics
    fn execute_check(check: &RubricCheck, document: &dyn DocumentView, styles: &dyn StyleRules) -> CheckResult {
        let evaluated = panic::catch_unwind(AssertUnwindSafe(|| (check.predicate)(document, styles)))
            .unwrap_or_else(|payload| Err(CheckFault::Panicked(panic_message(payload.as_ref()))));

        let (outcome, message) = match evaluated {
            Ok(true) => (Outcome::Passed, check.name.clone()),
            Ok(false) => (Outcome::Failed, check.failure_message.clone()),
            Err(fault) => {
                tracing::warn!(id = %check.id, %fault, "check faulted");
                (Outcome::Failed, FAULT_MESSAGE.to_string())
            }
        };

        CheckResult {
            id: check.id.clone(),
            name: check.name.clone(),
            family: check.family,
            outcome,
            message,
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
