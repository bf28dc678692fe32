//! Rubric check modules.
//!
//! This module contains the lab rubric organized by family:
//! - Structure: markup queries (HTML-001 through HTML-008)
//! - Style: block-local stylesheet matches (CSS-001 through CSS-015)
//! - Integration: composite acceptance checks (INT-001, INT-002)
//!
//! The order returned by [`rubric`] is the declaration order that every report
//! follows.
//!
//! # Graceful Degradation
//!
//! Predicates never panic on their own. Query problems (an invalid selector or
//! pattern) are returned as `CheckFault` and recorded by the evaluator as a failed
//! result, so one malformed check never hides the rest of the report.

pub mod integration;
pub mod structure;
pub mod style;

use crate::engine::orchestrator::RubricCheck;
use crate::CheckFamily;

/// The full rubric in declaration order
pub fn rubric() -> Vec<RubricCheck> {
    let mut checks = Vec::new();
    checks.extend(structure::structure_checks());
    checks.extend(style::style_checks());
    checks.extend(integration::integration_checks());
    checks
}

/// Get checks for a specific family
pub fn checks_in_family(family: CheckFamily) -> Vec<RubricCheck> {
    match family {
        CheckFamily::Structure => structure::structure_checks(),
        CheckFamily::Style => style::style_checks(),
        CheckFamily::Integration => integration::integration_checks(),
    }
}
