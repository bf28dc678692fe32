//! Rubric engine module.
//!
//! Provides check evaluation and result aggregation.

pub mod orchestrator;
pub mod result;
