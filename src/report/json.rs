//! JSON output
//!
//! The document doubles as a baseline for `--baseline` comparisons.

use crate::engine::result::{Aggregate, ResultSummary};
use crate::report::ReportFormatter;
use crate::{CheckResult, RubricError};
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    evaluated_at: DateTime<Local>,
    summary: ResultSummary,
    results: &'a [CheckResult],
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, aggregate: &Aggregate) -> Result<String, RubricError> {
        let report = JsonReport {
            evaluated_at: aggregate.evaluated_at(),
            summary: aggregate.summary(),
            results: aggregate.results(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        Ok(json)
    }
}
