//! Console summary.

use crate::engine::result::{Aggregate, Comparison};
use crate::report::ReportFormatter;
use crate::{Outcome, RubricError};
use std::fmt;

const RULE_WIDTH: usize = 50;

/// Totals of a run ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryText {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    /// Success rate with one decimal and a percent sign, None when no checks ran
    pub rate: Option<String>,
}

impl fmt::Display for SummaryText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{}", rule)?;
        writeln!(f, "TEST RESULTS SUMMARY")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Total Tests: {}", self.total)?;
        writeln!(f, "Passed: {}", self.passed)?;
        writeln!(f, "Failed: {}", self.failed)?;
        match self.rate {
            Some(ref rate) => writeln!(f, "Success Rate: {}", rate)?,
            None => writeln!(f, "Success Rate: n/a (no checks run)")?,
        }
        write!(f, "{}", rule)
    }
}

/// Summarize an aggregate. A run without checks yields a degenerate summary.
pub fn summarize(aggregate: &Aggregate) -> SummaryText {
    let rate = match aggregate.success_rate() {
        Ok(rate) => Some(format!("{:.1}%", rate)),
        Err(RubricError::DivisionUndefined) => None,
        Err(e) => {
            tracing::warn!(error = %e, "success rate unavailable");
            None
        }
    };

    SummaryText {
        total: aggregate.total(),
        passed: aggregate.passed(),
        failed: aggregate.failed(),
        rate,
    }
}

/// Console formatter: one line per check, then the summary
pub struct TextFormatter {
    color: bool,
    quiet: bool,
}

impl TextFormatter {
    pub fn new(color: bool, quiet: bool) -> Self {
        TextFormatter { color, quiet }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, aggregate: &Aggregate) -> Result<String, RubricError> {
        let mut output = String::new();

        for result in aggregate.results() {
            match result.outcome {
                Outcome::Passed => {
                    if self.quiet {
                        continue;
                    }
                    output.push_str(&format!("✅ {}\n", self.colorize(&result.name, "32")));
                }
                Outcome::Failed => {
                    output.push_str(&format!(
                        "❌ {}: {}\n",
                        self.colorize(&result.name, "31"),
                        result.message
                    ));
                }
            }
        }

        output.push('\n');
        output.push_str(&summarize(aggregate).to_string());
        Ok(output)
    }
}

/// Describe the differences to a baseline run
pub fn format_comparison(comparison: &Comparison) -> String {
    let mut output = String::from("BASELINE COMPARISON\n");

    let sections = [
        ("Regressions", &comparison.regressions),
        ("New failures", &comparison.new_failures),
        ("Resolved", &comparison.resolved),
    ];
    for (label, ids) in sections {
        if ids.is_empty() {
            output.push_str(&format!("{}: none\n", label));
        } else {
            output.push_str(&format!("{}: {}\n", label, ids.join(", ")));
        }
    }
    output.push_str(&format!("Unchanged: {}", comparison.unchanged.len()));

    output
}
