//! Report formatting for lab-rubric.
//!
//! Provides console, JSON, JUnit XML and HTML formatters over an [`Aggregate`].
//!
//! # Graceful Degradation
//!
//! - Empty aggregate: every formatter produces valid output; the success rate is
//!   reported as unavailable instead of dividing by zero
//! - Markup-significant characters in names or messages: escaped for XML/HTML
//! - Non-TTY output: color disabled via --no-color or NO_COLOR
//!
//! Formatting never mutates the aggregate, so a report can be rendered any number
//! of times from the same run.

pub mod html;
pub mod json;
pub mod junit;
pub mod summary;

pub use html::{render, HtmlFormatter};
pub use json::JsonFormatter;
pub use junit::JunitFormatter;
pub use summary::{summarize, SummaryText, TextFormatter};

use crate::cli::args::OutputFormat;
use crate::engine::result::Aggregate;
use crate::RubricError;

/// Trait for report formatters
pub trait ReportFormatter {
    /// Format an aggregate into a string
    fn format(&self, aggregate: &Aggregate) -> Result<String, RubricError>;
}

/// Get a formatter based on the output format
pub fn get_formatter(format: OutputFormat, color: bool, quiet: bool) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(color, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Junit => Box::new(JunitFormatter::new()),
        OutputFormat::Html => Box::new(HtmlFormatter::new()),
    }
}

/// Escape text for inclusion in XML or HTML content and attribute values
pub fn escape_markup(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            c => result.push(c),
        }
    }
    result
}
