//! JUnit XML output, one test suite per check family.

use crate::engine::result::Aggregate;
use crate::report::{escape_markup, ReportFormatter};
use crate::{CheckFamily, Outcome, RubricError};

/// JUnit XML formatter
#[derive(Debug, Default)]
pub struct JunitFormatter;

impl JunitFormatter {
    pub fn new() -> Self {
        JunitFormatter
    }
}

impl ReportFormatter for JunitFormatter {
    fn format(&self, aggregate: &Aggregate) -> Result<String, RubricError> {
        let mut output = String::new();
        output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        output.push_str(&format!(
            "<testsuites name=\"lab-rubric\" tests=\"{}\" failures=\"{}\" errors=\"0\" timestamp=\"{}\">\n",
            aggregate.total(),
            aggregate.failed(),
            aggregate.evaluated_at().format("%Y-%m-%dT%H:%M:%S")
        ));

        for family in CheckFamily::ALL {
            let results = aggregate.by_family(family);
            if results.is_empty() {
                continue;
            }

            let failures = results.iter().filter(|r| r.is_failed()).count();
            output.push_str(&format!(
                "  <testsuite name=\"{}\" tests=\"{}\" failures=\"{}\" errors=\"0\">\n",
                family.slug(),
                results.len(),
                failures
            ));

            for result in results {
                output.push_str(&format!(
                    "    <testcase name=\"{}\" classname=\"lab-rubric.{}\"",
                    escape_markup(&result.name),
                    family.slug()
                ));

                match result.outcome {
                    Outcome::Passed => output.push_str(" />\n"),
                    Outcome::Failed => {
                        output.push_str(">\n");
                        output.push_str(&format!(
                            "      <failure message=\"{}\" type=\"{}\" />\n",
                            escape_markup(&result.message),
                            escape_markup(&result.id)
                        ));
                        output.push_str("    </testcase>\n");
                    }
                }
            }

            output.push_str("  </testsuite>\n");
        }

        output.push_str("</testsuites>");
        Ok(output)
    }
}
