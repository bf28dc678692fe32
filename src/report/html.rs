//! Self-contained HTML report.
//!
//! The document embeds its stylesheet, so it can be opened straight from disk or
//! published as a static page. Rendering depends only on the aggregate, including
//! its timestamp, so rendering a run twice yields the same document.

use crate::engine::result::Aggregate;
use crate::report::{escape_markup, summarize, ReportFormatter};
use crate::{CheckResult, Outcome, RubricError};
use std::fs;
use std::path::Path;

const REPORT_TITLE: &str = "Weather App Test Results";

const REPORT_STYLE: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 20px;
        }
        .container {
            max-width: 800px;
            margin: 0 auto;
            background: white;
            border-radius: 15px;
            box-shadow: 0 10px 30px rgba(0,0,0,0.2);
            overflow: hidden;
        }
        .header {
            background: linear-gradient(135deg, #28a745 0%, #20c997 100%);
            color: white;
            padding: 30px;
            text-align: center;
        }
        .header h1 { font-size: 2.5em; margin-bottom: 10px; }
        .header p { opacity: 0.9; font-size: 1.1em; }
        .progress-bar {
            width: 100%;
            height: 8px;
            background: #eee;
            border-radius: 4px;
            overflow: hidden;
            margin: 20px 0;
        }
        .progress-fill {
            height: 100%;
            background: linear-gradient(90deg, #28a745 0%, #20c997 100%);
        }
        .celebration {
            text-align: center;
            padding: 20px;
            background: linear-gradient(135deg, #28a745 0%, #20c997 100%);
            color: white;
            margin: 20px;
            border-radius: 10px;
        }
        .celebration h2 { font-size: 2em; margin-bottom: 10px; }
        .stats-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
            gap: 20px;
            padding: 30px;
            background: #f8f9fa;
        }
        .stat-card {
            background: white;
            padding: 25px;
            border-radius: 10px;
            text-align: center;
            box-shadow: 0 5px 15px rgba(0,0,0,0.1);
        }
        .stat-number { font-size: 3em; font-weight: bold; margin-bottom: 10px; }
        .stat-label { font-size: 1.1em; color: #666; text-transform: uppercase; letter-spacing: 1px; }
        .total .stat-number { color: #6c757d; }
        .passed .stat-number { color: #28a745; }
        .failed .stat-number { color: #dc3545; }
        .rate .stat-number { color: #007bff; }
        .results-section { padding: 30px; }
        .section-title {
            font-size: 1.5em;
            margin-bottom: 20px;
            color: #333;
            border-bottom: 2px solid #eee;
            padding-bottom: 10px;
        }
        .test-item {
            display: flex;
            align-items: center;
            padding: 15px;
            margin-bottom: 10px;
            border-radius: 8px;
            background: #f8f9fa;
        }
        .test-item.passed { background: #d4edda; border-left: 4px solid #28a745; }
        .test-item.failed { background: #f8d7da; border-left: 4px solid #dc3545; }
        .test-status { margin-right: 15px; font-size: 1.2em; }
        .test-name { font-weight: bold; margin-right: 10px; }
        .test-message { color: #666; flex-grow: 1; }
        .footer {
            background: #f8f9fa;
            padding: 20px;
            text-align: center;
            color: #666;
            border-top: 1px solid #eee;
        }
"#;

/// HTML report formatter
#[derive(Debug, Default)]
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        HtmlFormatter
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, aggregate: &Aggregate) -> Result<String, RubricError> {
        Ok(render(aggregate))
    }
}

/// Render the report document for an aggregate
pub fn render(aggregate: &Aggregate) -> String {
    let summary = summarize(aggregate);
    let timestamp = aggregate.evaluated_at().format("%Y-%m-%d %H:%M:%S").to_string();
    let rate_label = summary.rate.clone().unwrap_or_else(|| "n/a".to_string());
    let fill_width = aggregate.success_rate().unwrap_or(0.0);

    let mut output = String::new();
    output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    output.push_str("    <meta charset=\"UTF-8\">\n");
    output.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    output.push_str(&format!("    <title>{}</title>\n", REPORT_TITLE));
    output.push_str(&format!("    <style>{}    </style>\n", REPORT_STYLE));
    output.push_str("</head>\n<body>\n    <div class=\"container\">\n");

    // Header with progress bar
    output.push_str("        <div class=\"header\">\n");
    output.push_str(&format!("            <h1>🌤️ {}</h1>\n", REPORT_TITLE));
    output.push_str(&format!(
        "            <p>Automated test execution completed on {}</p>\n",
        timestamp
    ));
    output.push_str("            <div class=\"progress-bar\">\n");
    output.push_str(&format!(
        "                <div class=\"progress-fill\" style=\"width: {:.1}%;\"></div>\n",
        fill_width
    ));
    output.push_str("            </div>\n        </div>\n");

    if aggregate.total() > 0 && aggregate.failed() == 0 {
        output.push_str("        <div class=\"celebration\">\n");
        output.push_str("            <h2>🎉 Congratulations! 🎉</h2>\n");
        output.push_str("            <p>All tests are passing! Your weather app is perfectly implemented!</p>\n");
        output.push_str("        </div>\n");
    }

    output.push_str("        <div class=\"stats-grid\">\n");
    for (class, value, label) in [
        ("total", summary.total.to_string(), "Total Tests"),
        ("passed", summary.passed.to_string(), "Passed"),
        ("failed", summary.failed.to_string(), "Failed"),
        ("rate", rate_label, "Success Rate"),
    ] {
        output.push_str(&format!(
            "            <div class=\"stat-card {}\">\n                <div class=\"stat-number\">{}</div>\n                <div class=\"stat-label\">{}</div>\n            </div>\n",
            class, value, label
        ));
    }
    output.push_str("        </div>\n");

    output.push_str("        <div class=\"results-section\">\n");
    output.push_str("            <h2 class=\"section-title\">📋 Detailed Test Results</h2>\n");
    if aggregate.is_empty() {
        output.push_str("            <p class=\"test-message\">No checks were run.</p>\n");
    }
    for result in aggregate.results() {
        output.push_str(&render_row(result));
    }
    output.push_str("        </div>\n");

    output.push_str(&format!(
        "        <div class=\"footer\">\n            <p>Generated by lab-rubric | {}</p>\n        </div>\n",
        timestamp
    ));
    output.push_str("    </div>\n</body>\n</html>\n");

    output
}

fn render_row(result: &CheckResult) -> String {
    let (class, glyph) = match result.outcome {
        Outcome::Passed => ("passed", "✅"),
        Outcome::Failed => ("failed", "❌"),
    };

    format!(
        "            <div class=\"test-item {}\" data-check-id=\"{}\">\n                <span class=\"test-status\">{}</span>\n                <span class=\"test-name\">{}</span>\n                <span class=\"test-message\">{}</span>\n            </div>\n",
        class,
        escape_markup(&result.id),
        glyph,
        escape_markup(&result.name),
        escape_markup(&result.message)
    )
}

/// Render the report and write it to `path`, creating parent directories
pub fn write_report(aggregate: &Aggregate, path: &Path) -> Result<(), RubricError> {
    let write_err = |source| RubricError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, render(aggregate)).map_err(write_err)?;

    tracing::info!(path = %path.display(), "HTML report written");
    Ok(())
}
