//! Command line arguments for lab-rubric.
//!
//! The lab directory, output format, color and strict mode can also be set from
//! the environment so CI jobs can configure runs without changing the command line.

use crate::CheckFamily;
use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Structural conformance checker for HTML/CSS lab assignments
#[derive(Debug, Clone, Parser)]
#[command(name = "lab-rubric", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub options: CheckOptions,
}

/// Command to execute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Subcommand)]
pub enum Command {
    /// Evaluate the rubric (default)
    #[default]
    Check,
    /// List the rubric's checks
    List,
    /// Print build information
    Version,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Console lines and summary
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
    /// JUnit XML for CI/CD integration
    Junit,
    /// Self-contained HTML report
    Html,
}

/// Options for a rubric run
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckOptions {
    /// Directory holding index.html and style.css (default: ./lab or ..)
    #[arg(long, global = true, env = "LAB_RUBRIC_LAB_DIR")]
    pub lab_dir: Option<PathBuf>,

    /// Markup file to check, overriding the lab directory
    #[arg(long, global = true)]
    pub markup: Option<PathBuf>,

    /// Stylesheet file to check, overriding the lab directory
    #[arg(long, global = true)]
    pub stylesheet: Option<PathBuf>,

    /// Run only checks of this family (repeatable)
    #[arg(long, global = true, value_enum)]
    pub family: Vec<CheckFamily>,

    /// Run only the check with this ID (repeatable)
    #[arg(long, global = true)]
    pub only: Vec<String>,

    /// Skip the check with this ID (repeatable)
    #[arg(long, global = true)]
    pub skip: Vec<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text, env = "LAB_RUBRIC_FORMAT")]
    pub format: OutputFormat,

    /// Only print failed checks
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Write the HTML report to its default location
    #[arg(long, global = true)]
    pub html: bool,

    /// Write the HTML report to PATH
    #[arg(long, global = true, value_name = "PATH")]
    pub html_report: Option<PathBuf>,

    /// Compare against a previous JSON report
    #[arg(long, global = true, value_name = "FILE")]
    pub baseline: Option<PathBuf>,

    /// Exit with status 1 when any check fails
    #[arg(long, global = true, env = "LAB_RUBRIC_STRICT", value_parser = FalseyValueParser::new())]
    pub strict: bool,
}

impl Cli {
    /// The command to run, `check` when none was given
    pub fn command(&self) -> Command {
        self.command.unwrap_or_default()
    }
}
