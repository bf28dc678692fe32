//! lab-rubric CLI entry point
//!
//! Evaluates the weather lab rubric against a page's markup and stylesheet.

use anyhow::{Context, Result};
use clap::Parser;
use lab_rubric::artifact::{self, ArtifactPaths, LabLayout};
use lab_rubric::checks;
use lab_rubric::cli::args::{Cli, Command, OutputFormat};
use lab_rubric::engine::result::load_baseline;
use lab_rubric::report::{self, html, summary};
use lab_rubric::version::BuildInfo;
use lab_rubric::{run_rubric, CheckFamily, RubricConfig, EXIT_RUNTIME_ERROR};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help and --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(EXIT_RUNTIME_ERROR);
        }
    };

    init_logging(cli.options.verbose, cli.options.no_color);

    let outcome = match cli.command() {
        Command::Version => {
            println!("{}", BuildInfo::current());
            Ok(ExitCode::SUCCESS)
        }
        Command::List => {
            print_check_list(&cli.options.family);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => run_checks(&cli),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_RUNTIME_ERROR)
        }
    }
}

fn init_logging(verbose: bool, no_color: bool) {
    let default_level = if verbose { "lab_rubric=debug" } else { "lab_rubric=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!no_color && std::io::stderr().is_terminal())
        .init();
}

fn print_check_list(families: &[CheckFamily]) {
    println!("Available checks:");

    for family in CheckFamily::ALL {
        if !families.is_empty() && !families.contains(&family) {
            continue;
        }

        println!();
        println!("{} CHECKS:", family.to_string().to_uppercase());
        for check in checks::checks_in_family(family) {
            println!("  {:<9} {:<32} {}", check.id, check.name, check.description);
        }
    }
}

fn run_checks(cli: &Cli) -> Result<ExitCode> {
    let options = &cli.options;
    let config = RubricConfig::from_args(options);

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let layout = LabLayout::resolve(options.lab_dir.as_deref(), &cwd);
    let paths = ArtifactPaths::from_layout(&layout)
        .with_overrides(options.markup.as_deref(), options.stylesheet.as_deref());

    let artifacts = artifact::load(&paths)?;
    let baseline = options.baseline.as_deref().map(load_baseline).transpose()?;

    let aggregate = run_rubric(&config, &artifacts);

    let formatter = report::get_formatter(options.format, !options.no_color, options.quiet);
    println!("{}", formatter.format(&aggregate)?);

    let text_output = options.format == OutputFormat::Text;

    if let Some(ref baseline) = baseline {
        let comparison = aggregate.compare_to_baseline(baseline);
        if text_output {
            println!();
            println!("{}", summary::format_comparison(&comparison));
        } else {
            tracing::info!(
                regressions = comparison.regressions.len(),
                new_failures = comparison.new_failures.len(),
                resolved = comparison.resolved.len(),
                "baseline comparison"
            );
        }
    }

    let report_path = match options.html_report {
        Some(ref path) => Some(path.clone()),
        None if options.html => Some(layout.report_path.clone()),
        None => None,
    };
    if let Some(path) = report_path {
        html::write_report(&aggregate, &path)?;
        if text_output {
            println!();
            println!("📊 Test results page generated: {}", path.display());
            println!("Open it in your browser to view detailed results.");
        }
    }

    Ok(ExitCode::from(config.exit_status(&aggregate)))
}
