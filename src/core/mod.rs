//! Benchmark harness and the command-line run built on it

pub mod candidate;
pub mod clock;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;

use anyhow::Context;
use colored::*;
use tracing::warn;

use crate::analysis::{AnalyzeOptions, ExternalCommand, NativeAnalysis};
use crate::cli::Cli;
use crate::ui::{print_report, HostInfo};
use crate::utils::helpers::{report_json, save_csv};

pub use candidate::{candidate_fn, Candidate, FnCandidate};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::RunConfig;
pub use error::{BenchError, Result};
pub use report::{CompletedCandidate, ErroredCandidate, Report};
pub use runner::BenchmarkRunner;

/// Name of the native candidate
pub const NATIVE_CANDIDATE: &str = "native";

// ============================================================================
// COMMAND-LINE RUN
// ============================================================================

fn run_config(cli: &Cli) -> RunConfig {
    RunConfig {
        time_budget_ms: cli.time_ms,
        min_samples: cli.min_samples,
        warmup_iterations: cli.warmup,
    }
}

/// Build the runner for the candidates selected on the command line
fn build_runner(cli: &Cli, root: &std::path::Path) -> Result<BenchmarkRunner> {
    let mut runner = BenchmarkRunner::new().with_progress(cli.progress && !cli.json);

    if !cli.no_reference && cli.selects(&cli.reference) {
        let reference = ExternalCommand::new(&cli.reference, cli.reference_args.clone(), root);
        tracing::info!(command = %reference.command_line(), "reference candidate");
        runner.register(cli.reference.clone(), reference)?;
    }

    if cli.selects(NATIVE_CANDIDATE) {
        let options = AnalyzeOptions {
            include_hidden: cli.include_hidden,
            include_vendored: cli.include_vendored,
            follow_links: false,
        };
        runner.register(NATIVE_CANDIDATE, NativeAnalysis::new(root, options))?;
    }

    for name in &cli.only {
        if !runner.candidate_names().any(|c| c == name.as_str()) {
            warn!(candidate = %name, "--only names an unknown candidate");
        }
    }
    Ok(runner)
}

pub async fn run_benchmark(cli: Cli) -> anyhow::Result<()> {
    let config = run_config(&cli);
    config.validate()?;

    let root = cli
        .path
        .canonicalize()
        .with_context(|| format!("cannot resolve target directory {}", cli.path.display()))?;

    let mut runner = build_runner(&cli, &root)?;
    if runner.candidate_names().next().is_none() {
        anyhow::bail!("no candidate selected");
    }

    if !cli.json {
        eprintln!("{}", "Running benchmark...".bold());
    }
    runner.run(&config).await?;
    let report = runner.report()?;

    if cli.json {
        println!("{}", report_json(&report)?);
    } else {
        print_report(&report, &root, &HostInfo::collect());
    }

    if let Some(path) = &cli.csv {
        save_csv(&report, path).with_context(|| format!("failed to write {}", path.display()))?;
        if !cli.json {
            println!("Results saved to {}", path.display());
        }
    }
    Ok(())
}
