//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

use crate::core::config::{DEFAULT_MIN_SAMPLES, DEFAULT_TIME_BUDGET_MS};

/// Compare a native directory analysis against an external reference implementation
#[derive(Debug, Parser)]
#[command(name = "analysis-bench", version, about)]
pub struct Cli {
    /// Directory analyzed by every candidate
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Soft time budget per candidate, in milliseconds
    #[arg(long = "time-ms", env = "ANALYSIS_BENCH_TIME_MS", default_value_t = DEFAULT_TIME_BUDGET_MS)]
    pub time_ms: u64,

    /// Minimum completed invocations per candidate
    #[arg(long, env = "ANALYSIS_BENCH_MIN_SAMPLES", default_value_t = DEFAULT_MIN_SAMPLES, value_parser = parse_positive)]
    pub min_samples: usize,

    /// Untimed invocations before sampling starts
    #[arg(long, env = "ANALYSIS_BENCH_WARMUP", default_value_t = 0)]
    pub warmup: usize,

    /// Program used as the reference implementation
    #[arg(long, env = "ANALYSIS_BENCH_REFERENCE", default_value = "linguist")]
    pub reference: String,

    /// Argument for the reference program, placed before the target path;
    /// giving any replaces the default `--offline`
    #[arg(long = "reference-arg", allow_hyphen_values = true, default_value = "--offline")]
    pub reference_args: Vec<String>,

    /// Skip the reference implementation
    #[arg(long)]
    pub no_reference: bool,

    /// Only run the named candidates
    #[arg(long)]
    pub only: Vec<String>,

    /// Count files in hidden directories
    #[arg(long)]
    pub include_hidden: bool,

    /// Count files in vendored directories
    #[arg(long)]
    pub include_vendored: bool,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Also write the results to a CSV file
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Show a spinner while each candidate is measured
    #[arg(long)]
    pub progress: bool,
}

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("value must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    /// Whether a candidate passes the `--only` filter
    pub fn selects(&self, name: &str) -> bool {
        self.only.is_empty() || self.only.iter().any(|o| o == name)
    }
}
