use analysis_bench::cli::Cli;
use analysis_bench::run_benchmark;
use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // RUST_LOG takes precedence over ANALYSIS_BENCH_LOG
    let log_level = std::env::var("ANALYSIS_BENCH_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run_benchmark(cli).await {
        eprintln!("{} {:#}", "Fatal error:".bold().red(), e);
        std::process::exit(1);
    }
}
