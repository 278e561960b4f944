//! Directory Analysis Benchmark Library
//!
//! This library times interchangeable directory analysis implementations
//! against the same target directory and compares their statistics.

pub mod analysis;
pub mod cli;
pub mod core;
pub mod ranking;
pub mod stats;
pub mod ui;
pub mod utils;

pub use crate::core::{run_benchmark, BenchError, BenchmarkRunner, Candidate, Report, RunConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
