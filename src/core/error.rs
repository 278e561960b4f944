//! Error types for the benchmark harness

use std::io;

use thiserror::Error;

/// Errors produced by the benchmark harness
#[derive(Debug, Error)]
pub enum BenchError {
    /// A candidate with this name is already registered
    #[error("candidate `{0}` is already registered")]
    DuplicateName(String),

    /// Candidates can only be added before the first run
    #[error("cannot register `{0}` after the runner has run")]
    RegistrationClosed(String),

    /// A candidate's operation failed during warmup or a timed invocation
    #[error("candidate `{name}` failed on invocation {invocation}: {message}")]
    CandidateExecution {
        name: String,
        invocation: usize,
        message: String,
    },

    /// A summary was requested for a candidate that has no samples and did not error
    #[error("candidate `{0}` has no samples to summarize")]
    InsufficientSamples(String),

    #[error("invalid run configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
