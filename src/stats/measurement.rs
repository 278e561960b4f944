//! Per-candidate measurement results
//!
//! This module holds what a run recorded for one candidate: its raw samples
//! or the failure that stopped it.

use serde::Serialize;

/// Outcome of measuring one candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MeasurementOutcome {
    /// Every invocation succeeded; samples are in execution order
    Completed {
        samples: Vec<f64>,
        elapsed_ms: f64,
    },
    /// An invocation failed and the candidate's remaining invocations were skipped
    Errored {
        samples_before_failure: usize,
        error: String,
    },
}

/// Measurement data for one candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateMeasurement {
    pub name: String,
    #[serde(flatten)]
    pub outcome: MeasurementOutcome,
}

impl CandidateMeasurement {
    pub fn is_errored(&self) -> bool {
        matches!(self.outcome, MeasurementOutcome::Errored { .. })
    }

    /// Raw samples of a completed candidate; empty for an errored one
    pub fn samples(&self) -> &[f64] {
        match &self.outcome {
            MeasurementOutcome::Completed { samples, .. } => samples.as_slice(),
            MeasurementOutcome::Errored { .. } => &[],
        }
    }
}
