//! Benchmark runner
//!
//! Candidates are measured one after another in registration order, and the
//! invocations of a candidate are awaited one at a time, so no two timed
//! regions ever overlap.

use std::sync::Arc;

use tracing::{debug, info, trace, warn};

use crate::core::candidate::Candidate;
use crate::core::clock::{Clock, MonotonicClock};
use crate::core::config::RunConfig;
use crate::core::error::{BenchError, Result};
use crate::core::report::{CompletedCandidate, ErroredCandidate, Report};
use crate::ranking::rank_by_mean;
use crate::stats::{CandidateMeasurement, MeasurementOutcome, Summary};
use crate::ui::progress;

struct RegisteredCandidate {
    name: String,
    operation: Box<dyn Candidate>,
}

/// Orchestrates timed, repeated execution of registered candidates
pub struct BenchmarkRunner {
    candidates: Vec<RegisteredCandidate>,
    measurements: Vec<CandidateMeasurement>,
    last_config: Option<RunConfig>,
    clock: Arc<dyn Clock>,
    show_progress: bool,
}

impl Default for BenchmarkRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkRunner {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(MonotonicClock::new()))
    }

    /// Create a runner reading every timestamp from `clock`
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            candidates: Vec::new(),
            measurements: Vec::new(),
            last_config: None,
            clock,
            show_progress: false,
        }
    }

    /// Show a spinner on stderr while each candidate is measured
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    /// Add a candidate; names are unique within a runner
    ///
    /// Registration closes once [`run`](Self::run) has been called, so every
    /// candidate in a report has been measured.
    pub fn register<C>(&mut self, name: impl Into<String>, operation: C) -> Result<()>
    where
        C: Candidate + 'static,
    {
        let name = name.into();
        if self.last_config.is_some() {
            return Err(BenchError::RegistrationClosed(name));
        }
        if self.candidates.iter().any(|c| c.name == name) {
            return Err(BenchError::DuplicateName(name));
        }
        debug!(candidate = %name, "registered candidate");
        self.candidates.push(RegisteredCandidate {
            name,
            operation: Box::new(operation),
        });
        Ok(())
    }

    /// Registered candidate names in registration order
    pub fn candidate_names(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|c| c.name.as_str())
    }

    /// Measurements recorded by the last run
    pub fn measurements(&self) -> &[CandidateMeasurement] {
        &self.measurements
    }

    /// Measure every registered candidate; failures are contained per candidate
    pub async fn run(&mut self, config: &RunConfig) -> Result<()> {
        config.validate()?;
        info!(
            candidates = self.candidates.len(),
            time_budget_ms = config.time_budget_ms,
            min_samples = config.min_samples,
            "starting benchmark run"
        );

        let mut measurements = Vec::with_capacity(self.candidates.len());
        for candidate in &self.candidates {
            measurements.push(self.measure(candidate, config).await);
        }

        self.measurements = measurements;
        self.last_config = Some(config.clone());
        Ok(())
    }

    async fn measure(&self, candidate: &RegisteredCandidate, config: &RunConfig) -> CandidateMeasurement {
        let name = candidate.name.as_str();
        let spinner = progress::candidate_spinner(name, self.show_progress);
        info!(candidate = %name, "measuring candidate");

        for iteration in 1..=config.warmup_iterations {
            spinner.set_message(format!("warmup {}/{}", iteration, config.warmup_iterations));
            if let Err(e) = candidate.operation.invoke().await {
                spinner.finish_and_clear();
                return errored_measurement(name, iteration, 0, e);
            }
        }

        let floor = config.sample_floor();
        let budget = config.time_budget();
        let started = self.clock.now();
        let mut samples: Vec<f64> = Vec::with_capacity(floor);

        let finished = loop {
            let invocation = samples.len() + 1;
            let entered = self.clock.now();
            let result = candidate.operation.invoke().await;
            let exited = self.clock.now();

            if let Err(e) = result {
                spinner.finish_and_clear();
                return errored_measurement(name, config.warmup_iterations + invocation, samples.len(), e);
            }

            let elapsed_ms = exited.saturating_sub(entered).as_secs_f64() * 1000.0;
            trace!(candidate = %name, invocation, elapsed_ms, "sample recorded");
            samples.push(elapsed_ms);
            spinner.set_message(format!("{} samples, last {:.3} ms", samples.len(), elapsed_ms));

            // Budget is only checked between invocations
            let spent = exited.saturating_sub(started);
            if spent >= budget && samples.len() >= floor {
                break spent;
            }
        };

        spinner.finish_and_clear();
        info!(candidate = %name, samples = samples.len(), "candidate measured");

        CandidateMeasurement {
            name: name.to_string(),
            outcome: MeasurementOutcome::Completed {
                samples,
                elapsed_ms: finished.as_secs_f64() * 1000.0,
            },
        }
    }

    /// Summaries of completed candidates, errored candidates and the ranking
    pub fn report(&self) -> Result<Report> {
        let mut completed = Vec::new();
        let mut errored = Vec::new();

        for candidate in &self.candidates {
            let measurement = self
                .measurements
                .iter()
                .find(|m| m.name == candidate.name)
                .ok_or_else(|| BenchError::InsufficientSamples(candidate.name.clone()))?;

            match &measurement.outcome {
                MeasurementOutcome::Completed { samples, elapsed_ms } => {
                    let summary = Summary::from_samples(samples)
                        .ok_or_else(|| BenchError::InsufficientSamples(candidate.name.clone()))?;
                    completed.push(CompletedCandidate {
                        name: candidate.name.clone(),
                        summary,
                        elapsed_ms: *elapsed_ms,
                    });
                }
                MeasurementOutcome::Errored { samples_before_failure, error } => {
                    errored.push(ErroredCandidate {
                        name: candidate.name.clone(),
                        samples: *samples_before_failure,
                        error: error.clone(),
                    });
                }
            }
        }

        let ranking = rank_by_mean(completed.iter().map(|c| (c.name.as_str(), &c.summary)));

        Ok(Report {
            config: self.last_config.clone(),
            completed,
            errored,
            ranking,
        })
    }
}

fn errored_measurement(name: &str, invocation: usize, samples: usize, cause: anyhow::Error) -> CandidateMeasurement {
    let error = BenchError::CandidateExecution {
        name: name.to_string(),
        invocation,
        message: format!("{:#}", cause),
    };
    warn!(candidate = %name, samples, "{}", error);
    CandidateMeasurement {
        name: name.to_string(),
        outcome: MeasurementOutcome::Errored {
            samples_before_failure: samples,
            error: error.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::candidate::candidate_fn;
    use crate::core::clock::ManualClock;
    use std::time::Duration;

    #[test]
    fn duplicate_names_are_rejected() {
        let mut runner = BenchmarkRunner::new();
        runner.register("a", candidate_fn(|| async { anyhow::Ok(()) })).unwrap();
        let err = runner.register("a", candidate_fn(|| async { anyhow::Ok(()) })).unwrap_err();
        assert!(matches!(err, BenchError::DuplicateName(ref n) if n == "a"));
        assert_eq!(runner.candidate_names().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn report_before_run_is_a_precondition_failure() {
        let mut runner = BenchmarkRunner::new();
        runner.register("idle", candidate_fn(|| async { anyhow::Ok(()) })).unwrap();
        assert!(matches!(runner.report(), Err(BenchError::InsufficientSamples(ref n)) if n == "idle"));
    }

    #[tokio::test]
    async fn registering_after_a_run_is_rejected() {
        let mut runner = BenchmarkRunner::with_clock(Arc::new(ManualClock::new()));
        runner.register("early", candidate_fn(|| async { anyhow::Ok(()) })).unwrap();
        runner.run(&RunConfig::new(Duration::ZERO, 1)).await.unwrap();

        let err = runner.register("late", candidate_fn(|| async { anyhow::Ok(()) })).unwrap_err();
        assert!(matches!(err, BenchError::RegistrationClosed(ref n) if n == "late"));

        // The measured candidate still reports
        let report = runner.report().unwrap();
        assert_eq!(report.len(), 1);
        assert!(report.completed("early").is_some());
    }

    #[tokio::test]
    async fn invalid_config_stops_the_run() {
        let mut runner = BenchmarkRunner::new();
        let config = RunConfig::new(Duration::ZERO, 0);
        assert!(matches!(runner.run(&config).await, Err(BenchError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn samples_follow_injected_clock() {
        let clock = Arc::new(ManualClock::new());
        let mut runner = BenchmarkRunner::with_clock(clock.clone());
        let step = clock.clone();
        runner
            .register(
                "fixed",
                candidate_fn(move || {
                    let step = step.clone();
                    async move {
                        step.advance(Duration::from_millis(4));
                        anyhow::Ok(())
                    }
                }),
            )
            .unwrap();

        runner.run(&RunConfig::new(Duration::from_millis(10), 2)).await.unwrap();

        // 4 + 4 + 4 ms crosses the 10 ms budget on the third invocation
        assert_eq!(runner.measurements()[0].samples(), &[4.0, 4.0, 4.0]);
    }

    #[tokio::test]
    async fn warmup_invocations_are_not_sampled() {
        let clock = Arc::new(ManualClock::new());
        let mut runner = BenchmarkRunner::with_clock(clock.clone());
        let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let counter = calls.clone();
        runner
            .register(
                "warm",
                candidate_fn(move || {
                    counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                    async { anyhow::Ok(()) }
                }),
            )
            .unwrap();

        let config = RunConfig::new(Duration::ZERO, 3).with_warmup(2);
        runner.run(&config).await.unwrap();

        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 5);
        assert_eq!(runner.measurements()[0].samples().len(), 3);
    }

    #[tokio::test]
    async fn failing_warmup_errors_the_candidate() {
        let mut runner = BenchmarkRunner::with_clock(Arc::new(ManualClock::new()));
        runner
            .register("cold", candidate_fn(|| async { Err::<(), _>(anyhow::anyhow!("not ready")) }))
            .unwrap();

        runner.run(&RunConfig::new(Duration::ZERO, 1).with_warmup(1)).await.unwrap();
        let report = runner.report().unwrap();

        let cold = report.errored("cold").unwrap();
        assert_eq!(cold.samples, 0);
        assert!(cold.error.contains("not ready"));
    }
}
