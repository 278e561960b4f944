//! Run configuration for the benchmark harness
//!
//! The same structure is built from command-line flags by the binary and
//! echoed back in the JSON report.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::error::{BenchError, Result};

/// Default soft time budget per candidate, in milliseconds
pub const DEFAULT_TIME_BUDGET_MS: u64 = 1000;
/// Default minimum number of completed invocations per candidate
pub const DEFAULT_MIN_SAMPLES: usize = 64;

/// Parameters controlling how long each candidate is measured
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    /// Time after which a candidate stops taking new samples (soft)
    #[serde(default = "default_time_budget_ms")]
    pub time_budget_ms: u64,
    /// Completed invocations required before time-based stopping is honored
    #[serde(default = "default_min_samples", deserialize_with = "validate_positive_usize")]
    pub min_samples: usize,
    /// Untimed invocations run before sampling starts
    #[serde(default)]
    pub warmup_iterations: usize,
}

fn default_time_budget_ms() -> u64 {
    DEFAULT_TIME_BUDGET_MS
}

fn default_min_samples() -> usize {
    DEFAULT_MIN_SAMPLES
}

fn validate_positive_usize<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = usize::deserialize(deserializer)?;
    if value > 0 {
        Ok(value)
    } else {
        Err(serde::de::Error::custom("Value must be positive"))
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            time_budget_ms: DEFAULT_TIME_BUDGET_MS,
            min_samples: DEFAULT_MIN_SAMPLES,
            warmup_iterations: 0,
        }
    }
}

impl RunConfig {
    /// Build a configuration from a budget and a sample floor
    ///
    /// The budget is kept in whole milliseconds, rounded up, so a non-zero
    /// budget never becomes zero.
    pub fn new(time_budget: Duration, min_samples: usize) -> Self {
        let millis = time_budget.as_nanos().div_ceil(1_000_000);
        Self {
            time_budget_ms: u64::try_from(millis).unwrap_or(u64::MAX),
            min_samples,
            warmup_iterations: 0,
        }
    }

    pub fn with_warmup(mut self, iterations: usize) -> Self {
        self.warmup_iterations = iterations;
        self
    }

    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.time_budget_ms)
    }

    /// Sample floor actually enforced; a candidate always yields at least one sample
    pub fn sample_floor(&self) -> usize {
        self.min_samples.max(1)
    }

    /// Check the configuration before a run starts
    pub fn validate(&self) -> Result<()> {
        if self.min_samples == 0 {
            return Err(BenchError::InvalidConfig("minSamples must be at least 1".into()));
        }
        Ok(())
    }

    /// Parse a configuration from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_harness() {
        let config = RunConfig::default();
        assert_eq!(config.time_budget(), Duration::from_secs(1));
        assert_eq!(config.min_samples, 64);
        assert_eq!(config.warmup_iterations, 0);
    }

    #[test]
    fn parses_camel_case_fields() {
        let config = RunConfig::from_json(r#"{"timeBudgetMs": 250, "minSamples": 5}"#).unwrap();
        assert_eq!(config.time_budget_ms, 250);
        assert_eq!(config.min_samples, 5);
        assert_eq!(config.warmup_iterations, 0);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = RunConfig::from_json("{}").unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn sub_millisecond_budgets_round_up() {
        assert_eq!(RunConfig::new(Duration::from_micros(500), 1).time_budget_ms, 1);
        assert_eq!(RunConfig::new(Duration::from_micros(1200), 1).time_budget_ms, 2);
        assert_eq!(RunConfig::new(Duration::from_millis(3), 1).time_budget_ms, 3);
        assert_eq!(RunConfig::new(Duration::ZERO, 1).time_budget_ms, 0);
    }

    #[test]
    fn zero_min_samples_is_rejected() {
        assert!(RunConfig::from_json(r#"{"minSamples": 0}"#).is_err());
        let config = RunConfig::new(Duration::ZERO, 0);
        assert!(matches!(config.validate(), Err(BenchError::InvalidConfig(_))));
        assert_eq!(config.sample_floor(), 1);
    }
}
