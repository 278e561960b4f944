//! Summary statistics over a candidate's timing samples
//!
//! Samples are durations in milliseconds. A summary is only ever built from a
//! non-empty sample sequence.

use serde::Serialize;

/// z-score for a two-sided 95% interval
const Z_95: f64 = 1.96;

/// Aggregate statistics derived from one candidate's samples
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub samples: usize,
    pub mean_ms: f64,
    pub variance: f64,
    pub std_dev_ms: f64,
    pub sem_ms: f64,           // standard error of the mean
    pub rme_percent: f64,      // relative margin of error at 95%
    pub min_ms: f64,
    pub max_ms: f64,
    pub median_ms: f64,
    pub p75_ms: f64,
    pub p99_ms: f64,
    /// Operations per second, `1000 / mean_ms`
    pub throughput: f64,
}

impl Summary {
    /// Summarize a sample sequence; `None` when there is nothing to summarize
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n = samples.len();
        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let mean = samples.iter().sum::<f64>() / n as f64;

        // Sample variance (n - 1); a single sample has no spread
        let variance = if n > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();
        let sem = std_dev / (n as f64).sqrt();
        let rme = if mean > 0.0 { Z_95 * sem / mean * 100.0 } else { 0.0 };

        let throughput = if mean > 0.0 { 1000.0 / mean } else { f64::INFINITY };

        Some(Self {
            samples: n,
            mean_ms: mean,
            variance,
            std_dev_ms: std_dev,
            sem_ms: sem,
            rme_percent: rme,
            min_ms: sorted[0],
            max_ms: sorted[n - 1],
            median_ms: Self::percentile(&sorted, 50.0),
            p75_ms: Self::percentile(&sorted, 75.0),
            p99_ms: Self::percentile(&sorted, 99.0),
            throughput,
        })
    }

    /// Calculate percentile of sorted data
    fn percentile(sorted_data: &[f64], p: f64) -> f64 {
        let idx = (p / 100.0 * (sorted_data.len() - 1) as f64).round() as usize;
        sorted_data[idx.min(sorted_data.len() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn empty_samples_have_no_summary() {
        assert!(Summary::from_samples(&[]).is_none());
    }

    #[test]
    fn mean_and_throughput_follow_samples() {
        let summary = Summary::from_samples(&[2.0, 4.0, 6.0, 8.0]).unwrap();
        assert_eq!(summary.samples, 4);
        assert!((summary.mean_ms - 5.0).abs() < EPS);
        assert!((summary.throughput - 200.0).abs() < EPS);
        assert!((summary.variance - 20.0 / 3.0).abs() < EPS);
        assert_eq!(summary.min_ms, 2.0);
        assert_eq!(summary.max_ms, 8.0);
    }

    #[test]
    fn single_sample_has_zero_spread() {
        let summary = Summary::from_samples(&[12.5]).unwrap();
        assert_eq!(summary.variance, 0.0);
        assert_eq!(summary.rme_percent, 0.0);
        assert_eq!(summary.median_ms, 12.5);
        assert_eq!(summary.p99_ms, 12.5);
    }

    #[test]
    fn zero_mean_reports_unbounded_throughput() {
        let summary = Summary::from_samples(&[0.0, 0.0]).unwrap();
        assert!(summary.throughput.is_infinite());
        assert_eq!(summary.rme_percent, 0.0);
    }

    #[test]
    fn percentiles_use_sorted_order() {
        let samples: Vec<f64> = (1..=100).rev().map(f64::from).collect();
        let summary = Summary::from_samples(&samples).unwrap();
        assert_eq!(summary.min_ms, 1.0);
        assert_eq!(summary.p99_ms, 99.0);
        assert_eq!(summary.p75_ms, 75.0);
    }
}
