//! Benchmark report: completed summaries, errored candidates and the ranking

use serde::Serialize;

use crate::core::config::RunConfig;
use crate::ranking::RankEntry;
use crate::stats::Summary;

/// A candidate whose every invocation succeeded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletedCandidate {
    pub name: String,
    pub summary: Summary,
    /// Wall-clock time of the whole measurement phase
    pub elapsed_ms: f64,
}

/// A candidate stopped by a failing invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErroredCandidate {
    pub name: String,
    /// Samples taken before the failure; they are not summarized
    pub samples: usize,
    pub error: String,
}

/// Result of a benchmark run, partitioned into completed and errored candidates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<RunConfig>,
    /// Completed candidates in registration order
    pub completed: Vec<CompletedCandidate>,
    /// Errored candidates in registration order
    pub errored: Vec<ErroredCandidate>,
    /// Completed candidates, fastest first
    pub ranking: Vec<RankEntry>,
}

impl Report {
    /// Number of candidates covered, completed or errored
    pub fn len(&self) -> usize {
        self.completed.len() + self.errored.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn completed(&self, name: &str) -> Option<&CompletedCandidate> {
        self.completed.iter().find(|c| c.name == name)
    }

    pub fn errored(&self, name: &str) -> Option<&ErroredCandidate> {
        self.errored.iter().find(|c| c.name == name)
    }

    pub fn rank_of(&self, name: &str) -> Option<&RankEntry> {
        self.ranking.iter().find(|r| r.name == name)
    }

    pub fn fastest(&self) -> Option<&RankEntry> {
        self.ranking.first()
    }
}
