//! Relative performance ranking of completed candidates
//!
//! Candidates are ordered by mean duration; each entry carries its mean as a
//! multiple of the fastest candidate's mean.

use serde::Serialize;

use crate::stats::Summary;

/// One row of the relative ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankEntry {
    pub rank: usize,
    pub name: String,
    pub mean_ms: f64,
    /// `mean_ms / fastest mean_ms`, always `>= 1`
    pub relative: f64,
}

/// Rank summaries by mean duration, fastest first
pub fn rank_by_mean<'a, I>(summaries: I) -> Vec<RankEntry>
where
    I: IntoIterator<Item = (&'a str, &'a Summary)>,
{
    let mut entries: Vec<RankEntry> = summaries
        .into_iter()
        .map(|(name, summary)| RankEntry {
            rank: 0, // filled after sorting
            name: name.to_string(),
            mean_ms: summary.mean_ms,
            relative: 1.0,
        })
        .collect();

    // Stable sort keeps registration order for equal means
    entries.sort_by(|a, b| a.mean_ms.total_cmp(&b.mean_ms));

    let fastest = match entries.first() {
        Some(entry) => entry.mean_ms,
        None => return entries,
    };
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
        entry.relative = relative_factor(entry.mean_ms, fastest);
    }
    entries
}

fn relative_factor(mean: f64, fastest: f64) -> f64 {
    if fastest > 0.0 {
        mean / fastest
    } else if mean > 0.0 {
        // The fastest candidate measured as instantaneous
        f64::INFINITY
    } else {
        1.0
    }
}
