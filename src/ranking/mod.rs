//! Comparison of candidates against each other

pub mod relative;

pub use relative::{rank_by_mean, RankEntry};
