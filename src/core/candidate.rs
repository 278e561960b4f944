//! Candidate contract for the benchmark harness
//!
//! A candidate is a zero-argument asynchronous operation. The runner only
//! observes whether it succeeded and how long it took.

use std::future::Future;

use async_trait::async_trait;

/// A named implementation under timed comparison
#[async_trait]
pub trait Candidate: Send + Sync {
    /// Run the operation once; any payload is discarded by the implementation
    async fn invoke(&self) -> anyhow::Result<()>;
}

/// Adapter turning an async closure into a [`Candidate`]
pub struct FnCandidate<F> {
    operation: F,
}

impl<F, Fut> FnCandidate<F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    pub fn new(operation: F) -> Self {
        Self { operation }
    }
}

#[async_trait]
impl<F, Fut> Candidate for FnCandidate<F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    async fn invoke(&self) -> anyhow::Result<()> {
        (self.operation)().await
    }
}

/// Shorthand for `FnCandidate::new`
pub fn candidate_fn<F, Fut>(operation: F) -> FnCandidate<F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    FnCandidate::new(operation)
}
