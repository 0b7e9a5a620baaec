//! Time budget for blocking solves

use std::time::Duration;

use thiserror::Error;
use tokio::{
    task::{self, JoinError},
    time,
};

#[derive(Debug, Error)]
pub(crate) enum BudgetError {
    #[error("solve exceeded its {}ms budget", .0.as_millis())]
    Elapsed(Duration),

    #[error("solve worker failed: {0}")]
    Worker(#[from] JoinError),
}

/// Run `work` on the blocking pool and give up waiting after `budget`.
///
/// The worker is not cancelled on timeout; it runs to completion and its result is dropped.
pub(crate) async fn run_blocking<T, F>(budget: Duration, work: F) -> Result<T, BudgetError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    time::timeout(budget, task::spawn_blocking(work))
        .await
        .map_err(|_elapsed| BudgetError::Elapsed(budget))?
        .map_err(BudgetError::from)
}
