//! Error types for scheduler operations and task outcomes.

use thiserror::Error;

/// Errors produced while configuring or constructing schedulers.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Configuration could not be parsed or is structurally invalid.
    #[error("config error: {0}")]
    Config(String),
    /// No async runtime is available to launch tasks on.
    #[error("no runtime: {0}")]
    NoRuntime(String),
}

/// Outcome delivered through a completion handle when a task does not succeed.
#[derive(Debug, Error)]
pub enum TaskError<E> {
    /// The task ran and returned an error.
    #[error("task failed: {0}")]
    Failed(E),
    /// The task never settled: it panicked, or it was dropped by the runtime
    /// or the scheduler before producing a result.
    #[error("task abandoned before settling")]
    Abandoned,
}

impl<E> TaskError<E> {
    /// The task's own error, if it ran and failed.
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Abandoned => None,
        }
    }

    /// Whether the task ended without settling.
    pub const fn is_abandoned(&self) -> bool {
        matches!(self, Self::Abandoned)
    }
}

/// Convenience result type for task bodies.
pub type TaskResult<T> = Result<T, anyhow::Error>;
