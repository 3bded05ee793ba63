//! Task identity, lifecycle states, and the completion handle returned by `submit`.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use serde::{Deserialize, Serialize};

use super::TaskError;

/// Identifier assigned to each submission, unique within one scheduler.
pub type TaskId = u64;

/// Status of a task in the scheduler lifecycle.
///
/// `Queued -> Running -> {Succeeded, Failed, Abandoned}`; a task submitted
/// while capacity is free is recorded as queued and started on the same
/// dispatch pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is waiting for a free slot.
    Queued,
    /// Task holds a slot and its work has been handed to the runtime.
    Running,
    /// Task finished and returned a value.
    Succeeded,
    /// Task finished and returned an error.
    Failed,
    /// Task released its slot without settling (panic or runtime drop).
    Abandoned,
}

impl TaskStatus {
    /// Whether this is a terminal state.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Abandoned)
    }
}

/// Write-once slot through which a task's outcome reaches its submitter.
///
/// Resolves to `Ok(value)` when the task succeeds, `Err(TaskError::Failed(e))`
/// when it returns an error, and `Err(TaskError::Abandoned)` if it never
/// settles. Dropping the handle does not cancel the task.
#[must_use = "the task runs regardless, but its outcome is only observable through the handle"]
#[derive(Debug)]
pub struct CompletionHandle<T, E> {
    id: TaskId,
    rx: oneshot::Receiver<Result<T, E>>,
}

impl<T, E> CompletionHandle<T, E> {
    pub(crate) const fn new(id: TaskId, rx: oneshot::Receiver<Result<T, E>>) -> Self {
        Self { id, rx }
    }

    /// Identifier of the task behind this handle.
    pub const fn id(&self) -> TaskId {
        self.id
    }
}

impl<T, E> Future for CompletionHandle<T, E> {
    type Output = Result<T, TaskError<E>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(|received| match received {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(TaskError::Failed(err)),
            Err(oneshot::Canceled) => Err(TaskError::Abandoned),
        })
    }
}
