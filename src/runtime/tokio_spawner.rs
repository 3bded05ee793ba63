//! Tokio runtime spawner implementation.

use std::future::Future;

use crate::core::{SchedulerError, Spawn};

/// Tokio-based spawner that launches scheduled tasks on a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioSpawner {
    handle: tokio::runtime::Handle,
}

impl TokioSpawner {
    /// Create a `TokioSpawner` from a tokio runtime handle.
    pub const fn new(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }

    /// Create a `TokioSpawner` for the runtime the caller is running on.
    pub fn current() -> Result<Self, SchedulerError> {
        tokio::runtime::Handle::try_current()
            .map(Self::new)
            .map_err(|e| SchedulerError::NoRuntime(e.to_string()))
    }

    /// Handle of the runtime tasks are spawned on.
    pub const fn handle(&self) -> &tokio::runtime::Handle {
        &self.handle
    }
}

impl Spawn for TokioSpawner {
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        drop(self.handle.spawn(fut));
    }
}
