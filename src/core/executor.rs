//! Runtime spawning seam and payload-driven task execution.

use std::future::Future;

use async_trait::async_trait;

/// Abstraction for spawning task execution on a runtime.
///
/// The scheduler hands every started task to `spawn` and never awaits it;
/// implementations must not run the future inline.
pub trait Spawn {
    /// Spawn an async task that runs to completion on its own.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// Abstraction for executing a task payload and producing a result.
///
/// Lets callers describe work as a reusable executor plus per-task payload
/// instead of an ad-hoc closure; see `Scheduler::submit_payload`.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use prometheus_task_queue::core::TaskExecutor;
///
/// #[derive(Clone)]
/// struct Fetcher { client: reqwest::Client }
///
/// #[async_trait]
/// impl TaskExecutor<String, String> for Fetcher {
///     async fn execute(&self, url: String) -> anyhow::Result<String> {
///         Ok(self.client.get(url).send().await?.text().await?)
///     }
/// }
/// ```
#[async_trait]
pub trait TaskExecutor<P, T, E = anyhow::Error>: Send + Sync + Clone + 'static
where
    P: Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    /// Execute a task payload and return the result.
    async fn execute(&self, payload: P) -> Result<T, E>;
}
