//! Bounded-concurrency scheduler with FIFO admission.
//!
//! Submissions land in a pending list guarded by a `parking_lot::Mutex`
//! together with the in-flight count. `dispatch` pops from the front while a
//! slot is free, reserving the slot under that same lock before the task's
//! work is handed to the runtime. A slot is released exactly once, by the
//! `Slot` guard owned by the running task, which then dispatches again.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::channel::oneshot;
use futures::future::{BoxFuture, FutureExt};
use parking_lot::Mutex;

use crate::config::SchedulerConfig;
use crate::core::{
    build_audit_event, AuditSink, CompletionHandle, SchedulerStats, Spawn, TaskExecutor, TaskId,
    TaskStatus,
};

/// Name used when a scheduler is built without one.
pub const DEFAULT_SCHEDULER_NAME: &str = "default";

/// Deferred task body: invoked with its slot when the task is started.
type Launch = Box<dyn FnOnce(Slot) -> BoxFuture<'static, ()> + Send>;

/// Type-erased `Spawn::spawn`.
type SpawnFn = Box<dyn Fn(BoxFuture<'static, ()>) + Send + Sync>;

struct PendingTask {
    id: TaskId,
    launch: Launch,
}

struct QueueState {
    pending: VecDeque<PendingTask>,
    in_flight: usize,
}

#[derive(Default)]
struct Counters {
    submitted: AtomicU64,
    succeeded: AtomicU64,
    failed: AtomicU64,
    abandoned: AtomicU64,
}

struct Inner {
    name: String,
    capacity: usize,
    state: Mutex<QueueState>,
    next_id: AtomicU64,
    counters: Counters,
    audit: Option<Arc<dyn AuditSink>>,
    spawn: SpawnFn,
}

/// Bounded-concurrency task scheduler.
///
/// Runs at most `capacity` submitted tasks at once and starts queued tasks in
/// submission order as slots free up. Clones share the same queue.
#[derive(Clone)]
pub struct Scheduler {
    inner: Arc<Inner>,
}

impl Scheduler {
    /// Create a scheduler launching tasks through `spawner`.
    ///
    /// A missing `concurrency` means 1; zero or negative values are clamped to 1.
    pub fn new<S>(config: &SchedulerConfig, spawner: S) -> Self
    where
        S: Spawn + Send + Sync + 'static,
    {
        Self::from_parts(DEFAULT_SCHEDULER_NAME, config, spawner, None)
    }

    pub(crate) fn from_parts<S>(
        name: impl Into<String>,
        config: &SchedulerConfig,
        spawner: S,
        audit: Option<Arc<dyn AuditSink>>,
    ) -> Self
    where
        S: Spawn + Send + Sync + 'static,
    {
        let name = name.into();
        let capacity = config.capacity().get();
        if config.is_clamped() {
            tracing::warn!(
                "scheduler {} concurrency {:?} clamped to {}",
                name,
                config.concurrency,
                capacity
            );
        }
        tracing::debug!("scheduler {} created with capacity {}", name, capacity);

        Self {
            inner: Arc::new(Inner {
                name,
                capacity,
                state: Mutex::new(QueueState {
                    pending: VecDeque::new(),
                    in_flight: 0,
                }),
                next_id: AtomicU64::new(1),
                counters: Counters::default(),
                audit,
                spawn: Box::new(move |fut: BoxFuture<'static, ()>| spawner.spawn(fut)),
            }),
        }
    }

    /// Submit a task and return its completion handle without waiting for it
    /// to start.
    ///
    /// `task` is called once, when the task is started. Its failure is
    /// delivered only through the returned handle and never affects other
    /// tasks.
    pub fn submit<F, Fut, T, E>(&self, task: F) -> CompletionHandle<T, E>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = oneshot::channel();

        let launch: Launch = Box::new(move |mut slot: Slot| {
            async move {
                slot.started = true;
                let outcome = task().await;
                slot.settle(outcome.is_ok());
                if tx.send(outcome).is_err() {
                    tracing::debug!("task {} settled after its handle was dropped", id);
                }
            }
            .boxed()
        });

        self.inner.counters.submitted.fetch_add(1, Ordering::Relaxed);
        {
            let mut state = self.inner.state.lock();
            state.pending.push_back(PendingTask { id, launch });
            self.inner.record(id, TaskStatus::Queued);
        }
        tracing::debug!("task {} queued on {}", id, self.inner.name);

        self.inner.dispatch();
        CompletionHandle::new(id, rx)
    }

    /// Submit `payload` for execution by `executor`.
    pub fn submit_payload<X, P, T, E>(&self, executor: &X, payload: P) -> CompletionHandle<T, E>
    where
        X: TaskExecutor<P, T, E>,
        P: Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        let executor = executor.clone();
        self.submit(move || async move { executor.execute(payload).await })
    }

    pub(crate) fn dispatch(&self) {
        self.inner.dispatch();
    }

    /// Scheduler name used in logs and audit events.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Maximum number of tasks in flight.
    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    /// Tasks currently holding a slot.
    pub fn running(&self) -> usize {
        self.inner.state.lock().in_flight
    }

    /// Tasks waiting for a slot.
    pub fn pending(&self) -> usize {
        self.inner.state.lock().pending.len()
    }

    /// Tasks not yet settled: pending plus running.
    pub fn backlog(&self) -> usize {
        let state = self.inner.state.lock();
        state.pending.len() + state.in_flight
    }

    /// Snapshot of load and settled-outcome counters.
    pub fn stats(&self) -> SchedulerStats {
        let (running, pending) = {
            let state = self.inner.state.lock();
            (state.in_flight, state.pending.len())
        };
        let counters = &self.inner.counters;
        SchedulerStats {
            name: self.inner.name.clone(),
            capacity: self.inner.capacity,
            running,
            pending,
            submitted: counters.submitted.load(Ordering::Relaxed),
            succeeded: counters.succeeded.load(Ordering::Relaxed),
            failed: counters.failed.load(Ordering::Relaxed),
            abandoned: counters.abandoned.load(Ordering::Relaxed),
        }
    }
}

impl Inner {
    fn record(&self, id: TaskId, status: TaskStatus) {
        if let Some(sink) = &self.audit {
            sink.record(build_audit_event(self.name.as_str(), id, status));
        }
    }

    /// Start pending tasks while slots are free. Safe to call spuriously.
    fn dispatch(self: &Arc<Self>) {
        let ready = {
            let mut state = self.state.lock();
            let mut ready = Vec::new();
            while state.in_flight < self.capacity {
                let Some(task) = state.pending.pop_front() else {
                    break;
                };
                state.in_flight += 1;
                self.record(task.id, TaskStatus::Running);
                ready.push(task);
            }
            ready
        };

        for task in ready {
            tracing::debug!("task {} started on {}", task.id, self.name);
            let slot = Slot {
                inner: Arc::clone(self),
                id: task.id,
                started: false,
                succeeded: None,
            };
            (self.spawn)((task.launch)(slot));
        }
    }

    fn release(self: &Arc<Self>, id: TaskId, status: TaskStatus, redispatch: bool) {
        let counter = match status {
            TaskStatus::Succeeded => &self.counters.succeeded,
            TaskStatus::Failed => &self.counters.failed,
            _ => &self.counters.abandoned,
        };
        counter.fetch_add(1, Ordering::Relaxed);

        {
            let mut state = self.state.lock();
            debug_assert!(state.in_flight > 0, "released a slot that was never reserved");
            state.in_flight = state.in_flight.saturating_sub(1);
            self.record(id, status);
        }

        match status {
            TaskStatus::Succeeded => tracing::info!("task {} succeeded on {}", id, self.name),
            TaskStatus::Failed => tracing::info!("task {} failed on {}", id, self.name),
            _ => tracing::warn!("task {} abandoned on {} without settling", id, self.name),
        }

        if redispatch {
            self.dispatch();
        }
    }
}

/// One reserved in-flight slot, owned by the running task.
///
/// Dropping it releases the slot, so a panicking task still frees capacity.
/// A slot whose task was never polled releases without dispatching: the
/// runtime that discarded it is shutting down.
struct Slot {
    inner: Arc<Inner>,
    id: TaskId,
    started: bool,
    succeeded: Option<bool>,
}

impl Slot {
    fn settle(mut self, succeeded: bool) {
        self.succeeded = Some(succeeded);
    }
}

impl Drop for Slot {
    fn drop(&mut self) {
        let status = match self.succeeded {
            Some(true) => TaskStatus::Succeeded,
            Some(false) => TaskStatus::Failed,
            None => TaskStatus::Abandoned,
        };
        self.inner.release(self.id, status, self.started);
    }
}
