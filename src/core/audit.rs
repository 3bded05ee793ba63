//! Lifecycle audit sinks.
//!
//! A scheduler with an attached sink reports every task transition. Queued and
//! Running events are recorded under the scheduler's bookkeeping lock, so the
//! order of Running events is the order tasks were started.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::{TaskId, TaskStatus};
use crate::util::clock::now_ms;

/// Audit event structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Scheduler name.
    pub scheduler: String,
    /// Related task identifier.
    pub task_id: TaskId,
    /// State the task entered.
    pub status: TaskStatus,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
}

/// Audit sink abstraction.
///
/// `record` may be called while the scheduler holds its bookkeeping lock and
/// must not call back into the scheduler.
pub trait AuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: AuditEvent);
}

/// In-memory audit sink for testing and dev.
///
/// Clones share the same buffer, so a test can keep one clone and attach the
/// other to a scheduler.
#[derive(Clone)]
pub struct InMemoryAuditSink {
    events: Arc<Mutex<VecDeque<AuditEvent>>>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(max_events))),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().iter().cloned().collect()
    }

    /// Task ids that entered `status`, in recording order.
    pub fn task_ids_with(&self, status: TaskStatus) -> Vec<TaskId> {
        self.events
            .lock()
            .iter()
            .filter(|event| event.status == status)
            .map(|event| event.task_id)
            .collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        let mut events = self.events.lock();
        if events.len() >= self.max_events {
            events.pop_front();
        }
        events.push_back(event);
    }
}

/// Sink that emits every event as a structured `tracing` record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, event: AuditEvent) {
        tracing::info!(
            scheduler = %event.scheduler,
            task_id = event.task_id,
            status = ?event.status,
            at_ms = %event.created_at_ms,
            "task transition"
        );
    }
}

/// Helper to build an audit event stamped with the current time.
pub fn build_audit_event(
    scheduler: impl Into<String>,
    task_id: TaskId,
    status: TaskStatus,
) -> AuditEvent {
    AuditEvent {
        scheduler: scheduler.into(),
        task_id,
        status,
        created_at_ms: now_ms(),
    }
}
