//! Core scheduling abstractions and in-flight accounting.

pub mod error;
pub mod task;
pub mod scheduler;
pub mod audit;
pub mod executor;
pub mod stats;

pub use error::{SchedulerError, TaskError, TaskResult};
pub use task::{CompletionHandle, TaskId, TaskStatus};
pub use scheduler::Scheduler;
pub use audit::{AuditEvent, AuditSink, InMemoryAuditSink, TracingAuditSink, build_audit_event};
pub use executor::{Spawn, TaskExecutor};
pub use stats::SchedulerStats;
