//! # Prometheus Task Queue
//!
//! A bounded-concurrency task queue for async workloads.
//!
//! Callers hand the [`Scheduler`](core::Scheduler) zero-argument async closures.
//! At most `concurrency` of them run at once; the rest wait in a FIFO list and
//! are started, in submission order, as running tasks settle. Every submission
//! returns a [`CompletionHandle`](core::CompletionHandle) that resolves with
//! that task's own result or failure, independent of every other task.
//!
//! ## Key Features
//!
//! - **Fixed in-flight limit**: capacity is set once at construction; a
//!   non-positive `concurrency` is clamped to 1
//! - **FIFO start order**: queued tasks start strictly in submission order
//! - **Failure isolation**: a failing or panicking task releases its slot and
//!   never blocks its siblings
//! - **Event-driven dispatch**: work is started on submission and on completion,
//!   never by polling
//! - **Runtime-agnostic core**: tasks are launched through the [`Spawn`](core::Spawn)
//!   seam; a Tokio adapter ships behind the default `tokio-runtime` feature
//!
//! ```rust,ignore
//! use prometheus_task_queue::config::SchedulerConfig;
//! use prometheus_task_queue::core::Scheduler;
//! use prometheus_task_queue::runtime::TokioSpawner;
//!
//! let scheduler = Scheduler::new(
//!     &SchedulerConfig::new().with_concurrency(2),
//!     TokioSpawner::current()?,
//! );
//!
//! let handle = scheduler.submit(|| async { Ok::<_, anyhow::Error>(40 + 2) });
//! assert_eq!(handle.await?, 42);
//! ```
//!
//! For complete examples, see `tests/scheduler_test.rs`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions and in-flight accounting.
pub mod core;
/// Configuration models for schedulers.
pub mod config;
/// Builders to construct schedulers from configuration.
pub mod builders;
/// Runtime adapters.
#[cfg(feature = "tokio-runtime")]
pub mod runtime;
/// Shared utilities.
pub mod util;
