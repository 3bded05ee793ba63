//! Point-in-time scheduler load snapshot.

use serde::{Deserialize, Serialize};

/// Statistics about scheduler load and settled outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerStats {
    /// Scheduler name.
    pub name: String,

    /// Maximum tasks allowed in flight.
    pub capacity: usize,

    /// Tasks currently holding a slot.
    pub running: usize,

    /// Tasks waiting for a slot.
    pub pending: usize,

    /// Total tasks submitted.
    pub submitted: u64,

    /// Total tasks that returned a value.
    pub succeeded: u64,

    /// Total tasks that returned an error.
    pub failed: u64,

    /// Total tasks that released their slot without settling.
    pub abandoned: u64,
}

impl SchedulerStats {
    /// Tasks not yet settled: pending plus running.
    pub const fn backlog(&self) -> usize {
        self.pending + self.running
    }

    /// Tasks that reached a terminal state.
    pub const fn settled(&self) -> u64 {
        self.succeeded + self.failed + self.abandoned
    }
}
