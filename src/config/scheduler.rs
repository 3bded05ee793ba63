//! Scheduler configuration structures.

use std::collections::HashMap;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::core::SchedulerError;

/// Configuration for a single scheduler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Maximum tasks in flight. Omitted means 1; values below 1 are clamped to 1.
    #[serde(default)]
    pub concurrency: Option<i64>,
}

impl SchedulerConfig {
    /// Configuration for strictly serial execution.
    pub const fn new() -> Self {
        Self { concurrency: None }
    }

    /// Set the requested concurrency.
    #[must_use]
    pub const fn with_concurrency(mut self, concurrency: i64) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    /// Effective capacity after defaulting and clamping.
    pub fn capacity(&self) -> NonZeroUsize {
        self.concurrency
            .and_then(|n| usize::try_from(n).ok())
            .and_then(NonZeroUsize::new)
            .unwrap_or(NonZeroUsize::MIN)
    }

    /// Whether the requested concurrency was below 1 and had to be clamped.
    pub const fn is_clamped(&self) -> bool {
        matches!(self.concurrency, Some(n) if n < 1)
    }

    /// Parse a scheduler configuration from a JSON string.
    pub fn from_json_str(input: &str) -> Result<Self, SchedulerError> {
        serde_json::from_str(input).map_err(|e| SchedulerError::Config(format!("parse error: {e}")))
    }
}

/// Configuration for a set of named schedulers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchedulerSetConfig {
    /// Map of scheduler name to configuration.
    pub schedulers: HashMap<String, SchedulerConfig>,
}

impl SchedulerSetConfig {
    /// Validate that at least one scheduler exists and every name is non-empty.
    pub fn validate(&self) -> Result<(), SchedulerError> {
        if self.schedulers.is_empty() {
            return Err(SchedulerError::Config(
                "at least one scheduler must be defined".into(),
            ));
        }
        if self.schedulers.keys().any(|name| name.trim().is_empty()) {
            return Err(SchedulerError::Config(
                "scheduler names must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Parse a scheduler set from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, SchedulerError> {
        let cfg: Self = serde_json::from_str(input)
            .map_err(|e| SchedulerError::Config(format!("parse error: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
