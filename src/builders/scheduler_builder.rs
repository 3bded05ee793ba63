//! Builders to construct schedulers from configuration.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{SchedulerConfig, SchedulerSetConfig};
use crate::core::scheduler::DEFAULT_SCHEDULER_NAME;
use crate::core::{AuditSink, Scheduler, SchedulerError, Spawn};

/// Builder for a single named scheduler.
pub struct SchedulerBuilder {
    name: String,
    config: SchedulerConfig,
    audit: Option<Arc<dyn AuditSink>>,
}

impl SchedulerBuilder {
    /// Start a builder for the scheduler `name`.
    pub fn new(name: impl Into<String>, config: SchedulerConfig) -> Self {
        Self {
            name: name.into(),
            config,
            audit: None,
        }
    }

    /// Scheduler name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scheduler configuration.
    pub const fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Attach an audit sink receiving every task transition.
    #[must_use]
    pub fn with_audit(mut self, audit: impl AuditSink + 'static) -> Self {
        self.audit = Some(Arc::new(audit));
        self
    }

    /// Build the scheduler, launching tasks through `spawner`.
    pub fn build<S>(self, spawner: S) -> Scheduler
    where
        S: Spawn + Send + Sync + 'static,
    {
        Scheduler::from_parts(self.name, &self.config, spawner, self.audit)
    }
}

impl Default for SchedulerBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEDULER_NAME, SchedulerConfig::default())
    }
}

/// Build one scheduler per configured name, all sharing clones of `spawner`.
pub fn build_schedulers<S>(
    cfg: &SchedulerSetConfig,
    spawner: S,
) -> Result<HashMap<String, Scheduler>, SchedulerError>
where
    S: Spawn + Clone + Send + Sync + 'static,
{
    cfg.validate()?;

    let schedulers = cfg
        .schedulers
        .iter()
        .map(|(name, sched_cfg)| {
            let scheduler = SchedulerBuilder::new(name.clone(), sched_cfg.clone()).build(spawner.clone());
            (name.clone(), scheduler)
        })
        .collect();
    Ok(schedulers)
}
