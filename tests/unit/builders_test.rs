//! Tests for builder modules

use prometheus_task_queue::builders::{build_schedulers, SchedulerBuilder};
use prometheus_task_queue::config::{SchedulerConfig, SchedulerSetConfig};
use prometheus_task_queue::core::{InMemoryAuditSink, TaskStatus};
use prometheus_task_queue::runtime::TokioSpawner;

#[test]
fn test_scheduler_builder_accessors() {
    let builder = SchedulerBuilder::new("fetch", SchedulerConfig::new().with_concurrency(3));
    assert_eq!(builder.name(), "fetch");
    assert_eq!(builder.config().capacity().get(), 3);
}

#[test]
fn test_scheduler_builder_defaults() {
    let builder = SchedulerBuilder::default();
    assert_eq!(builder.name(), "default");
    assert_eq!(builder.config(), &SchedulerConfig::default());
}

#[tokio::test]
async fn test_scheduler_builder_attaches_audit() {
    let sink = InMemoryAuditSink::new(16);
    let scheduler = SchedulerBuilder::new("fetch", SchedulerConfig::new())
        .with_audit(sink.clone())
        .build(TokioSpawner::current().unwrap());
    assert_eq!(scheduler.name(), "fetch");

    scheduler
        .submit(|| async { Ok::<_, anyhow::Error>(()) })
        .await
        .unwrap();

    let statuses: Vec<_> = sink.events().iter().map(|e| e.status).collect();
    assert_eq!(statuses, [TaskStatus::Queued, TaskStatus::Running, TaskStatus::Succeeded]);
    assert!(sink.events().iter().all(|e| e.scheduler == "fetch"));
}

#[tokio::test]
async fn test_build_schedulers_from_config() {
    let json = r#"{
        "schedulers": {
            "fetch": { "concurrency": 4 },
            "render": { "concurrency": 0 }
        }
    }"#;
    let cfg = SchedulerSetConfig::from_json_str(json).unwrap();

    let schedulers = build_schedulers(&cfg, TokioSpawner::current().unwrap()).unwrap();
    assert_eq!(schedulers.len(), 2);
    assert_eq!(schedulers["fetch"].capacity(), 4);
    assert_eq!(schedulers["fetch"].name(), "fetch");
    assert_eq!(schedulers["render"].capacity(), 1);
}

#[tokio::test]
async fn test_build_schedulers_rejects_empty_config() {
    let result = build_schedulers(&SchedulerSetConfig::default(), TokioSpawner::current().unwrap());
    assert!(result.is_err());
}
