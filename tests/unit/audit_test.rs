//! Tests for audit sinks

use prometheus_task_queue::core::{
    AuditSink, InMemoryAuditSink, TaskStatus, TracingAuditSink, build_audit_event,
};

#[test]
fn test_in_memory_audit_sink() {
    let sink = InMemoryAuditSink::new(10);

    sink.record(build_audit_event("sched1", 1, TaskStatus::Queued));
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0].scheduler, "sched1");
    assert_eq!(events[0].task_id, 1);
    assert_eq!(events[0].status, TaskStatus::Queued);
}

#[test]
fn test_audit_sink_overflow() {
    let sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event("sched1", 1, TaskStatus::Queued));
    sink.record(build_audit_event("sched1", 2, TaskStatus::Queued));
    sink.record(build_audit_event("sched1", 3, TaskStatus::Queued));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].task_id, 2); // First one popped
    assert_eq!(events[1].task_id, 3);
}

#[test]
fn test_zero_sized_sink_keeps_nothing() {
    let sink = InMemoryAuditSink::new(0);
    sink.record(build_audit_event("sched1", 1, TaskStatus::Running));
    assert!(sink.events().is_empty());
}

#[test]
fn test_clones_share_buffer() {
    let sink = InMemoryAuditSink::new(10);
    let writer = sink.clone();

    writer.record(build_audit_event("sched1", 1, TaskStatus::Running));
    writer.record(build_audit_event("sched1", 2, TaskStatus::Queued));
    writer.record(build_audit_event("sched1", 1, TaskStatus::Failed));

    assert_eq!(sink.task_ids_with(TaskStatus::Running), [1]);
    assert_eq!(sink.task_ids_with(TaskStatus::Queued), [2]);
    assert_eq!(sink.task_ids_with(TaskStatus::Failed), [1]);
    assert!(sink.task_ids_with(TaskStatus::Succeeded).is_empty());
}

#[test]
fn test_build_audit_event() {
    let event = build_audit_event("sched1", 7, TaskStatus::Succeeded);

    assert_eq!(event.scheduler, "sched1");
    assert_eq!(event.task_id, 7);
    assert_eq!(event.status, TaskStatus::Succeeded);
    assert!(event.created_at_ms > 0);
}

#[test]
fn test_audit_event_serializes_status_snake_case() {
    let event = build_audit_event("sched1", 7, TaskStatus::Abandoned);
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["status"], "abandoned");
    assert_eq!(json["task_id"], 7);
}

#[test]
fn test_tracing_sink_accepts_events() {
    TracingAuditSink.record(build_audit_event("sched1", 1, TaskStatus::Running));
}
