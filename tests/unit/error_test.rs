//! Tests for error types

use prometheus_task_queue::core::{SchedulerError, TaskError};

#[test]
fn test_config_error() {
    let err = SchedulerError::Config("missing field".to_string());
    assert_eq!(format!("{}", err), "config error: missing field");
}

#[test]
fn test_no_runtime_error() {
    let err = SchedulerError::NoRuntime("not inside a runtime".to_string());
    assert_eq!(format!("{}", err), "no runtime: not inside a runtime");
}

#[test]
fn test_task_failed_error() {
    let err: TaskError<String> = TaskError::Failed("disk full".to_string());
    assert_eq!(format!("{}", err), "task failed: disk full");
    assert!(!err.is_abandoned());
    assert_eq!(err.into_failure(), Some("disk full".to_string()));
}

#[test]
fn test_task_abandoned_error() {
    let err: TaskError<String> = TaskError::Abandoned;
    assert_eq!(format!("{}", err), "task abandoned before settling");
    assert!(err.is_abandoned());
    assert_eq!(err.into_failure(), None);
}
