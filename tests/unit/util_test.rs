//! Tests for utility functions

use prometheus_task_queue::util::{init_tracing, now_ms};

#[test]
fn test_now_ms_is_monotonic_enough() {
    let first = now_ms();
    let second = now_ms();
    assert!(first > 0);
    assert!(second >= first);
}

#[test]
fn test_init_tracing_installs_once() {
    let _ = init_tracing();
    assert!(!init_tracing());
}
