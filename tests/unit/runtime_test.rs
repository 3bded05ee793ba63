//! Tests for tokio spawner utilities

use prometheus_task_queue::core::Spawn;
use prometheus_task_queue::runtime::tokio_spawner::TokioSpawner;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_tokio_spawner_spawn() {
    let spawner = TokioSpawner::current().expect("inside a runtime");

    let (tx, rx) = tokio::sync::oneshot::channel();
    spawner.spawn(async move {
        tx.send(123).unwrap();
    });

    let result = rx.await.expect("oneshot result");
    assert_eq!(result, 123);
}

#[test]
fn test_tokio_spawner_outside_runtime() {
    let err = TokioSpawner::current().unwrap_err();
    assert!(err.to_string().starts_with("no runtime"));
}

#[test]
fn test_tokio_spawner_from_handle() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    let spawner = TokioSpawner::new(runtime.handle().clone());

    let (tx, rx) = tokio::sync::oneshot::channel();
    spawner.spawn(async move {
        tx.send("ran").unwrap();
    });
    assert_eq!(runtime.block_on(rx).unwrap(), "ran");
}
