// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use confluence_core::{CancellationToken, ConfluenceError, ConfluenceTask};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn explode() {
    panic!("producer exploded");
}

#[tokio::test]
async fn test_join_waits_for_completion() -> anyhow::Result<()> {
    // Arrange
    let parent = CancellationToken::new();
    let done = Arc::new(AtomicBool::new(false));
    let done_clone = done.clone();

    // Act
    let task = ConfluenceTask::spawn("worker", &parent, |_cancel| async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        done_clone.store(true, Ordering::SeqCst);
    });
    task.join().await?;

    // Assert
    assert!(done.load(Ordering::SeqCst));
    Ok(())
}

#[tokio::test]
async fn test_parent_cancellation_reaches_task() -> anyhow::Result<()> {
    // Arrange
    let parent = CancellationToken::new();
    let task = ConfluenceTask::spawn("waiter", &parent, |cancel| async move {
        cancel.cancelled().await;
    });

    // Act
    parent.cancel();

    // Assert
    tokio::time::timeout(Duration::from_millis(500), task.join()).await??;
    Ok(())
}

#[tokio::test]
async fn test_task_cancel_does_not_cancel_parent() {
    let parent = CancellationToken::new();
    let task = ConfluenceTask::spawn("child", &parent, |cancel| async move {
        cancel.cancelled().await;
    });

    task.cancel();

    assert!(task.is_cancelled());
    assert!(!parent.is_cancelled());
}

#[tokio::test]
async fn test_drop_cancels_task() -> anyhow::Result<()> {
    // Arrange
    let parent = CancellationToken::new();
    let iterations = Arc::new(AtomicUsize::new(0));
    let iterations_clone = iterations.clone();
    let (stopped_tx, stopped_rx) = tokio::sync::oneshot::channel();

    let task = ConfluenceTask::spawn("loop", &parent, |cancel| async move {
        while !cancel.is_cancelled() {
            iterations_clone.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        let _ = stopped_tx.send(());
    });
    assert_eq!(task.name(), "loop");

    // Act
    drop(task);

    // Assert
    tokio::time::timeout(Duration::from_millis(500), stopped_rx).await??;
    Ok(())
}

#[tokio::test]
async fn test_panicking_task_reports_failure() {
    let parent = CancellationToken::new();
    let task = ConfluenceTask::spawn("faulty", &parent, |_cancel| async move { explode() });

    let result = task.join().await;

    assert_eq!(
        result,
        Err(ConfluenceError::task_failed(
            "faulty panicked: producer exploded"
        ))
    );
}

#[tokio::test]
async fn test_join_returns_task_output() -> anyhow::Result<()> {
    let parent = CancellationToken::new();
    let task = ConfluenceTask::spawn("sum", &parent, |_cancel| async move { 40 + 2 });

    assert_eq!(task.join().await?, 42);
    Ok(())
}
