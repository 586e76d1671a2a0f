// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use confluence_core::{CancellationToken, ConfluenceError, Message};
use confluence_producer::{Pacing, ProducerConfig, ProducerGroup};
use confluence_test_utils::interleaving::from_source;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

fn crash() -> confluence_core::Result<()> {
    panic!("goroutine crashed")
}

#[tokio::test]
async fn test_wait_returns_after_every_producer_finished() -> anyhow::Result<()> {
    // Arrange
    let seen: Arc<Mutex<Vec<Message>>> = Arc::default();
    let mut group = ProducerGroup::new(&CancellationToken::new());

    for text in ["Hello World!", "Programming in Rust!"] {
        let seen = seen.clone();
        group.drain(ProducerConfig::new(text).with_limit(5), move |message| {
            seen.lock().expect("lock poisoned").push(message);
        })?;
    }
    assert_eq!(group.len(), 2);

    // Act
    tokio::time::timeout(TIMEOUT, group.wait()).await??;

    // Assert
    let seen = seen.lock().expect("lock poisoned");
    assert_eq!(seen.len(), 10);
    assert_eq!(
        from_source(&seen, "Hello"),
        (1..=5).map(|n| format!("Hello World! #{n}")).collect::<Vec<_>>()
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_stops_endless_producers() -> anyhow::Result<()> {
    // Arrange
    let mut group = ProducerGroup::new(&CancellationToken::new());
    for text in ["left", "right"] {
        let config = ProducerConfig::new(text).with_pacing(Pacing::Fixed(Duration::from_secs(1)));
        group.drain(config, |_| {})?;
    }
    tokio::time::sleep(Duration::from_secs(3)).await;

    // Act & Assert
    group.shutdown().await?;
    Ok(())
}

#[tokio::test]
async fn test_parent_cancellation_reaches_group() -> anyhow::Result<()> {
    // Arrange
    let parent = CancellationToken::new();
    let mut group = ProducerGroup::new(&parent);
    group.run("waiter", |cancel| async move {
        cancel.cancelled().await;
        Ok(())
    });

    // Act
    parent.cancel();

    // Assert
    assert!(group.cancel_token().is_cancelled());
    tokio::time::timeout(TIMEOUT, group.wait()).await??;
    Ok(())
}

#[tokio::test]
async fn test_wait_reports_first_task_error_after_joining_all() -> anyhow::Result<()> {
    // Arrange
    let finished = Arc::new(Mutex::new(false));
    let finished_clone = finished.clone();
    let mut group = ProducerGroup::new(&CancellationToken::new());

    group.run("failing", |_cancel| async move {
        Err(ConfluenceError::invalid_state("average is exactly 6"))
    });
    group.run("slow", move |_cancel| async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        *finished_clone.lock().expect("lock poisoned") = true;
        Ok(())
    });

    // Act
    let result = tokio::time::timeout(TIMEOUT, group.wait()).await?;

    // Assert
    assert_eq!(
        result,
        Err(ConfluenceError::invalid_state("average is exactly 6"))
    );
    assert!(*finished.lock().expect("lock poisoned"));
    Ok(())
}

#[tokio::test]
async fn test_panicking_task_is_reported_as_failed() -> anyhow::Result<()> {
    let mut group = ProducerGroup::new(&CancellationToken::new());
    group.run("faulty", |_cancel| async move { crash() });

    let result = tokio::time::timeout(TIMEOUT, group.wait()).await?;

    assert_eq!(
        result,
        Err(ConfluenceError::task_failed("faulty panicked: goroutine crashed"))
    );
    Ok(())
}

#[tokio::test]
async fn test_invalid_config_spawns_nothing() {
    let mut group = ProducerGroup::new(&CancellationToken::new());

    let result = group.drain(ProducerConfig::new("broken").with_capacity(0), |_| {});

    assert!(matches!(result, Err(ConfluenceError::InvalidConfig { .. })));
    assert!(group.is_empty());
}
