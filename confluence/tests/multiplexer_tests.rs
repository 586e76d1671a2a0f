// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use confluence::prelude::*;
use confluence::{merge_with_config, MergeConfig};
use confluence_test_utils::collect_with_timeout;
use confluence_test_utils::interleaving::from_source;
use futures::StreamExt;
use std::time::Duration;

fn sequence_numbers(messages: &[Message], text: &str) -> Vec<u64> {
    from_source(messages, text)
        .into_iter()
        .filter_map(|m| m.rsplit('#').next()?.parse().ok())
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_two_endless_jittered_producers_read_ten_then_cancel() -> anyhow::Result<()> {
    // Arrange
    let shutdown = CancellationToken::new();
    let jitter = Pacing::Jitter {
        max: Duration::from_millis(2000),
    };
    let hello = Producer::spawn(
        ProducerConfig::new("Hello World!").with_pacing(jitter),
        &shutdown,
    )?;
    let rust = Producer::spawn(
        ProducerConfig::new("Programming in Rust!").with_pacing(jitter),
        &shutdown,
    )?;

    // Act
    let mut merged = merge([hello, rust], &shutdown)?;
    let first_ten: Vec<Message> = (&mut merged).take(10).collect().await;
    shutdown.cancel();
    let rest = collect_with_timeout(merged, Duration::from_secs(60)).await;

    // Assert
    assert_eq!(first_ten.len(), 10);
    assert!(rest.len() <= 1, "only a reserved message may remain: {rest:?}");

    let mut all = first_ten;
    all.extend(rest);
    for text in ["Hello World!", "Programming in Rust!"] {
        let seq = sequence_numbers(&all, text);
        let expected: Vec<u64> = (1..=seq.len() as u64).collect();
        assert_eq!(seq, expected, "{text} lost or reordered messages");
    }
    Ok(())
}

#[tokio::test]
async fn test_limited_producers_are_fully_merged() -> anyhow::Result<()> {
    // Arrange
    let shutdown = CancellationToken::new();
    let streams = ["a", "b", "c"]
        .into_iter()
        .map(|text| Producer::spawn(ProducerConfig::new(text).with_limit(50), &shutdown))
        .collect::<confluence::Result<Vec<_>>>()?;

    // Act
    let merged = streams.fan_in(&shutdown)?;
    let result = collect_with_timeout(merged, Duration::from_secs(5)).await;

    // Assert
    assert_eq!(result.len(), 150);
    for text in ["a", "b", "c"] {
        let expected: Vec<u64> = (1..=50).collect();
        assert_eq!(sequence_numbers(&result, &format!("{text} ")), expected);
    }
    Ok(())
}

#[tokio::test]
async fn test_buffered_producers_with_buffered_output() -> anyhow::Result<()> {
    // Arrange
    let shutdown = CancellationToken::new();
    let left = Producer::spawn(
        ProducerConfig::new("left").with_limit(10).with_capacity(4),
        &shutdown,
    )?;
    let right = Producer::spawn(
        ProducerConfig::new("right").with_limit(10).with_capacity(4),
        &shutdown,
    )?;

    // Act
    let merged = merge_with_config(
        [left, right],
        &shutdown,
        MergeConfig::default().with_output_capacity(8),
    )?;
    let result = collect_with_timeout(merged, Duration::from_secs(5)).await;

    // Assert
    assert_eq!(result.len(), 20);
    assert_eq!(sequence_numbers(&result, "left"), (1..=10).collect::<Vec<_>>());
    assert_eq!(sequence_numbers(&result, "right"), (1..=10).collect::<Vec<_>>());
    Ok(())
}
