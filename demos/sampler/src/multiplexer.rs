// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use confluence::{merge, CancellationToken, Pacing, Producer, ProducerConfig};
use futures::StreamExt;
use std::time::Duration;
use tracing::info;

const MESSAGES: usize = 10;

/// Merge two endless producers with random pacing, read ten messages, then stop everything.
pub async fn read_ten(shutdown: &CancellationToken) -> anyhow::Result<()> {
    let multiplexer = shutdown.child_token();
    let jitter = Pacing::Jitter {
        max: Duration::from_millis(2000),
    };

    let hello = Producer::spawn(
        ProducerConfig::new("Hello World!").with_pacing(jitter),
        &multiplexer,
    )?;
    let rust = Producer::spawn(
        ProducerConfig::new("Programming in Rust!").with_pacing(jitter),
        &multiplexer,
    )?;

    let mut merged = merge([hello, rust], &multiplexer)?;
    for _ in 0..MESSAGES {
        match merged.next().await {
            Some(message) => info!("received: {message}"),
            None => break,
        }
    }

    multiplexer.cancel();
    Ok(())
}
