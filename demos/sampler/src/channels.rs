// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use confluence::{CancellationToken, Pacing, Producer, ProducerConfig};
use futures::StreamExt;
use std::time::Duration;
use tracing::info;

/// Read from a producer until it closes its channel.
pub async fn drain_until_closed(shutdown: &CancellationToken) -> anyhow::Result<()> {
    let config = ProducerConfig::new("Hello World!")
        .with_pacing(Pacing::Fixed(Duration::from_millis(250)))
        .with_limit(5);
    let mut stream = Producer::spawn(config, shutdown)?;

    while let Some(message) = stream.next().await {
        info!("{message}");
    }

    info!("channel closed");
    stream.join().await?;
    Ok(())
}

/// A capacity-2 producer fills its buffer before the first read.
pub async fn buffered(shutdown: &CancellationToken) -> anyhow::Result<()> {
    let config = ProducerConfig::new("Buffered")
        .with_capacity(2)
        .with_limit(2);
    let stream = Producer::spawn(config, shutdown)?;

    tokio::time::sleep(Duration::from_millis(50)).await;

    let messages: Vec<_> = stream.collect().await;
    for message in &messages {
        info!("{message}");
    }
    Ok(())
}
