// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use confluence::{CancellationToken, ConfluenceTask, Pacing, ProducerConfig, ProducerGroup};
use std::time::Duration;
use tracing::info;

const TICK: Duration = Duration::from_millis(250);

/// Two writers run concurrently until the deadline cancels them.
pub async fn side_by_side(shutdown: &CancellationToken) -> anyhow::Result<()> {
    let background = ConfluenceTask::spawn("background writer", shutdown, |cancel| {
        write_until_cancelled("Hello World!", cancel)
    });
    let foreground = ConfluenceTask::spawn("foreground writer", shutdown, |cancel| {
        write_until_cancelled("Programming in Rust!", cancel)
    });

    tokio::time::sleep(TICK * 4).await;
    background.cancel();
    foreground.cancel();

    background.join().await?;
    foreground.join().await?;
    Ok(())
}

async fn write_until_cancelled(text: &'static str, cancel: CancellationToken) {
    let mut ticker = tokio::time::interval(TICK);
    loop {
        tokio::select! {
            _ = ticker.tick() => info!("{text}"),
            () = cancel.cancelled() => break,
        }
    }
}

/// Two bounded producers, waited on as a group.
pub async fn wait_group(shutdown: &CancellationToken) -> anyhow::Result<()> {
    let mut group = ProducerGroup::new(shutdown);

    for text in ["Hello World!", "Programming in Rust!"] {
        let config = ProducerConfig::new(text)
            .with_pacing(Pacing::Fixed(TICK))
            .with_limit(5);
        group.drain(config, |message| info!("{message}"))?;
    }

    info!("waiting for {} producers", group.len());
    group.wait().await?;
    Ok(())
}
