// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concurrency sampler - producers, wait-groups, channels and fan-in
//!
//! Runs each sample in turn:
//! - two writer tasks running side by side until a deadline
//! - a wait-group of two bounded producers
//! - a closing channel drained until it ends
//! - a buffered channel filled before anyone reads it
//! - a multiplexer merging two jittered endless producers
//! - a grade check that reports a typed error instead of panicking
//!
//! Run with: `cargo run --manifest-path demos/sampler/Cargo.toml`
//! Set `RUST_LOG=debug` to see producer and merger lifecycle events.

mod channels;
mod grades;
mod multiplexer;
mod tasks;

use confluence::CancellationToken;
use tokio::select;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let shutdown = CancellationToken::new();

    select! {
        result = run(&shutdown) => result?,
        _ = signal::ctrl_c() => {
            warn!("interrupted, shutting down");
            shutdown.cancel();
        }
    }

    info!("sampler finished");
    Ok(())
}

async fn run(shutdown: &CancellationToken) -> anyhow::Result<()> {
    info!("== tasks ==");
    tasks::side_by_side(shutdown).await?;

    info!("== wait-group ==");
    tasks::wait_group(shutdown).await?;

    info!("== channel ==");
    channels::drain_until_closed(shutdown).await?;

    info!("== buffered channel ==");
    channels::buffered(shutdown).await?;

    info!("== multiplexer ==");
    multiplexer::read_ten(shutdown).await?;

    info!("== recover ==");
    grades::report();

    Ok(())
}
