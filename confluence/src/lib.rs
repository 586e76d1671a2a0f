// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Confluence
//!
//! Fan-in for async Rust: many producer streams of messages merged into one.
//!
//! ## Overview
//!
//! - [`Producer`] spawns a paced task and hands back its [`ProducerStream`]
//! - [`merge`] combines any number of streams into one [`MergedStream`]
//! - [`ProducerGroup`] waits on a set of tasks
//! - a [`CancellationToken`] reaches every producer and merger spawned from it
//!
//! Messages from one producer stay in order; messages from different producers
//! interleave in arrival order.
//!
//! ## Quick Start
//!
//! ```rust
//! use confluence::prelude::*;
//! use futures::StreamExt;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> confluence::Result<()> {
//!     let shutdown = CancellationToken::new();
//!     let jitter = Pacing::Jitter { max: Duration::from_millis(20) };
//!
//!     let hello = Producer::spawn(ProducerConfig::new("Hello World!").with_pacing(jitter), &shutdown)?;
//!     let rust = Producer::spawn(ProducerConfig::new("Programming in Rust!").with_pacing(jitter), &shutdown)?;
//!
//!     let merged = merge([hello, rust], &shutdown)?;
//!     let first_ten: Vec<Message> = merged.take(10).collect().await;
//!     assert_eq!(first_ten.len(), 10);
//!
//!     shutdown.cancel();
//!     Ok(())
//! }
//! ```

pub use confluence_core::{
    catch_panic, CancellationToken, ConfluenceError, ConfluenceTask, Message, Result,
};
pub use confluence_merge::{
    merge, merge_with_config, FanInExt, MergeConfig, MergedStream, Multiplex,
};
pub use confluence_producer::{Pacing, Producer, ProducerConfig, ProducerGroup, ProducerStream};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        merge, CancellationToken, FanInExt, Message, Pacing, Producer, ProducerConfig,
        ProducerGroup,
    };
}
