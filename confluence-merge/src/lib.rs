// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Fan-in merge of message streams.
//!
//! [`merge`] takes any number (at least one) of producer streams and returns a
//! single [`MergedStream`] right away. A background task waits on every input
//! at once and forwards each message as soon as it arrives.
//!
//! Ordering:
//! - messages from one producer keep their relative order
//! - messages from different producers interleave by arrival time
//! - when several inputs are ready together, the one forwarded first is picked
//!   pseudo-randomly
//!
//! A closed input is dropped from the wait-set. The merged stream ends once all
//! inputs have closed, or when its cancellation token fires.
//!
//! ```rust
//! use confluence_core::{CancellationToken, Message};
//! use confluence_merge::merge;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() -> confluence_core::Result<()> {
//! let a = stream::iter(vec![Message::from("a1"), Message::from("a2")]);
//! let b = stream::iter(vec![Message::from("b1")]);
//!
//! let merged = merge([a, b], &CancellationToken::new())?;
//! let messages: Vec<Message> = merged.collect().await;
//! assert_eq!(messages.len(), 3);
//! # Ok(())
//! # }
//! ```

mod merge_config;
mod merged_stream;
mod multiplex;

pub use merge_config::MergeConfig;
pub use merged_stream::{merge, merge_with_config, FanInExt, MergedStream};
pub use multiplex::Multiplex;
