// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core building blocks shared by the Confluence crates.
//!
//! - [`Message`]: the immutable string payload carried through every stream
//! - [`ConfluenceError`] and [`Result`]: the error type used across the workspace
//! - [`ConfluenceTask`]: a spawned background task that is cancelled on drop
//! - [`catch_panic`]: turns a panicking closure into a typed error
//!
//! Logging goes through the crate-level [`debug!`], [`info!`], [`warn!`] and
//! [`error!`] macros, which forward to `tracing` when the `tracing` feature is on.

pub mod confluence_error;
pub mod confluence_task;
pub mod guard;
pub mod logging;
pub mod message;

pub use self::confluence_error::{ConfluenceError, Result};
pub use self::confluence_task::ConfluenceTask;
pub use self::guard::catch_panic;
pub use self::message::Message;
pub use tokio_util::sync::CancellationToken;

#[doc(hidden)]
#[cfg(feature = "tracing")]
pub use tracing as __tracing;
