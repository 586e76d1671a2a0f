// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Message producers for the Confluence merger.
//!
//! A [`Producer`] runs on its own task and emits `"{text} #{seq}"` messages at a
//! [`Pacing`], either forever or up to a limit, into a channel whose read side
//! is the returned [`ProducerStream`]. Every producer watches a cancellation
//! token while it sleeps and while it waits for channel space.
//!
//! A [`ProducerGroup`] tracks a set of tasks and waits for all of them.

mod pacing;
mod producer;
mod producer_config;
mod producer_group;

pub use pacing::Pacing;
pub use producer::{Producer, ProducerStream};
pub use producer_config::ProducerConfig;
pub use producer_group::ProducerGroup;
