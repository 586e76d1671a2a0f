// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the Confluence crates.
//!
//! This crate is for development and testing only.
//!
//! - [`TestChannel`]: an unbounded sender paired with the stream reading from it,
//!   so a test can push messages imperatively into a merge
//! - [`helpers`]: async assertions over streams
//! - [`interleaving`]: checks that a merged output is a valid interleaving of its sources
//!
//! # Example
//!
//! ```rust
//! use confluence_test_utils::{interleaving::is_interleaving_of, messages};
//!
//! let merged = messages(&["a1", "b1", "a2", "b2", "b3"]);
//! assert!(is_interleaving_of(&merged, &[&["a1", "a2"], &["b1", "b2", "b3"]]));
//! assert!(!is_interleaving_of(&merged, &[&["a2", "a1"], &["b1", "b2", "b3"]]));
//! ```

pub mod helpers;
pub mod interleaving;
pub mod test_channel;

pub use helpers::{
    assert_no_element_emitted, collect_with_timeout, expect_next_message, finite_stream,
};
pub use test_channel::{TestChannel, TestChannels};

use confluence_core::Message;

/// Build a vector of messages from string literals.
#[must_use]
pub fn messages(texts: &[&str]) -> Vec<Message> {
    texts.iter().copied().map(Message::from).collect()
}
