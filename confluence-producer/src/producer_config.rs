// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Pacing;
use confluence_core::{ConfluenceError, Result};

/// Settings for one [`Producer`](crate::Producer).
///
/// # Example
///
/// ```
/// use confluence_producer::{Pacing, ProducerConfig};
/// use std::time::Duration;
///
/// let config = ProducerConfig::new("Hello World!")
///     .with_pacing(Pacing::Fixed(Duration::from_secs(1)))
///     .with_limit(5);
///
/// assert_eq!(config.limit(), Some(5));
/// assert_eq!(config.capacity(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProducerConfig {
    text: String,
    pacing: Pacing,
    limit: Option<usize>,
    capacity: usize,
}

impl ProducerConfig {
    /// A producer of `text` that never stops on its own, emits without delay
    /// and has a channel capacity of 1.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pacing: Pacing::Immediate,
            limit: None,
            capacity: 1,
        }
    }

    #[must_use]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Close the stream after `limit` messages.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of messages the channel holds before the producer waits for the reader.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// # Errors
    ///
    /// Returns [`ConfluenceError::InvalidConfig`] when the capacity is zero.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(ConfluenceError::invalid_config(format!(
                "producer `{}` capacity must be at least 1",
                self.text
            )));
        }
        Ok(())
    }

    pub(crate) fn is_exhausted(&self, sent: usize) -> bool {
        self.limit.is_some_and(|limit| sent >= limit)
    }
}
