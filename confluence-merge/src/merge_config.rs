// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use confluence_core::{ConfluenceError, Result};

/// Settings for [`merge_with_config`](crate::merge_with_config).
///
/// The default output capacity is 1. The merger reserves an output slot before
/// taking a message from any input, so with capacity 1 at most one message
/// waits between the merger and the consumer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeConfig {
    output_capacity: usize,
}

impl MergeConfig {
    #[must_use]
    pub const fn with_output_capacity(mut self, capacity: usize) -> Self {
        self.output_capacity = capacity;
        self
    }

    #[must_use]
    pub const fn output_capacity(&self) -> usize {
        self.output_capacity
    }

    /// # Errors
    ///
    /// Returns [`ConfluenceError::InvalidConfig`] when the output capacity is zero.
    pub fn validate(&self) -> Result<()> {
        if self.output_capacity == 0 {
            return Err(ConfluenceError::invalid_config(
                "merge output capacity must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self { output_capacity: 1 }
    }
}
