// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the Confluence crates
//!
//! A single root [`ConfluenceError`] covers configuration mistakes caught at
//! construction time and failures of the background tasks driving producers
//! and the merger.
//!
//! # Examples
//!
//! ```
//! use confluence_core::{ConfluenceError, Result};
//!
//! fn check_capacity(capacity: usize) -> Result<()> {
//!     if capacity == 0 {
//!         return Err(ConfluenceError::invalid_config("capacity must be at least 1"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_capacity(0).is_err());
//! ```

/// Root error type for all Confluence operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfluenceError {
    /// `merge` was called without any input stream
    ///
    /// A merge over an empty input set could never yield, so it is rejected
    /// when the merged stream is constructed.
    #[error("Merge requires at least one input stream")]
    NoInputs,

    /// A configuration value is out of range
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What was wrong with the configuration
        message: String,
    },

    /// User-provided closure panicked
    ///
    /// Produced by [`catch_panic`](crate::catch_panic) when the guarded closure unwinds.
    #[error("User callback panicked: {context}")]
    CallbackPanic {
        /// The panic payload, when it was a string
        context: String,
    },

    /// A background task panicked or was aborted before finishing
    #[error("Task failed: {context}")]
    TaskFailed {
        /// Which task failed and why
        context: String,
    },

    /// Invalid state encountered
    ///
    /// An operation was attempted on input it is not defined for.
    #[error("Invalid state: {message}")]
    InvalidState {
        /// Description of the invalid state
        message: String,
    },
}

impl ConfluenceError {
    /// Create an invalid configuration error with the given message
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a callback panic error with the given context
    pub fn callback_panic(context: impl Into<String>) -> Self {
        Self::CallbackPanic {
            context: context.into(),
        }
    }

    /// Create a task failure error with the given context
    pub fn task_failed(context: impl Into<String>) -> Self {
        Self::TaskFailed {
            context: context.into(),
        }
    }

    /// Create an invalid state error with the given message
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Check if this error was raised while building a stream, before any task ran
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::NoInputs | Self::InvalidConfig { .. })
    }
}

/// Specialized Result type for Confluence operations
pub type Result<T> = std::result::Result<T, ConfluenceError>;
