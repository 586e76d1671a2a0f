// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Background task handle with cooperative cancellation.

use crate::guard::panic_message;
use crate::{ConfluenceError, Result};
use futures::FutureExt;
use std::fmt;
use std::future::Future;
use std::panic::{resume_unwind, AssertUnwindSafe};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Tokio task handle that cancels its task when dropped.
///
/// `T` is the task's output, returned by [`join`](ConfluenceTask::join).
/// The spawned closure receives a child of the parent token. Cancelling the
/// parent stops every task spawned from it; cancelling or dropping one
/// `ConfluenceTask` stops only that task.
///
/// A panic inside the task is logged at error level when it happens, then
/// reported by [`join`](ConfluenceTask::join) as [`ConfluenceError::TaskFailed`].
///
/// # Example
///
/// ```rust
/// use confluence_core::{CancellationToken, ConfluenceTask};
///
/// # #[tokio::main]
/// # async fn main() {
/// let shutdown = CancellationToken::new();
/// let task = ConfluenceTask::spawn("ticker", &shutdown, |cancel| async move {
///     cancel.cancelled().await;
/// });
///
/// shutdown.cancel();
/// assert!(task.join().await.is_ok());
/// # }
/// ```
pub struct ConfluenceTask<T = ()> {
    name: String,
    cancel: CancellationToken,
    handle: Option<JoinHandle<T>>,
}

impl<T> ConfluenceTask<T>
where
    T: Send + 'static,
{
    /// Spawn `f` on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime, like `tokio::spawn`.
    pub fn spawn<F, Fut>(name: impl Into<String>, parent: &CancellationToken, f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = T> + Send + 'static,
    {
        let name = name.into();
        let cancel = parent.child_token();
        let task = AssertUnwindSafe(f(cancel.clone())).catch_unwind();
        let task_name = name.clone();

        let handle = tokio::spawn(async move {
            match task.await {
                Ok(output) => output,
                Err(payload) => {
                    crate::error!("{task_name} panicked: {}", panic_message(payload.as_ref()));
                    resume_unwind(payload)
                }
            }
        });

        Self {
            name,
            cancel,
            handle: Some(handle),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Signal the task to stop. It exits at its next cancellation checkpoint.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Wait for the task to finish without cancelling it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfluenceError::TaskFailed`] if the task panicked or was aborted.
    pub async fn join(mut self) -> Result<T> {
        let Some(handle) = self.handle.take() else {
            return Err(ConfluenceError::task_failed(format!(
                "{} was already joined",
                self.name
            )));
        };

        handle.await.map_err(|join_error| {
            if join_error.is_panic() {
                let payload = join_error.into_panic();
                ConfluenceError::task_failed(format!(
                    "{} panicked: {}",
                    self.name,
                    panic_message(payload.as_ref())
                ))
            } else {
                ConfluenceError::task_failed(format!("{} was aborted", self.name))
            }
        })
    }
}

impl<T> fmt::Debug for ConfluenceTask<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfluenceTask")
            .field("name", &self.name)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}

impl<T> Drop for ConfluenceTask<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
