// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Producer, ProducerConfig};
use confluence_core::{warn, CancellationToken, ConfluenceTask, Message, Result};
use futures::StreamExt;
use std::future::Future;

/// Wait-group over a set of tasks sharing one cancellation token.
///
/// # Example
///
/// ```rust
/// use confluence_core::CancellationToken;
/// use confluence_producer::{ProducerConfig, ProducerGroup};
/// use std::sync::{Arc, Mutex};
///
/// # #[tokio::main]
/// # async fn main() -> confluence_core::Result<()> {
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let mut group = ProducerGroup::new(&CancellationToken::new());
///
/// for text in ["Hello World!", "Programming in Rust!"] {
///     let seen = seen.clone();
///     group.drain(ProducerConfig::new(text).with_limit(5), move |message| {
///         seen.lock().unwrap().push(message);
///     })?;
/// }
///
/// group.wait().await?;
/// assert_eq!(seen.lock().unwrap().len(), 10);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ProducerGroup {
    cancel: CancellationToken,
    tasks: Vec<ConfluenceTask<Result<()>>>,
}

impl ProducerGroup {
    /// A group whose token is a child of `parent`.
    pub fn new(parent: &CancellationToken) -> Self {
        Self {
            cancel: parent.child_token(),
            tasks: Vec::new(),
        }
    }

    /// Track a task. It receives a token that fires on [`shutdown`](Self::shutdown)
    /// or when the parent token is cancelled.
    pub fn run<F, Fut>(&mut self, name: impl Into<String>, f: F)
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        self.tasks.push(ConfluenceTask::spawn(name, &self.cancel, f));
    }

    /// Start a producer and a tracked task handing each of its messages to `on_message`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfluenceError::InvalidConfig`](confluence_core::ConfluenceError::InvalidConfig)
    /// for an invalid `config`; nothing is spawned in that case.
    pub fn drain<F>(&mut self, config: ProducerConfig, mut on_message: F) -> Result<()>
    where
        F: FnMut(Message) + Send + 'static,
    {
        let name = format!("drain `{}`", config.text());
        let mut stream = Producer::spawn(config, &self.cancel)?;

        self.run(name, move |_cancel| async move {
            while let Some(message) = stream.next().await {
                on_message(message);
            }
            stream.join().await
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Wait for every tracked task to finish.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by a task, or
    /// [`ConfluenceError::TaskFailed`](confluence_core::ConfluenceError::TaskFailed)
    /// for a task that panicked. All tasks are awaited before returning.
    pub async fn wait(mut self) -> Result<()> {
        let mut first_error = None;

        for task in self.tasks.drain(..) {
            let name = task.name().to_string();
            if let Err(error) = task.join().await.and_then(|outcome| outcome) {
                warn!("{name} failed: {error}");
                first_error.get_or_insert(error);
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    /// Cancel every tracked task, then wait for them.
    ///
    /// # Errors
    ///
    /// Same as [`wait`](Self::wait).
    pub async fn shutdown(self) -> Result<()> {
        self.cancel.cancel();
        self.wait().await
    }
}
