// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ProducerConfig;
use confluence_core::{debug, info, CancellationToken, ConfluenceTask, Message, Result};
use futures::task::{Context, Poll};
use futures::Stream;
use pin_project::pin_project;
use std::pin::Pin;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

/// Spawns producer tasks.
pub struct Producer;

impl Producer {
    /// Validate `config`, start the producer task and return its stream.
    ///
    /// The task stops when `cancel` fires, when its limit is reached, or when
    /// the returned stream is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfluenceError::InvalidConfig`](confluence_core::ConfluenceError::InvalidConfig)
    /// for an invalid `config`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn(config: ProducerConfig, cancel: &CancellationToken) -> Result<ProducerStream> {
        config.validate()?;

        let (tx, rx) = mpsc::channel(config.capacity());
        let name = format!("producer `{}`", config.text());
        let task = ConfluenceTask::spawn(name, cancel, move |cancel| run(config, tx, cancel));

        Ok(ProducerStream {
            inner: ReceiverStream::new(rx),
            task,
        })
    }
}

async fn run(config: ProducerConfig, output: mpsc::Sender<Message>, cancel: CancellationToken) {
    let mut rng = fastrand::Rng::new();
    let mut sent = 0_usize;

    info!("producer `{}` started", config.text());

    while !config.is_exhausted(sent) {
        let message = Message::from(format!("{} #{}", config.text(), sent + 1));

        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            result = output.send(message) => {
                if result.is_err() {
                    debug!("reader of producer `{}` dropped", config.text());
                    break;
                }
            }
        }
        sent += 1;

        if config.is_exhausted(sent) {
            break;
        }

        if let Some(delay) = config.pacing().next_delay(&mut rng) {
            tokio::select! {
                biased;
                () = cancel.cancelled() => break,
                () = tokio::time::sleep(delay) => {}
            }
        }
    }

    info!("producer `{}` stopped after {sent} messages", config.text());
}

/// The read side of a running producer.
#[pin_project]
#[derive(Debug)]
pub struct ProducerStream {
    #[pin]
    inner: ReceiverStream<Message>,
    task: ConfluenceTask,
}

impl ProducerStream {
    pub fn name(&self) -> &str {
        self.task.name()
    }

    /// Ask the producer to stop. Messages already in the channel can still be read.
    pub fn cancel(&self) {
        self.task.cancel();
    }

    /// Drop the read side and wait for the producer task to finish.
    ///
    /// An unlimited producer stops at its next send once the reader is gone.
    ///
    /// # Errors
    ///
    /// Returns [`ConfluenceError::TaskFailed`](confluence_core::ConfluenceError::TaskFailed)
    /// if the producer task panicked.
    pub async fn join(self) -> Result<()> {
        let Self { inner, task } = self;
        drop(inner);
        task.join().await
    }
}

impl Stream for ProducerStream {
    type Item = Message;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().inner.poll_next(cx)
    }
}
