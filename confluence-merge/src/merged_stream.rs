// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{MergeConfig, Multiplex};
use confluence_core::{
    debug, CancellationToken, ConfluenceError, ConfluenceTask, Message, Result,
};
use futures::stream::{Stream, StreamExt};
use futures::task::{Context, Poll};
use pin_project::pin_project;
use std::pin::Pin;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

/// The consumer side of a fan-in merge.
///
/// Yields every message forwarded by the merger task. Ends when all inputs
/// have closed or the merge was cancelled. Dropping it stops the merger task.
#[pin_project]
#[derive(Debug)]
pub struct MergedStream {
    #[pin]
    inner: ReceiverStream<Message>,
    task: ConfluenceTask,
}

impl MergedStream {
    /// Stop the merger task. Messages already handed over can still be read.
    pub fn cancel(&self) {
        self.task.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.task.is_cancelled()
    }
}

impl Stream for MergedStream {
    type Item = Message;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().inner.poll_next(cx)
    }
}

/// Merge `streams` into one [`MergedStream`] using the default [`MergeConfig`].
///
/// # Errors
///
/// Returns [`ConfluenceError::NoInputs`] when `streams` is empty.
///
/// # Panics
///
/// Panics when called outside a tokio runtime.
pub fn merge<I, S>(streams: I, cancel: &CancellationToken) -> Result<MergedStream>
where
    I: IntoIterator<Item = S>,
    S: Stream<Item = Message> + Send + 'static,
{
    merge_with_config(streams, cancel, MergeConfig::default())
}

/// Merge `streams` into one [`MergedStream`].
///
/// Returns immediately; forwarding happens on a spawned task that stops when
/// `cancel` (or the returned stream's own token) is cancelled.
///
/// # Errors
///
/// Returns [`ConfluenceError::InvalidConfig`] for an invalid `config` and
/// [`ConfluenceError::NoInputs`] when `streams` is empty.
///
/// # Panics
///
/// Panics when called outside a tokio runtime.
pub fn merge_with_config<I, S>(
    streams: I,
    cancel: &CancellationToken,
    config: MergeConfig,
) -> Result<MergedStream>
where
    I: IntoIterator<Item = S>,
    S: Stream<Item = Message> + Send + 'static,
{
    config.validate()?;

    let inputs = Multiplex::new(streams);
    if inputs.live() == 0 {
        return Err(ConfluenceError::NoInputs);
    }

    let (tx, rx) = mpsc::channel(config.output_capacity());
    debug!("merger starting with {} inputs", inputs.live());

    let task = ConfluenceTask::spawn("merger", cancel, move |cancel| {
        forward(inputs, tx, cancel)
    });

    Ok(MergedStream {
        inner: ReceiverStream::new(rx),
        task,
    })
}

async fn forward<S>(
    mut inputs: Multiplex<S>,
    output: mpsc::Sender<Message>,
    cancel: CancellationToken,
) where
    S: Stream<Item = Message>,
{
    let mut forwarded = 0_usize;

    loop {
        let permit = tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            permit = output.reserve() => match permit {
                Ok(permit) => permit,
                Err(_) => {
                    debug!("merged stream dropped by consumer");
                    break;
                }
            },
        };

        let next = tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            next = inputs.next() => next,
        };

        match next {
            Some(message) => {
                permit.send(message);
                forwarded += 1;
            }
            None => {
                debug!("all merger inputs closed");
                break;
            }
        }
    }

    debug!("merger stopped after forwarding {forwarded} messages");
}

/// Method-call form of [`merge`] for a vector of streams.
pub trait FanInExt {
    /// Merge every stream in `self` into one [`MergedStream`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfluenceError::NoInputs`] when the vector is empty.
    fn fan_in(self, cancel: &CancellationToken) -> Result<MergedStream>;
}

impl<S> FanInExt for Vec<S>
where
    S: Stream<Item = Message> + Send + 'static,
{
    fn fan_in(self, cancel: &CancellationToken) -> Result<MergedStream> {
        merge(self, cancel)
    }
}
