// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use confluence_core::Message;
use futures::stream::{self, StreamExt};
use futures::Stream;
use std::time::Duration;
use tokio::time::sleep;

pub async fn assert_no_element_emitted<S>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = Message> + Unpin,
{
    tokio::select! {
        message = stream.next() => {
            panic!("Unexpected message emitted, expected no output: {message:?}");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

pub async fn expect_next_message<S>(stream: &mut S, expected: &str)
where
    S: Stream<Item = Message> + Unpin,
{
    let message = stream.next().await.expect("expected next message");
    assert_eq!(message, expected);
}

/// Collect the stream until it ends.
///
/// # Panics
///
/// Panics if the stream does not end within `timeout`.
pub async fn collect_with_timeout<S>(stream: S, timeout: Duration) -> Vec<Message>
where
    S: Stream<Item = Message>,
{
    tokio::time::timeout(timeout, stream.collect::<Vec<_>>())
        .await
        .expect("stream did not end in time")
}

/// A stream yielding `texts` in order, then ending.
pub fn finite_stream(texts: &[&str]) -> impl Stream<Item = Message> + Send + Unpin + 'static {
    stream::iter(crate::messages(texts))
}
