// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use confluence_core::Message;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// A test channel that combines the sender and stream into a single struct.
/// Automatically converts the receiver into an UnboundedReceiverStream.
pub struct TestChannel {
    pub sender: mpsc::UnboundedSender<Message>,
    pub stream: UnboundedReceiverStream<Message>,
}

impl TestChannel {
    /// Creates a new test channel with unbounded capacity.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let stream = UnboundedReceiverStream::new(receiver);
        Self { sender, stream }
    }

    /// A stream that yields `texts` in order and then ends, backed by a
    /// channel whose sender is already dropped.
    #[must_use]
    pub fn closed_with(texts: &[&str]) -> UnboundedReceiverStream<Message> {
        let (sender, stream) = Self::new().split();
        for text in texts {
            // The receiver is still alive in `stream`, so this cannot fail.
            let _ = sender.send(Message::from(*text));
        }
        stream
    }

    /// Send a message through the channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream has been dropped.
    pub fn send(&self, text: impl Into<Message>) -> Result<(), mpsc::error::SendError<Message>> {
        self.sender.send(text.into())
    }

    /// Separate the sender from the stream.
    #[must_use]
    pub fn split(
        self,
    ) -> (
        mpsc::UnboundedSender<Message>,
        UnboundedReceiverStream<Message>,
    ) {
        (self.sender, self.stream)
    }
}

impl Default for TestChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to create multiple test channels at once.
pub struct TestChannels;

impl TestChannels {
    /// Creates three test channels.
    #[must_use]
    pub fn three() -> (TestChannel, TestChannel, TestChannel) {
        (TestChannel::new(), TestChannel::new(), TestChannel::new())
    }

    /// Creates two test channels.
    #[must_use]
    pub fn two() -> (TestChannel, TestChannel) {
        (TestChannel::new(), TestChannel::new())
    }

    /// Creates `count` senders and the matching streams.
    #[must_use]
    pub fn many(
        count: usize,
    ) -> (
        Vec<mpsc::UnboundedSender<Message>>,
        Vec<UnboundedReceiverStream<Message>>,
    ) {
        (0..count).map(|_| TestChannel::new().split()).unzip()
    }
}
