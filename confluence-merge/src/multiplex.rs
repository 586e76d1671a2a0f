// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use confluence_core::debug;
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Wait-any over a fixed set of streams.
///
/// Every poll starts at a pseudo-random input and visits the live inputs in
/// rotation; the first one with an item ready wins. An input that ends is
/// removed from the wait-set and never polled again. The multiplex ends once
/// no input is left.
pub struct Multiplex<S> {
    streams: Vec<Option<Pin<Box<S>>>>,
    live: usize,
    rng: fastrand::Rng,
}

impl<S> Multiplex<S>
where
    S: Stream,
{
    #[must_use]
    pub fn new<I>(streams: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Self::with_rng(streams, fastrand::Rng::new())
    }

    /// Same as [`Multiplex::new`] with a fixed seed, for reproducible selection.
    #[must_use]
    pub fn with_seed<I>(streams: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Self::with_rng(streams, fastrand::Rng::with_seed(seed))
    }

    fn with_rng<I>(streams: I, rng: fastrand::Rng) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let streams: Vec<_> = streams.into_iter().map(|s| Some(Box::pin(s))).collect();
        let live = streams.len();

        Self { streams, live, rng }
    }

    /// Number of inputs still in the wait-set.
    #[must_use]
    pub fn live(&self) -> usize {
        self.live
    }
}

impl<S> Stream for Multiplex<S>
where
    S: Stream,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = Pin::into_inner(self);
        let count = this.streams.len();

        if this.live == 0 {
            return Poll::Ready(None);
        }

        let start = this.rng.usize(..count);

        for offset in 0..count {
            let index = (start + offset) % count;
            let Some(stream) = this.streams[index].as_mut() else {
                continue;
            };

            match stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(item)) => return Poll::Ready(Some(item)),
                Poll::Ready(None) => {
                    this.streams[index] = None;
                    this.live -= 1;
                    debug!("input {index} closed, {} still open", this.live);
                }
                Poll::Pending => {}
            }
        }

        if this.live == 0 {
            Poll::Ready(None)
        } else {
            Poll::Pending
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Inputs may be unbounded; only report a known end.
        if self.live == 0 {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::stream::{self, StreamExt};

    #[test]
    fn empty_multiplex_ends_immediately() {
        let mut multiplex = Multiplex::new(Vec::<stream::Iter<std::vec::IntoIter<u8>>>::new());
        assert_eq!(multiplex.live(), 0);
        assert_eq!(block_on(multiplex.next()), None);
    }

    #[test]
    fn closed_inputs_leave_the_wait_set() {
        let mut multiplex = Multiplex::with_seed(
            vec![stream::iter(vec![1]), stream::iter(vec![]), stream::iter(vec![2, 3])],
            7,
        );

        let items: Vec<i32> = block_on((&mut multiplex).collect());

        assert_eq!(items.len(), 3);
        assert_eq!(multiplex.live(), 0);
    }

    #[test]
    fn pending_input_does_not_end_the_multiplex() {
        let mut multiplex = Multiplex::with_seed(
            vec![
                stream::pending::<u8>().boxed(),
                stream::iter(vec![9]).boxed(),
            ],
            1,
        );

        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);

        assert_eq!(multiplex.poll_next_unpin(&mut cx), Poll::Ready(Some(9)));
        assert_eq!(multiplex.poll_next_unpin(&mut cx), Poll::Pending);
        assert_eq!(multiplex.live(), 1);
    }
}
