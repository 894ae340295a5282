//! Lazy traversal of the live elements.
//!
//! [`Range`] is pull-based: nothing runs until the caller asks for the next
//! element, and dropping it early costs nothing. [`Stream`] keeps the
//! producer/consumer shape instead. A scoped producer thread hands over one
//! element at a time through a zero-capacity channel and blocks until the
//! consumer takes it.

use std::iter::FusedIterator;
use std::panic;

use crossbeam::channel::{self, Receiver};

use crate::DynamicArray;

/// Finite, non-restartable iterator over the live elements of an array.
pub struct Range<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Range<'_, T> {}

impl<T> FusedIterator for Range<'_, T> {}

/// Consumer end of [`DynamicArray::stream`].
///
/// Yields elements in order and returns `None` once the producer has sent
/// the last one and closed the channel.
pub struct Stream<'a, T> {
    rx: Receiver<&'a T>,
}

impl<'a, T> Iterator for Stream<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.rx.recv().ok()
    }
}

impl<T> DynamicArray<T> {
    /// Lazily walks `[0, len)`.
    pub fn range(&self) -> Range<'_, T> {
        Range { inner: self.iter() }
    }

    /// Runs `consume` against a [`Stream`] fed by a producer thread.
    ///
    /// Each send is a rendezvous, so the producer never runs ahead of the
    /// consumer. When `consume` returns, the stream is dropped; a producer
    /// still blocked on a send then sees the disconnect and exits, which makes
    /// stopping early safe.
    pub fn stream<R, F>(&self, consume: F) -> R
    where
        T: Sync,
        F: FnOnce(&mut Stream<'_, T>) -> R,
    {
        let (tx, rx) = channel::bounded(0);
        let mut stream = Stream { rx };

        let outcome = crossbeam::scope(|s| {
            s.spawn(move |_| {
                for item in self.iter() {
                    if tx.send(item).is_err() {
                        log::trace!("stream consumer hung up early");
                        return;
                    }
                }
                // tx dropped here, closing the channel
            });

            let result = consume(&mut stream);
            drop(stream);
            result
        });

        outcome.unwrap_or_else(|payload| panic::resume_unwind(payload))
    }
}
