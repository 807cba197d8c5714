use super::RoundRobin as RoundRobinTrait;
use crate::mode::{Indexed, Mode, Plain};
use crate::stream::IntoStream;
use crate::utils;

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;
use smallvec::SmallVec;

/// A stream that takes one value from each of multiple streams in turn.
///
/// This `struct` is created by the [`round_robin`] method on the
/// [`RoundRobin`] trait. See its documentation for more.
///
/// [`round_robin`]: crate::stream::RoundRobin::round_robin
/// [`RoundRobin`]: crate::stream::RoundRobin
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct RoundRobin<S, M = Plain> {
    #[pin]
    streams: Vec<S>,
    /// Indexes of the streams that haven't ended, in source order.
    active: SmallVec<[usize; 4]>,
    pos: usize,
    done: bool,
    mode: PhantomData<M>,
}

impl<S> RoundRobin<S> {
    pub(crate) fn new(streams: Vec<S>) -> Self {
        Self {
            active: (0..streams.len()).collect(),
            streams,
            pos: 0,
            done: false,
            mode: PhantomData,
        }
    }

    /// Yield `(value, source index)` pairs instead of bare values.
    pub fn with_index(self) -> RoundRobin<S, Indexed> {
        RoundRobin {
            streams: self.streams,
            active: self.active,
            pos: self.pos,
            done: self.done,
            mode: PhantomData,
        }
    }
}

impl<S: Stream, M: Mode> Stream for RoundRobin<S, M> {
    type Item = M::Output<S::Item>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        assert!(!*this.done, "Stream should not be polled after completion");

        loop {
            if this.active.is_empty() {
                *this.done = true;
                return Poll::Ready(None);
            }
            if *this.pos >= this.active.len() {
                *this.pos = 0;
            }

            let index = this.active[*this.pos];
            let stream = utils::get_pin_mut_from_vec(this.streams.as_mut(), index);
            match stream.poll_next(cx) {
                Poll::Ready(Some(item)) => {
                    *this.pos += 1;
                    return Poll::Ready(Some(M::emit(item, index)));
                }
                Poll::Ready(None) => {
                    this.active.remove(*this.pos);
                    continue;
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

impl<S: Clone, M> Clone for RoundRobin<S, M> {
    fn clone(&self) -> Self {
        Self {
            streams: self.streams.clone(),
            active: self.active.clone(),
            pos: self.pos,
            done: self.done,
            mode: PhantomData,
        }
    }
}

impl<S: fmt::Debug, M> fmt::Debug for RoundRobin<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.active.iter().map(|&index| &self.streams[index]))
            .finish()
    }
}

impl<S: IntoStream> RoundRobinTrait for Vec<S> {
    type Item = S::Item;
    type Source = S::IntoStream;

    fn round_robin(self) -> RoundRobin<Self::Source> {
        RoundRobin::new(self.into_iter().map(IntoStream::into_stream).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use futures_lite::future::block_on;
    use futures_lite::stream::{self, StreamExt};

    #[test]
    fn round_robin_vec_3() {
        block_on(async {
            let a = stream::iter(vec![7, 1]);
            let b = stream::iter(vec![3]);
            let c = stream::iter(vec![5, 3, 4]);
            let s: Vec<_> = vec![a, b, c].round_robin().with_index().collect().await;
            assert_eq!(s, [(7, 0), (3, 1), (5, 2), (1, 0), (3, 2), (4, 2)]);
        })
    }

    #[test]
    fn round_robin_vec_skips_empty_sources() {
        block_on(async {
            let sources: Vec<_> = [vec![], vec![2, 1], vec![1], vec![]]
                .into_iter()
                .map(stream::iter)
                .collect();
            let s: Vec<_> = sources.round_robin().with_index().collect().await;
            assert_eq!(s, [(2, 1), (1, 2), (1, 1)]);
        })
    }

    #[test]
    fn round_robin_vec_waits_for_its_turn() {
        block_on(async {
            let slow = stream::iter(vec![1, 2]).then(|n| async move {
                futures_lite::future::yield_now().await;
                n
            });
            let fast = stream::iter(vec![10, 20]).then(|n| async move { n });
            let s: Vec<_> = vec![slow.boxed_local(), fast.boxed_local()]
                .round_robin()
                .collect()
                .await;
            assert_eq!(s, [1, 10, 2, 20]);
        })
    }
}
