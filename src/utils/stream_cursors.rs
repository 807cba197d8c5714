use alloc::vec::Vec;
use core::fmt;
use core::pin::Pin;
use core::task::{Context, Poll};

use fixedbitset::FixedBitSet;
use futures_core::Stream;
use pin_project::pin_project;
use smallvec::SmallVec;

use super::{get_pin_mut_from_vec, select_min};
use crate::compare::{CompareError, Comparator};

/// One value of lookahead for each of a set of streams.
///
/// Streams stay pinned in place for their whole life. `active` lists the
/// indexes of the streams that haven't ended yet, in source order.
#[pin_project]
pub(crate) struct StreamCursors<S: Stream> {
    #[pin]
    streams: Vec<S>,
    buffers: Vec<Option<S::Item>>,
    active: SmallVec<[usize; 4]>,
}

impl<S: Stream> StreamCursors<S> {
    pub(crate) fn new(streams: Vec<S>) -> Self {
        let len = streams.len();
        Self {
            streams,
            buffers: (0..len).map(|_| None).collect(),
            active: (0..len).collect(),
        }
    }

    /// Number of streams that haven't ended, as far as we know.
    pub(crate) fn len(&self) -> usize {
        self.active.len()
    }

    /// Poll every live stream whose buffer is empty. Streams that end are
    /// retired. Resolves once every live stream holds a value.
    pub(crate) fn poll_fill(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let mut this = self.project();
        let mut pending = false;
        let mut pos = 0;

        while let Some(&index) = this.active.get(pos) {
            if this.buffers[index].is_some() {
                pos += 1;
                continue;
            }

            let stream = get_pin_mut_from_vec(this.streams.as_mut(), index);
            match stream.poll_next(cx) {
                Poll::Ready(Some(item)) => {
                    this.buffers[index] = Some(item);
                    pos += 1;
                }
                Poll::Ready(None) => {
                    this.active.remove(pos);
                }
                Poll::Pending => {
                    pending = true;
                    pos += 1;
                }
            }
        }

        if pending {
            Poll::Pending
        } else {
            Poll::Ready(())
        }
    }

    /// Position of the stream holding the smallest buffered value.
    pub(crate) fn select_min<C>(
        &self,
        compare: &mut C,
        demote: Option<&FixedBitSet>,
    ) -> Result<Option<usize>, CompareError>
    where
        S::Item: fmt::Debug,
        C: Comparator<S::Item>,
    {
        let candidates = self
            .active
            .iter()
            .filter_map(|&index| self.buffers[index].as_ref().map(|value| (index, value)));
        select_min(candidates, compare, demote)
    }

    /// Take the buffered value of the stream at `pos`, together with its
    /// source index. The buffer is refilled by the next `poll_fill`.
    pub(crate) fn take(self: Pin<&mut Self>, pos: usize) -> Option<(S::Item, usize)> {
        let this = self.project();
        let index = *this.active.get(pos)?;
        let value = this.buffers[index].take()?;
        Some((value, index))
    }
}

impl<S> Clone for StreamCursors<S>
where
    S: Stream + Clone,
    S::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            streams: self.streams.clone(),
            buffers: self.buffers.clone(),
            active: self.active.clone(),
        }
    }
}

impl<S> fmt::Debug for StreamCursors<S>
where
    S: Stream + fmt::Debug,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.active
                    .iter()
                    .map(|&index| (index, (&self.streams[index], &self.buffers[index]))),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Natural;
    use alloc::vec;
    use futures_lite::future::{self, block_on};
    use futures_lite::{stream, StreamExt};

    #[test]
    fn fill_retires_ended_streams() {
        block_on(async {
            let streams = vec![stream::iter(vec![]), stream::iter(vec![3, 4]), stream::iter(vec![1])];
            let mut cursors = core::pin::pin!(StreamCursors::new(streams));
            future::poll_fn(|cx| cursors.as_mut().poll_fill(cx)).await;
            assert_eq!(cursors.len(), 2);

            let pos = cursors.select_min(&mut Natural, None).unwrap().unwrap();
            assert_eq!(cursors.as_mut().take(pos), Some((1, 2)));

            future::poll_fn(|cx| cursors.as_mut().poll_fill(cx)).await;
            assert_eq!(cursors.len(), 1);
        })
    }

    #[test]
    fn fill_is_pending_while_a_stream_is() {
        let streams = vec![
            stream::iter(vec![1]).boxed_local(),
            stream::pending().boxed_local(),
        ];
        let mut cursors = core::pin::pin!(StreamCursors::new(streams));
        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);
        assert!(cursors.as_mut().poll_fill(&mut cx).is_pending());
        assert!(cursors.as_mut().poll_fill(&mut cx).is_pending());
        assert_eq!(cursors.len(), 2);
        assert_eq!(cursors.as_mut().take(0), Some((1, 0)));
    }
}
