use super::SortedMerge as SortedMergeTrait;
use crate::compare::{CompareError, Comparator, Natural};
use crate::mode::{Indexed, Mode, Plain};
use crate::stream::IntoStream;
use crate::utils::StreamCursors;

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// A stream that merges multiple sorted streams into one sorted stream.
///
/// This `struct` is created by the [`sorted_merge`] method on the
/// [`SortedMerge`] trait. See its documentation for more.
///
/// [`sorted_merge`]: crate::stream::SortedMerge::sorted_merge
/// [`SortedMerge`]: crate::stream::SortedMerge
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct SortedMerge<S: Stream, F, M = Plain> {
    #[pin]
    cursors: StreamCursors<S>,
    compare: F,
    failed: bool,
    done: bool,
    mode: PhantomData<M>,
}

impl<S: Stream, F> SortedMerge<S, F> {
    pub(crate) fn new(streams: Vec<S>, compare: F) -> Self {
        Self {
            cursors: StreamCursors::new(streams),
            compare,
            failed: false,
            done: false,
            mode: PhantomData,
        }
    }

    /// Yield `(value, source index)` pairs instead of bare values.
    pub fn with_index(self) -> SortedMerge<S, F, Indexed> {
        SortedMerge {
            cursors: self.cursors,
            compare: self.compare,
            failed: self.failed,
            done: self.done,
            mode: PhantomData,
        }
    }
}

impl<S: Stream, F, M> SortedMerge<S, F, M> {
    pub(crate) fn comparator(self: Pin<&mut Self>) -> &mut F {
        self.project().compare
    }

    /// End the stream after the current item, as after an error.
    pub(crate) fn fail(self: Pin<&mut Self>) {
        *self.project().failed = true;
    }
}

impl<S, F, M> Stream for SortedMerge<S, F, M>
where
    S: Stream,
    S::Item: fmt::Debug,
    F: Comparator<S::Item>,
    M: Mode,
{
    type Item = Result<M::Output<S::Item>, CompareError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        assert!(!*this.done, "Stream should not be polled after completion");
        if *this.failed {
            *this.done = true;
            return Poll::Ready(None);
        }

        ready!(this.cursors.as_mut().poll_fill(cx));

        let pos = match this.cursors.select_min(this.compare, None) {
            Ok(Some(pos)) => pos,
            Ok(None) => {
                *this.done = true;
                return Poll::Ready(None);
            }
            Err(err) => {
                *this.failed = true;
                return Poll::Ready(Some(Err(err)));
            }
        };

        let Some((value, index)) = this.cursors.as_mut().take(pos) else {
            unreachable!("every live stream holds a value after filling");
        };
        Poll::Ready(Some(Ok(M::emit(value, index))))
    }
}

impl<S, F, M> Clone for SortedMerge<S, F, M>
where
    S: Stream + Clone,
    S::Item: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            cursors: self.cursors.clone(),
            compare: self.compare.clone(),
            failed: self.failed,
            done: self.done,
            mode: PhantomData,
        }
    }
}

impl<S, F, M> fmt::Debug for SortedMerge<S, F, M>
where
    S: Stream + fmt::Debug,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedMerge")
            .field("cursors", &self.cursors)
            .field("done", &self.done)
            .finish()
    }
}

impl<S: IntoStream> SortedMergeTrait for Vec<S> {
    type Item = S::Item;
    type Source = S::IntoStream;

    fn sorted_merge(self) -> SortedMerge<Self::Source, Natural> {
        SortedMerge::new(self.into_iter().map(IntoStream::into_stream).collect(), Natural)
    }

    fn sorted_merge_by<F>(self, compare: F) -> SortedMerge<Self::Source, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Option<Ordering>,
    {
        SortedMerge::new(self.into_iter().map(IntoStream::into_stream).collect(), compare)
    }
}
