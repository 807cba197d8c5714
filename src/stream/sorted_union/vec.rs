use super::SortedUnion as SortedUnionTrait;
use crate::compare::{CompareError, Comparator, Natural};
use crate::mode::{Indexed, Mode, Plain};
use crate::stream::sorted_merge::vec::SortedMerge;
use crate::stream::IntoStream;
use crate::utils::Dedup;

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// A stream over the distinct values of multiple sorted streams.
///
/// This `struct` is created by the [`sorted_union`] method on the
/// [`SortedUnion`] trait. See its documentation for more.
///
/// [`sorted_union`]: crate::stream::SortedUnion::sorted_union
/// [`SortedUnion`]: crate::stream::SortedUnion
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct SortedUnion<S: Stream, F, M = Plain> {
    #[pin]
    merge: SortedMerge<S, F, Indexed>,
    dedup: Dedup<S::Item>,
    mode: PhantomData<M>,
}

impl<S: Stream, F> SortedUnion<S, F> {
    pub(crate) fn new(streams: Vec<S>, compare: F) -> Self {
        Self {
            merge: SortedMerge::new(streams, compare).with_index(),
            dedup: Dedup::new(),
            mode: PhantomData,
        }
    }

    /// Yield `(value, source index)` pairs instead of bare values.
    pub fn with_index(self) -> SortedUnion<S, F, Indexed> {
        SortedUnion {
            merge: self.merge,
            dedup: self.dedup,
            mode: PhantomData,
        }
    }
}

impl<S, F, M> Stream for SortedUnion<S, F, M>
where
    S: Stream,
    S::Item: Clone + fmt::Debug,
    F: Comparator<S::Item>,
    M: Mode,
{
    type Item = Result<M::Output<S::Item>, CompareError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            let (value, index) = match ready!(this.merge.as_mut().poll_next(cx)) {
                Some(Ok(pair)) => pair,
                Some(Err(err)) => return Poll::Ready(Some(Err(err))),
                None => return Poll::Ready(None),
            };

            match this.dedup.admit(&value, this.merge.as_mut().comparator()) {
                Ok(true) => return Poll::Ready(Some(Ok(M::emit(value, index)))),
                Ok(false) => continue,
                Err(err) => {
                    this.merge.as_mut().fail();
                    return Poll::Ready(Some(Err(err)));
                }
            }
        }
    }
}

impl<S, F, M> Clone for SortedUnion<S, F, M>
where
    S: Stream + Clone,
    S::Item: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            merge: self.merge.clone(),
            dedup: self.dedup.clone(),
            mode: PhantomData,
        }
    }
}

impl<S, F, M> fmt::Debug for SortedUnion<S, F, M>
where
    S: Stream + fmt::Debug,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedUnion")
            .field("merge", &self.merge)
            .field("dedup", &self.dedup)
            .finish()
    }
}

impl<S: IntoStream> SortedUnionTrait for Vec<S> {
    type Item = S::Item;
    type Source = S::IntoStream;

    fn sorted_union(self) -> SortedUnion<Self::Source, Natural> {
        SortedUnion::new(self.into_iter().map(IntoStream::into_stream).collect(), Natural)
    }

    fn sorted_union_by<F>(self, compare: F) -> SortedUnion<Self::Source, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Option<Ordering>,
    {
        SortedUnion::new(self.into_iter().map(IntoStream::into_stream).collect(), compare)
    }
}
