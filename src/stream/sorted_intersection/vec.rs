use super::SortedIntersection as SortedIntersectionTrait;
use crate::compare::{CompareError, Comparator, Natural};
use crate::stream::IntoStream;
use crate::utils::{Runs, StreamCursors};

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

/// A stream over the values common to multiple sorted streams.
///
/// This `struct` is created by the [`sorted_intersection`] method on the
/// [`SortedIntersection`] trait. See its documentation for more.
///
/// [`sorted_intersection`]: crate::stream::SortedIntersection::sorted_intersection
/// [`SortedIntersection`]: crate::stream::SortedIntersection
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct SortedIntersection<S: Stream, F> {
    #[pin]
    cursors: StreamCursors<S>,
    compare: F,
    runs: Runs<S::Item>,
    failed: bool,
    done: bool,
}

impl<S: Stream, F> SortedIntersection<S, F> {
    pub(crate) fn new(streams: Vec<S>, compare: F) -> Self {
        Self {
            runs: Runs::new(streams.len()),
            cursors: StreamCursors::new(streams),
            compare,
            failed: false,
            done: false,
        }
    }

    /// Yield values found in at least `degree` distinct sources.
    ///
    /// # Panics
    ///
    /// Panics if `degree` is zero.
    pub fn degree(mut self, degree: usize) -> Self {
        assert!(degree != 0, "degree must be non-zero");
        self.runs.set_degree(degree);
        self
    }
}

impl<S, F> Stream for SortedIntersection<S, F>
where
    S: Stream,
    S::Item: fmt::Debug,
    F: Comparator<S::Item>,
{
    type Item = Result<S::Item, CompareError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        assert!(!*this.done, "Stream should not be polled after completion");
        if *this.failed {
            *this.done = true;
            return Poll::Ready(None);
        }

        loop {
            ready!(this.cursors.as_mut().poll_fill(cx));

            if !this.runs.can_progress(this.cursors.len()) {
                *this.done = true;
                return Poll::Ready(None);
            }

            let selected = this.cursors.select_min(this.compare, Some(this.runs.seen()));
            let pos = match selected {
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
            match this.runs.accept(value, index, this.compare) {
                Ok(Some(value)) => return Poll::Ready(Some(Ok(value))),
                Ok(None) => continue,
                Err(err) => {
                    *this.failed = true;
                    return Poll::Ready(Some(Err(err)));
                }
            }
        }
    }
}

impl<S, F> Clone for SortedIntersection<S, F>
where
    S: Stream + Clone,
    S::Item: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            cursors: self.cursors.clone(),
            compare: self.compare.clone(),
            runs: self.runs.clone(),
            failed: self.failed,
            done: self.done,
        }
    }
}

impl<S, F> fmt::Debug for SortedIntersection<S, F>
where
    S: Stream + fmt::Debug,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedIntersection")
            .field("cursors", &self.cursors)
            .field("runs", &self.runs)
            .field("done", &self.done)
            .finish()
    }
}

impl<S: IntoStream> SortedIntersectionTrait for Vec<S> {
    type Item = S::Item;
    type Source = S::IntoStream;

    fn sorted_intersection(self) -> SortedIntersection<Self::Source, Natural> {
        SortedIntersection::new(self.into_iter().map(IntoStream::into_stream).collect(), Natural)
    }

    fn sorted_intersection_by<F>(self, compare: F) -> SortedIntersection<Self::Source, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Option<Ordering>,
    {
        SortedIntersection::new(self.into_iter().map(IntoStream::into_stream).collect(), compare)
    }
}
