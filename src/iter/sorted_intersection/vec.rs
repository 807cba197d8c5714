use super::SortedIntersection as SortedIntersectionTrait;
use crate::compare::{CompareError, Comparator, Natural};
use crate::utils::{ActiveSet, Runs};

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;

/// An iterator over the values common to multiple sorted iterators.
///
/// This `struct` is created by the [`sorted_intersection`] method on the
/// [`SortedIntersection`] trait. See its documentation for more.
///
/// [`sorted_intersection`]: crate::iter::SortedIntersection::sorted_intersection
/// [`SortedIntersection`]: crate::iter::SortedIntersection
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SortedIntersection<I: Iterator, F> {
    active: ActiveSet<I>,
    compare: F,
    runs: Runs<I::Item>,
    done: bool,
}

impl<I: Iterator, F> SortedIntersection<I, F> {
    pub(crate) fn new(sources: Vec<I>, compare: F) -> Self {
        Self {
            runs: Runs::new(sources.len()),
            active: ActiveSet::new(sources),
            compare,
            done: false,
        }
    }

    /// Yield values found in at least `degree` distinct sources.
    ///
    /// A degree larger than the number of sources yields nothing.
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

impl<I, F> Iterator for SortedIntersection<I, F>
where
    I: Iterator,
    I::Item: fmt::Debug,
    F: Comparator<I::Item>,
{
    type Item = Result<I::Item, CompareError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let active = self.active.primed();
        loop {
            if !self.runs.can_progress(active.len()) {
                self.done = true;
                return None;
            }

            let pos = match active.select_min(&mut self.compare, Some(self.runs.seen())) {
                Ok(Some(pos)) => pos,
                Ok(None) => {
                    self.done = true;
                    return None;
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            };
            let Some(pulled) = active.advance(pos) else {
                self.done = true;
                return None;
            };

            match self.runs.accept(pulled.value, pulled.index, &mut self.compare) {
                Ok(Some(value)) => return Some(Ok(value)),
                Ok(None) => continue,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        (0, self.active.size_hint().1)
    }
}

impl<I, F> FusedIterator for SortedIntersection<I, F>
where
    I: Iterator,
    I::Item: fmt::Debug,
    F: Comparator<I::Item>,
{
}

impl<I, F> Clone for SortedIntersection<I, F>
where
    I: Iterator + Clone,
    I::Item: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            active: self.active.clone(),
            compare: self.compare.clone(),
            runs: self.runs.clone(),
            done: self.done,
        }
    }
}

impl<I, F> fmt::Debug for SortedIntersection<I, F>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedIntersection")
            .field("active", &self.active)
            .field("runs", &self.runs)
            .field("done", &self.done)
            .finish()
    }
}

impl<S: IntoIterator> SortedIntersectionTrait for Vec<S> {
    type Item = S::Item;
    type Source = S::IntoIter;

    fn sorted_intersection(self) -> SortedIntersection<Self::Source, Natural> {
        SortedIntersection::new(self.into_iter().map(IntoIterator::into_iter).collect(), Natural)
    }

    fn sorted_intersection_by<F>(self, compare: F) -> SortedIntersection<Self::Source, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Option<Ordering>,
    {
        SortedIntersection::new(self.into_iter().map(IntoIterator::into_iter).collect(), compare)
    }
}
