use super::SortedMerge as SortedMergeTrait;
use crate::compare::{CompareError, Comparator, Natural};
use crate::mode::{Indexed, Mode, Plain};
use crate::utils::ActiveSet;

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// An iterator that merges multiple sorted iterators into one sorted
/// iterator.
///
/// This `struct` is created by the [`sorted_merge`] method on the
/// [`SortedMerge`] trait. See its documentation for more.
///
/// [`sorted_merge`]: crate::iter::SortedMerge::sorted_merge
/// [`SortedMerge`]: crate::iter::SortedMerge
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SortedMerge<I: Iterator, F, M = Plain> {
    active: ActiveSet<I>,
    compare: F,
    done: bool,
    mode: PhantomData<M>,
}

impl<I: Iterator, F> SortedMerge<I, F> {
    pub(crate) fn new(sources: Vec<I>, compare: F) -> Self {
        Self {
            active: ActiveSet::new(sources),
            compare,
            done: false,
            mode: PhantomData,
        }
    }

    /// Yield `(value, source index)` pairs instead of bare values.
    pub fn with_index(self) -> SortedMerge<I, F, Indexed> {
        SortedMerge {
            active: self.active,
            compare: self.compare,
            done: self.done,
            mode: PhantomData,
        }
    }
}

impl<I: Iterator, F, M> SortedMerge<I, F, M> {
    pub(crate) fn comparator(&mut self) -> &mut F {
        &mut self.compare
    }

    /// Stop yielding values, as after an error.
    pub(crate) fn finish(&mut self) {
        self.done = true;
    }

    fn next_indexed(&mut self) -> Option<Result<(I::Item, usize), CompareError>>
    where
        I::Item: fmt::Debug,
        F: Comparator<I::Item>,
    {
        if self.done {
            return None;
        }

        let active = self.active.primed();
        let pos = match active.select_min(&mut self.compare, None) {
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

        let pulled = active.advance(pos)?;
        Some(Ok((pulled.value, pulled.index)))
    }
}

impl<I, F, M> Iterator for SortedMerge<I, F, M>
where
    I: Iterator,
    I::Item: fmt::Debug,
    F: Comparator<I::Item>,
    M: Mode,
{
    type Item = Result<M::Output<I::Item>, CompareError>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.next_indexed()?;
        Some(item.map(|(value, index)| M::emit(value, index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // An unordered pair may end the merge at any point.
        (0, self.active.size_hint().1)
    }
}

impl<I, F, M> FusedIterator for SortedMerge<I, F, M>
where
    I: Iterator,
    I::Item: fmt::Debug,
    F: Comparator<I::Item>,
    M: Mode,
{
}

impl<I, F, M> Clone for SortedMerge<I, F, M>
where
    I: Iterator + Clone,
    I::Item: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            active: self.active.clone(),
            compare: self.compare.clone(),
            done: self.done,
            mode: PhantomData,
        }
    }
}

impl<I, F, M> fmt::Debug for SortedMerge<I, F, M>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedMerge")
            .field("active", &self.active)
            .field("done", &self.done)
            .finish()
    }
}

impl<S: IntoIterator> SortedMergeTrait for Vec<S> {
    type Item = S::Item;
    type Source = S::IntoIter;

    fn sorted_merge(self) -> SortedMerge<Self::Source, Natural> {
        SortedMerge::new(self.into_iter().map(IntoIterator::into_iter).collect(), Natural)
    }

    fn sorted_merge_by<F>(self, compare: F) -> SortedMerge<Self::Source, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Option<Ordering>,
    {
        SortedMerge::new(self.into_iter().map(IntoIterator::into_iter).collect(), compare)
    }
}
