use super::SortedUnion as SortedUnionTrait;
use crate::compare::{CompareError, Comparator, Natural};
use crate::iter::sorted_merge::vec::SortedMerge;
use crate::mode::{Indexed, Mode, Plain};
use crate::utils::Dedup;

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// An iterator over the distinct values of multiple sorted iterators.
///
/// This `struct` is created by the [`sorted_union`] method on the
/// [`SortedUnion`] trait. See its documentation for more.
///
/// [`sorted_union`]: crate::iter::SortedUnion::sorted_union
/// [`SortedUnion`]: crate::iter::SortedUnion
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SortedUnion<I: Iterator, F, M = Plain> {
    merge: SortedMerge<I, F, Indexed>,
    dedup: Dedup<I::Item>,
    mode: PhantomData<M>,
}

impl<I: Iterator, F> SortedUnion<I, F> {
    pub(crate) fn new(sources: Vec<I>, compare: F) -> Self {
        Self {
            merge: SortedMerge::new(sources, compare).with_index(),
            dedup: Dedup::new(),
            mode: PhantomData,
        }
    }

    /// Yield `(value, source index)` pairs instead of bare values.
    pub fn with_index(self) -> SortedUnion<I, F, Indexed> {
        SortedUnion {
            merge: self.merge,
            dedup: self.dedup,
            mode: PhantomData,
        }
    }
}

impl<I, F, M> Iterator for SortedUnion<I, F, M>
where
    I: Iterator,
    I::Item: Clone + fmt::Debug,
    F: Comparator<I::Item>,
    M: Mode,
{
    type Item = Result<M::Output<I::Item>, CompareError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (value, index) = match self.merge.next()? {
                Ok(pair) => pair,
                Err(err) => return Some(Err(err)),
            };

            match self.dedup.admit(&value, self.merge.comparator()) {
                Ok(true) => return Some(Ok(M::emit(value, index))),
                Ok(false) => continue,
                Err(err) => {
                    self.merge.finish();
                    return Some(Err(err));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.merge.size_hint().1)
    }
}

impl<I, F, M> FusedIterator for SortedUnion<I, F, M>
where
    I: Iterator,
    I::Item: Clone + fmt::Debug,
    F: Comparator<I::Item>,
    M: Mode,
{
}

impl<I, F, M> Clone for SortedUnion<I, F, M>
where
    I: Iterator + Clone,
    I::Item: Clone,
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

impl<I, F, M> fmt::Debug for SortedUnion<I, F, M>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedUnion")
            .field("merge", &self.merge)
            .field("dedup", &self.dedup)
            .finish()
    }
}

impl<S: IntoIterator> SortedUnionTrait for Vec<S> {
    type Item = S::Item;
    type Source = S::IntoIter;

    fn sorted_union(self) -> SortedUnion<Self::Source, Natural> {
        SortedUnion::new(self.into_iter().map(IntoIterator::into_iter).collect(), Natural)
    }

    fn sorted_union_by<F>(self, compare: F) -> SortedUnion<Self::Source, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Option<Ordering>,
    {
        SortedUnion::new(self.into_iter().map(IntoIterator::into_iter).collect(), compare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::cell::Cell;

    #[test]
    fn union_vec_3() {
        let union: Vec<_> = vec![vec![1, 2], vec![2, 3], vec![1, 2, 5]]
            .sorted_union()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(union, [1, 2, 3, 5]);
    }

    #[test]
    fn union_vec_with_index() {
        let union: Vec<_> = vec![vec![1, 2], vec![2, 3], vec![1, 2, 5]]
            .sorted_union()
            .with_index()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(union, [(1, 0), (2, 0), (3, 1), (5, 2)]);
    }

    #[test]
    fn union_vec_duplicates_within_one_source() {
        let union: Vec<_> = vec![vec![1, 1, 1, 4], vec![4, 4]]
            .sorted_union()
            .with_index()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(union, [(1, 0), (4, 0)]);
    }

    #[test]
    fn union_vec_equality_follows_the_comparator() {
        let union: Vec<_> = vec![vec!["a", "bb"], vec!["c", "ddd"]]
            .sorted_union_by(|a, b| Some(a.len().cmp(&b.len())))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(union, ["a", "bb", "ddd"]);
    }

    #[test]
    fn union_vec_fails_on_unordered_values() {
        let mut s = vec![vec![f64::NAN]].sorted_union();
        assert!(s.next().unwrap().unwrap().is_nan());
        assert_eq!(s.next(), None);

        let mut s = vec![vec![1.0, f64::NAN]].sorted_union();
        assert_eq!(s.next(), Some(Ok(1.0)));
        let err = s.next().unwrap().unwrap_err();
        assert_eq!((err.left(), err.right()), ("1.0", "NaN"));
        assert_eq!(s.next(), None);
    }

    #[test]
    fn union_vec_pulls_lazily() {
        let pulls = Cell::new(0);
        let counted = |values: Vec<i32>| {
            let pulls = &pulls;
            values.into_iter().inspect(move |_| pulls.set(pulls.get() + 1))
        };
        let mut s = vec![counted(vec![1, 3]), counted(vec![2, 4])].sorted_union();
        assert_eq!(pulls.get(), 0);
        assert_eq!(s.next(), Some(Ok(1)));
        assert_eq!(pulls.get(), 3);
        assert_eq!(s.next(), Some(Ok(2)));
        assert_eq!(pulls.get(), 4);

        // Skipping a duplicate run pulls one value past each skipped copy.
        pulls.set(0);
        let mut s = vec![counted(vec![1, 1, 2]), counted(vec![1, 3])].sorted_union();
        assert_eq!(s.next(), Some(Ok(1)));
        assert_eq!(pulls.get(), 3);
        assert_eq!(s.next(), Some(Ok(2)));
        assert_eq!(pulls.get(), 5);
        assert_eq!(s.next(), Some(Ok(3)));
        assert_eq!(pulls.get(), 5);
        assert_eq!(s.next(), None);
    }
}
