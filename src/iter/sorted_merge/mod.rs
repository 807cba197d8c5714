use core::cmp::Ordering;

use crate::compare::Natural;

pub(crate) mod array;
pub(crate) mod vec;

/// Merges multiple sorted iterators into a single sorted iterator of all
/// their values.
///
/// Every source must already be sorted according to the comparator. Values
/// which compare equal are yielded in source order. No value is pulled from
/// a source until the merged iterator is first advanced, and after that each
/// step pulls from exactly one source.
///
/// # Examples
///
/// ```
/// use sequence_combinators::prelude::*;
///
/// let merged: Result<Vec<_>, _> = vec![vec![1, 2], vec![2, 3], vec![1, 2, 5]]
///     .sorted_merge()
///     .collect();
/// assert_eq!(merged.unwrap(), [1, 1, 2, 2, 2, 3, 5]);
/// ```
///
/// Merging descending sources, reporting where each value came from:
///
/// ```
/// use sequence_combinators::prelude::*;
///
/// let merged: Result<Vec<_>, _> = [vec![2, 1], vec![3, 2], vec![5, 2, 1]]
///     .sorted_merge_by(|a, b| b.partial_cmp(a))
///     .with_index()
///     .collect();
/// assert_eq!(
///     merged.unwrap(),
///     [(5, 2), (3, 1), (2, 0), (2, 1), (2, 2), (1, 0), (1, 2)],
/// );
/// ```
pub trait SortedMerge {
    /// The type of the values being merged.
    type Item;

    /// The iterator each source turns into.
    type Source: Iterator<Item = Self::Item>;

    /// Merge the sources by their natural order.
    fn sorted_merge(self) -> vec::SortedMerge<Self::Source, Natural>;

    /// Merge the sources by the order `compare` defines. `compare` returns
    /// `None` when two values can't be ordered, which ends the merge with an
    /// error.
    fn sorted_merge_by<F>(self, compare: F) -> vec::SortedMerge<Self::Source, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Option<Ordering>;
}
