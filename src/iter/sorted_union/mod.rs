use core::cmp::Ordering;

use crate::compare::Natural;

pub(crate) mod array;
pub(crate) mod vec;

/// Merges multiple sorted iterators into a single sorted iterator of their
/// distinct values.
///
/// Consecutive values which compare equal are yielded once, with the index
/// of the first source that produced them.
///
/// # Examples
///
/// ```
/// use sequence_combinators::prelude::*;
///
/// let union: Result<Vec<_>, _> = vec![vec![1, 2], vec![2, 3], vec![1, 2, 5]]
///     .sorted_union()
///     .with_index()
///     .collect();
/// assert_eq!(union.unwrap(), [(1, 0), (2, 0), (3, 1), (5, 2)]);
/// ```
pub trait SortedUnion {
    /// The type of the values being merged.
    type Item;

    /// The iterator each source turns into.
    type Source: Iterator<Item = Self::Item>;

    /// Merge the sources by their natural order, dropping duplicates.
    fn sorted_union(self) -> vec::SortedUnion<Self::Source, Natural>;

    /// Merge the sources by the order `compare` defines, dropping values
    /// `compare` considers equal to the previous one.
    fn sorted_union_by<F>(self, compare: F) -> vec::SortedUnion<Self::Source, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Option<Ordering>;
}
