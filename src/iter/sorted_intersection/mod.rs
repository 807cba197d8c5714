use core::cmp::Ordering;

use crate::compare::Natural;

pub(crate) mod array;
pub(crate) mod vec;

/// Yields the values found in at least `degree` of multiple sorted
/// iterators.
///
/// By default a value must be found in every source. Each source counts at
/// most once towards a value, however often it repeats it. Values are yielded
/// in sorted order, once per run of equal values, and iteration stops as soon
/// as too few sources remain to reach the degree.
///
/// # Examples
///
/// ```
/// use sequence_combinators::prelude::*;
///
/// let sources = || vec![vec![1, 2], vec![2, 3], vec![1, 2, 5]];
///
/// let all: Result<Vec<_>, _> = sources().sorted_intersection().collect();
/// assert_eq!(all.unwrap(), [2]);
///
/// let two: Result<Vec<_>, _> = sources().sorted_intersection().degree(2).collect();
/// assert_eq!(two.unwrap(), [1, 2]);
/// ```
pub trait SortedIntersection {
    /// The type of the values being intersected.
    type Item;

    /// The iterator each source turns into.
    type Source: Iterator<Item = Self::Item>;

    /// Intersect the sources by their natural order.
    fn sorted_intersection(self) -> vec::SortedIntersection<Self::Source, Natural>;

    /// Intersect the sources by the order `compare` defines.
    fn sorted_intersection_by<F>(self, compare: F) -> vec::SortedIntersection<Self::Source, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Option<Ordering>;
}
