use core::cmp::Ordering;

use futures_core::Stream;

use crate::compare::Natural;

pub(crate) mod array;
pub(crate) mod vec;

/// Yields the values found in at least `degree` of multiple sorted streams.
///
/// By default a value must be found in every source, and each source counts
/// at most once towards a value. The stream ends as soon as too few sources
/// remain to reach the degree.
///
/// # Examples
///
/// ```
/// use sequence_combinators::prelude::*;
/// use futures_lite::future::block_on;
/// use futures_lite::stream::{self, StreamExt};
///
/// block_on(async {
///     let a = stream::iter(vec![1, 2]);
///     let b = stream::iter(vec![2, 3]);
///     let c = stream::iter(vec![1, 2, 5]);
///     let s = vec![a, b, c].sorted_intersection().degree(2);
///
///     let common: Result<Vec<_>, _> = s.collect::<Vec<_>>().await.into_iter().collect();
///     assert_eq!(common.unwrap(), [1, 2]);
/// })
/// ```
pub trait SortedIntersection {
    /// The type of the values being intersected.
    type Item;

    /// The stream each source turns into.
    type Source: Stream<Item = Self::Item>;

    /// Intersect the sources by their natural order.
    fn sorted_intersection(self) -> vec::SortedIntersection<Self::Source, Natural>;

    /// Intersect the sources by the order `compare` defines.
    fn sorted_intersection_by<F>(self, compare: F) -> vec::SortedIntersection<Self::Source, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Option<Ordering>;
}
