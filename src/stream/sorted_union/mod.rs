use core::cmp::Ordering;

use futures_core::Stream;

use crate::compare::Natural;

pub(crate) mod array;
pub(crate) mod vec;

/// Merges multiple sorted streams into a single sorted stream of their
/// distinct values.
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
///     let s = [a, b, c].sorted_union();
///
///     let union: Result<Vec<_>, _> = s.collect::<Vec<_>>().await.into_iter().collect();
///     assert_eq!(union.unwrap(), [1, 2, 3, 5]);
/// })
/// ```
pub trait SortedUnion {
    /// The type of the values being merged.
    type Item;

    /// The stream each source turns into.
    type Source: Stream<Item = Self::Item>;

    /// Merge the sources by their natural order, dropping duplicates.
    fn sorted_union(self) -> vec::SortedUnion<Self::Source, Natural>;

    /// Merge the sources by the order `compare` defines, dropping values
    /// `compare` considers equal to the previous one.
    fn sorted_union_by<F>(self, compare: F) -> vec::SortedUnion<Self::Source, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Option<Ordering>;
}
