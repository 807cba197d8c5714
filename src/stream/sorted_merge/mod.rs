use core::cmp::Ordering;

use futures_core::Stream;

use crate::compare::Natural;

pub(crate) mod array;
pub(crate) mod vec;

/// Merges multiple sorted streams into a single sorted stream of all their
/// values.
///
/// Before each value is yielded, every stream that doesn't have a value
/// waiting is polled. The merged stream is pending for as long as any of them
/// is, since any of them might produce the next smallest value.
///
/// # Examples
///
/// ```
/// use sequence_combinators::prelude::*;
/// use futures_lite::future::block_on;
/// use futures_lite::stream::{self, StreamExt};
///
/// block_on(async {
///     let a = stream::iter(vec![1, 4]);
///     let b = stream::iter(vec![2, 3]);
///     let s = vec![a, b].sorted_merge();
///
///     let merged: Result<Vec<_>, _> = s.collect::<Vec<_>>().await.into_iter().collect();
///     assert_eq!(merged.unwrap(), [1, 2, 3, 4]);
/// })
/// ```
pub trait SortedMerge {
    /// The type of the values being merged.
    type Item;

    /// The stream each source turns into.
    type Source: Stream<Item = Self::Item>;

    /// Merge the sources by their natural order.
    fn sorted_merge(self) -> vec::SortedMerge<Self::Source, Natural>;

    /// Merge the sources by the order `compare` defines. `compare` returns
    /// `None` when two values can't be ordered, which ends the merge with an
    /// error.
    fn sorted_merge_by<F>(self, compare: F) -> vec::SortedMerge<Self::Source, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Option<Ordering>;
}
