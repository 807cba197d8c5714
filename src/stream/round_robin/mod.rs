use futures_core::Stream;

pub(crate) mod array;
pub(crate) mod vec;

/// Takes one value from each stream in turn, until all of them are
/// exhausted.
///
/// Only the stream whose turn it is gets polled. While it is pending, so is
/// the combined stream: turns are never skipped.
///
/// # Examples
///
/// ```
/// use sequence_combinators::prelude::*;
/// use futures_lite::future::block_on;
/// use futures_lite::stream::{self, StreamExt};
///
/// block_on(async {
///     let a = stream::iter(vec![7, 1]);
///     let b = stream::iter(vec![3]);
///     let c = stream::iter(vec![5, 3, 4]);
///     let s: Vec<_> = vec![a, b, c].round_robin().collect().await;
///     assert_eq!(s, [7, 3, 5, 1, 3, 4]);
/// })
/// ```
pub trait RoundRobin {
    /// The type of the values being interleaved.
    type Item;

    /// The stream each source turns into.
    type Source: Stream<Item = Self::Item>;

    /// Interleave the sources.
    fn round_robin(self) -> vec::RoundRobin<Self::Source>;
}
