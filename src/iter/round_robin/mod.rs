pub(crate) mod array;
pub(crate) mod vec;

/// Takes one value from each iterator in turn, until all of them are
/// exhausted.
///
/// The sources don't need to be sorted. An exhausted source drops out of the
/// rotation without costing the others their turn.
///
/// # Examples
///
/// ```
/// use sequence_combinators::prelude::*;
///
/// let s: Vec<_> = vec![vec![7, 1], vec![3], vec![5, 3, 4]].round_robin().collect();
/// assert_eq!(s, [7, 3, 5, 1, 3, 4]);
/// ```
pub trait RoundRobin {
    /// The type of the values being interleaved.
    type Item;

    /// The iterator each source turns into.
    type Source: Iterator<Item = Self::Item>;

    /// Interleave the sources.
    fn round_robin(self) -> vec::RoundRobin<Self::Source>;
}
