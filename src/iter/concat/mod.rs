pub(crate) mod array;
pub(crate) mod vec;

/// Yields every value of each iterator in turn, exhausting one iterator
/// before moving on to the next.
///
/// A source is not pulled from until every source before it has returned
/// `None`.
///
/// # Examples
///
/// ```
/// use sequence_combinators::prelude::*;
///
/// let s: Vec<_> = vec![vec![], vec![2, 1], vec![1], vec![]].concat().collect();
/// assert_eq!(s, [2, 1, 1]);
/// ```
pub trait Concat {
    /// The type of the values being concatenated.
    type Item;

    /// The iterator each source turns into.
    type Source: Iterator<Item = Self::Item>;

    /// Concatenate the sources.
    fn concat(self) -> vec::Concat<Self::Source>;
}
