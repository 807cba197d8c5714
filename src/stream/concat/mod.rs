use futures_core::Stream;

pub(crate) mod array;
pub(crate) mod vec;

/// Yields every value of each stream in turn, exhausting one stream before
/// polling the next.
pub trait Concat {
    /// The type of the values being concatenated.
    type Item;

    /// The stream each source turns into.
    type Source: Stream<Item = Self::Item>;

    /// Concatenate the sources.
    fn concat(self) -> vec::Concat<Self::Source>;
}
