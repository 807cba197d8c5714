use futures_core::Stream;

/// Conversion into a [`Stream`].
///
/// Every stream converts into itself. The stream combinators accept any
/// collection of values implementing this trait as their sources.
pub trait IntoStream {
    /// The type of the values the stream yields.
    type Item;

    /// The stream this value turns into.
    type IntoStream: Stream<Item = Self::Item>;

    /// Creates a stream from a value.
    fn into_stream(self) -> Self::IntoStream;
}

impl<S: Stream> IntoStream for S {
    type Item = S::Item;
    type IntoStream = S;

    #[inline]
    fn into_stream(self) -> S {
        self
    }
}
