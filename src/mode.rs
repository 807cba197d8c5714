//! Output modes.
//!
//! Merge, union and round-robin can report which source produced each value.
//! The mode is part of the combinator's type: combinators start out
//! [`Plain`], and `with_index` switches them to [`Indexed`].

use crate::utils::private::Sealed;

/// Decides what a combinator yields for a value taken from source `index`.
///
/// This trait is sealed; it is implemented by [`Plain`] and [`Indexed`].
pub trait Mode: Sealed {
    /// The item yielded for a value of type `T`.
    type Output<T>;

    #[doc(hidden)]
    fn emit<T>(value: T, index: usize) -> Self::Output<T>;
}

/// Yield bare values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plain;

/// Yield `(value, source index)` pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indexed;

impl Sealed for Plain {}
impl Sealed for Indexed {}

impl Mode for Plain {
    type Output<T> = T;

    #[inline]
    fn emit<T>(value: T, _index: usize) -> T {
        value
    }
}

impl Mode for Indexed {
    type Output<T> = (T, usize);

    #[inline]
    fn emit<T>(value: T, index: usize) -> (T, usize) {
        (value, index)
    }
}
