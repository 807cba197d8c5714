//! Comparators used by the sorted combinators.
//!
//! Every sorted combinator orders its sources through a [`Comparator`]. Any
//! closure of the shape `FnMut(&T, &T) -> Option<Ordering>` is a comparator,
//! and [`Natural`] delegates to [`PartialOrd`]. A comparator returning `None`
//! signals that two values can't be ordered; the combinator then yields a
//! [`CompareError`] instead of silently misordering its output.

use alloc::format;
use alloc::string::String;
use core::any;
use core::cmp::Ordering;
use core::fmt;
#[cfg(feature = "std")]
use std::error::Error;

/// Orders two values of type `T`.
pub trait Comparator<T: ?Sized> {
    /// Compare `left` against `right`, or return `None` if the two values
    /// can't be ordered.
    fn compare(&mut self, left: &T, right: &T) -> Option<Ordering>;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    #[inline]
    fn compare(&mut self, left: &T, right: &T) -> Option<Ordering> {
        self(left, right)
    }
}

/// The natural ordering of a type, as defined by its [`PartialOrd`] impl.
///
/// This is the comparator used by `sorted_merge`, `sorted_union` and
/// `sorted_intersection` when no other comparator is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: PartialOrd + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&mut self, left: &T, right: &T) -> Option<Ordering> {
        left.partial_cmp(right)
    }
}

/// Two values could not be ordered by the comparator.
///
/// Holds the `Debug` representation of both operands, in the order they
/// were handed to the comparator.
#[derive(Clone, PartialEq, Eq)]
pub struct CompareError {
    left: String,
    right: String,
    type_name: &'static str,
}

impl CompareError {
    pub(crate) fn new<T: fmt::Debug + ?Sized>(left: &T, right: &T) -> Self {
        Self {
            left: format!("{left:?}"),
            right: format!("{right:?}"),
            type_name: any::type_name::<T>(),
        }
    }

    /// The representation of the left-hand operand.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// The representation of the right-hand operand.
    pub fn right(&self) -> &str {
        &self.right
    }

    /// The name of the type of both operands.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} (operands of type `{}`)", self.type_name)
    }
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "comparison of `{}` with `{}` failed", self.left, self.right)
    }
}

#[cfg(feature = "std")]
impl Error for CompareError {}

/// Run `compare`, turning an unordered pair into a [`CompareError`].
pub(crate) fn try_compare<T, C>(compare: &mut C, left: &T, right: &T) -> Result<Ordering, CompareError>
where
    T: fmt::Debug + ?Sized,
    C: Comparator<T> + ?Sized,
{
    compare
        .compare(left, right)
        .ok_or_else(|| CompareError::new(left, right))
}
