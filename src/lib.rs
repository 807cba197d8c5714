//! Lazy combinators over many sequences at once.
//!
//! Given a collection of iterators or streams, this library combines them into
//! one, pulling from each source only as much as is needed to produce the next
//! value. No source is ever collected into memory.
//!
//! See the [`iter`] and [`stream`] submodules for more.
//!
//! # Operations
//!
//! This library provides the following operations on arrays and vecs of
//! iterators and streams:
//!
//! - [`iter::SortedMerge`]: Merge sorted sources into one sorted sequence, keeping duplicates.
//! - [`iter::SortedUnion`]: Merge sorted sources into one sorted sequence of distinct values.
//! - [`iter::SortedIntersection`]: Yield the values found in at least `degree` sorted sources.
//! - [`iter::RoundRobin`]: Take one value from each source in turn.
//! - [`iter::Concat`]: Exhaust each source in turn.
//!
//! The sorted operations take an optional comparator (see [`compare`]), and
//! merge, union and round robin can report which source every value came from
//! (see [`mode`]).
//!
//! # Examples
//!
//! Find the numbers that at least two of three sorted sources agree on:
//!
//! ```rust
//! use sequence_combinators::prelude::*;
//!
//! let a = vec![1, 3, 5, 7, 9];
//! let b = vec![2, 3, 5, 8];
//! let c = vec![5, 7, 8, 10];
//!
//! let agreed: Result<Vec<_>, _> = [a, b, c].sorted_intersection().degree(2).collect();
//! assert_eq!(agreed.unwrap(), [3, 5, 7, 8]);
//! ```
//!
//! # Comparison errors
//!
//! Comparators return an `Option<Ordering>`, so values such as `f64::NAN`
//! which have no place in the order are detected rather than misplaced. The
//! sorted operations yield `Result`s, and end after the first
//! [`CompareError`](compare::CompareError).

#![no_std]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod utils;

/// The sequence combinators prelude.
pub mod prelude {
    pub use super::iter::Concat as _;
    pub use super::iter::RoundRobin as _;
    pub use super::iter::SortedIntersection as _;
    pub use super::iter::SortedMerge as _;
    pub use super::iter::SortedUnion as _;

    pub use super::stream::Concat as _;
    pub use super::stream::IntoStream as _;
    pub use super::stream::RoundRobin as _;
    pub use super::stream::SortedIntersection as _;
    pub use super::stream::SortedMerge as _;
    pub use super::stream::SortedUnion as _;
}

pub mod compare;
pub mod iter;
pub mod mode;
pub mod stream;
