//! Combinators over multiple iterators.
//!
//! Each trait is implemented for `Vec<S>` and `[S; N]` where `S:
//! IntoIterator`, and returns a lazy iterator: nothing is pulled from any
//! source until the combined iterator is first advanced.
//!
//! | Name                   | Sources must be sorted | Yields                       |
//! | ---                    | ---                    | ---                          |
//! | [`SortedMerge`]        | yes                    | every value, in order        |
//! | [`SortedUnion`]        | yes                    | every distinct value         |
//! | [`SortedIntersection`] | yes                    | values found in `degree` sources |
//! | [`RoundRobin`]         | no                     | one value per source in turn |
//! | [`Concat`]             | no                     | each source in full, in turn |
//!
//! The sorted combinators yield `Result`s: the comparator may find two values
//! it can't order, which ends iteration with a [`CompareError`].
//!
//! [`CompareError`]: crate::compare::CompareError
//!
//! # Examples
//!
//! ```
//! use sequence_combinators::prelude::*;
//!
//! let evens = (0..).step_by(2).take(4);
//! let odds = (1..).step_by(2).take(3);
//! let all: Result<Vec<_>, _> = [evens, odds].sorted_merge().collect();
//! assert_eq!(all.unwrap(), [0, 1, 2, 3, 4, 5, 6]);
//! ```

pub use concat::Concat;
pub use round_robin::RoundRobin;
pub use sorted_intersection::SortedIntersection;
pub use sorted_merge::SortedMerge;
pub use sorted_union::SortedUnion;

pub(crate) mod concat;
pub(crate) mod round_robin;
pub(crate) mod sorted_intersection;
pub(crate) mod sorted_merge;
pub(crate) mod sorted_union;

/// The iterator types returned by the traits in this module.
pub mod vec {
    pub use super::concat::vec::Concat;
    pub use super::round_robin::vec::RoundRobin;
    pub use super::sorted_intersection::vec::SortedIntersection;
    pub use super::sorted_merge::vec::SortedMerge;
    pub use super::sorted_union::vec::SortedUnion;
}
