//! Combinators over multiple streams.
//!
//! These mirror the combinators in [`iter`](crate::iter), for sources that
//! implement [`IntoStream`]. Everything is driven from the task polling the
//! combined stream: no source is polled until it is, and nothing is spawned.
//!
//! | Name                   | Polls                                             |
//! | ---                    | ---                                               |
//! | [`SortedMerge`]        | every source without a value waiting              |
//! | [`SortedUnion`]        | every source without a value waiting              |
//! | [`SortedIntersection`] | every source without a value waiting              |
//! | [`RoundRobin`]         | the source whose turn it is                       |
//! | [`Concat`]             | the first source that hasn't ended                |
//!
//! # Examples
//!
//! ```
//! use sequence_combinators::prelude::*;
//! use futures_lite::future::block_on;
//! use futures_lite::stream::{self, StreamExt};
//!
//! block_on(async {
//!     let a = stream::iter(vec![1, 3, 5]);
//!     let b = stream::iter(vec![2, 3, 4]);
//!     let mut s = [a, b].sorted_union();
//!
//!     let mut buf = vec![];
//!     while let Some(n) = s.next().await {
//!         buf.push(n.unwrap());
//!     }
//!     assert_eq!(buf, [1, 2, 3, 4, 5]);
//! })
//! ```

pub use concat::Concat;
pub use into_stream::IntoStream;
pub use round_robin::RoundRobin;
pub use sorted_intersection::SortedIntersection;
pub use sorted_merge::SortedMerge;
pub use sorted_union::SortedUnion;

pub(crate) mod concat;
mod into_stream;
pub(crate) mod round_robin;
pub(crate) mod sorted_intersection;
pub(crate) mod sorted_merge;
pub(crate) mod sorted_union;

/// The stream types returned by the traits in this module.
pub mod vec {
    pub use super::concat::vec::Concat;
    pub use super::round_robin::vec::RoundRobin;
    pub use super::sorted_intersection::vec::SortedIntersection;
    pub use super::sorted_merge::vec::SortedMerge;
    pub use super::sorted_union::vec::SortedUnion;
}
