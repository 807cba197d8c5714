//! Utilities shared by the iterator and stream combinators.

mod cursor;
mod dedup;
mod pin;
mod runs;
mod select;
pub(crate) mod size_hint;
mod stream_cursors;

pub(crate) mod private;

pub(crate) use cursor::ActiveSet;
pub(crate) use dedup::Dedup;
pub(crate) use pin::get_pin_mut_from_vec;
pub(crate) use runs::Runs;
pub(crate) use select::select_min;
pub(crate) use stream_cursors::StreamCursors;
