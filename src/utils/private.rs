//! Sealing for traits that are public in signatures but only implemented
//! inside this crate.

/// Implementing this trait is not permitted outside of `sequence_combinators`.
pub trait Sealed {}
