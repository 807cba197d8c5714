use super::RoundRobin as RoundRobinTrait;
use crate::mode::{Indexed, Mode, Plain};
use crate::utils::ActiveSet;

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// An iterator that takes one value from each of multiple iterators in turn.
///
/// This `struct` is created by the [`round_robin`] method on the
/// [`RoundRobin`] trait. See its documentation for more.
///
/// [`round_robin`]: crate::iter::RoundRobin::round_robin
/// [`RoundRobin`]: crate::iter::RoundRobin
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RoundRobin<I: Iterator, M = Plain> {
    active: ActiveSet<I>,
    /// Position in the active set whose turn it is.
    pos: usize,
    mode: PhantomData<M>,
}

impl<I: Iterator> RoundRobin<I> {
    pub(crate) fn new(sources: Vec<I>) -> Self {
        Self {
            active: ActiveSet::new(sources),
            pos: 0,
            mode: PhantomData,
        }
    }

    /// Yield `(value, source index)` pairs instead of bare values.
    pub fn with_index(self) -> RoundRobin<I, Indexed> {
        RoundRobin {
            active: self.active,
            pos: self.pos,
            mode: PhantomData,
        }
    }
}

impl<I: Iterator, M: Mode> Iterator for RoundRobin<I, M> {
    type Item = M::Output<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let active = self.active.primed();
        if active.is_empty() {
            return None;
        }
        if self.pos >= active.len() {
            self.pos = 0;
        }

        let pulled = active.advance(self.pos)?;
        // A retired source is removed in place, so the next one has already
        // moved into this position.
        if !pulled.retired {
            self.pos += 1;
        }
        Some(M::emit(pulled.value, pulled.index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.active.size_hint()
    }
}

impl<I: Iterator, M: Mode> FusedIterator for RoundRobin<I, M> {}

impl<I, M> Clone for RoundRobin<I, M>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            active: self.active.clone(),
            pos: self.pos,
            mode: PhantomData,
        }
    }
}

impl<I, M> fmt::Debug for RoundRobin<I, M>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundRobin")
            .field("active", &self.active)
            .field("pos", &self.pos)
            .finish()
    }
}

impl<S: IntoIterator> RoundRobinTrait for Vec<S> {
    type Item = S::Item;
    type Source = S::IntoIter;

    fn round_robin(self) -> RoundRobin<Self::Source> {
        RoundRobin::new(self.into_iter().map(IntoIterator::into_iter).collect())
    }
}
