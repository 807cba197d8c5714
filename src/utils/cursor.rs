use alloc::vec::Vec;
use core::fmt;

use fixedbitset::FixedBitSet;
use smallvec::SmallVec;

use super::{select_min, size_hint};
use crate::compare::{CompareError, Comparator};

/// An iterator with exactly one value of lookahead.
///
/// The first value is pulled as soon as the cursor is created. A cursor whose
/// buffer is empty is exhausted, and never pulls from its source again.
pub(crate) struct Cursor<I: Iterator> {
    iter: I,
    buffered: Option<I::Item>,
}

impl<I: Iterator> Cursor<I> {
    pub(crate) fn new(mut iter: I) -> Self {
        let buffered = iter.next();
        Self { iter, buffered }
    }

    /// The buffered value, or `None` once exhausted.
    pub(crate) fn current(&self) -> Option<&I::Item> {
        self.buffered.as_ref()
    }

    /// Take the buffered value and pull the next one in its place.
    pub(crate) fn advance(&mut self) -> Option<I::Item> {
        let value = self.buffered.take()?;
        self.buffered = self.iter.next();
        Some(value)
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.buffered.is_none()
    }

    pub(crate) fn size_hint(&self) -> (usize, Option<usize>) {
        match self.buffered {
            Some(_) => size_hint::add((1, Some(1)), self.iter.size_hint()),
            None => (0, Some(0)),
        }
    }
}

impl<I> Clone for Cursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            buffered: self.buffered.clone(),
        }
    }
}

impl<I> fmt::Debug for Cursor<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("iter", &self.iter)
            .field("buffered", &self.buffered)
            .finish()
    }
}

/// A value taken out of the active set.
#[derive(Debug)]
pub(crate) struct Pulled<T> {
    pub(crate) value: T,
    /// Index of the source the value came from.
    pub(crate) index: usize,
    /// Whether the source was exhausted by this pull, and removed.
    pub(crate) retired: bool,
}

struct Slot<I: Iterator> {
    cursor: Cursor<I>,
    index: usize,
}

/// The cursors that can still produce values, in source order.
///
/// Sources are only wrapped in cursors, and so pulled from, the first time
/// the set is [primed](ActiveSet::primed).
pub(crate) struct ActiveSet<I: Iterator> {
    pending: Option<Vec<I>>,
    slots: SmallVec<[Slot<I>; 4]>,
}

impl<I: Iterator> ActiveSet<I> {
    pub(crate) fn new(sources: Vec<I>) -> Self {
        Self {
            pending: Some(sources),
            slots: SmallVec::new(),
        }
    }

    /// Create a cursor for every source, unless that already happened.
    /// Sources which turn out to be empty are dropped right away.
    pub(crate) fn primed(&mut self) -> &mut Self {
        if let Some(sources) = self.pending.take() {
            self.slots = sources
                .into_iter()
                .enumerate()
                .map(|(index, iter)| Slot {
                    cursor: Cursor::new(iter),
                    index,
                })
                .filter(|slot| !slot.cursor.is_exhausted())
                .collect();
        }
        self
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// `(source index, buffered value)` for every live cursor.
    fn candidates(&self) -> impl Iterator<Item = (usize, &I::Item)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.cursor.current().map(|value| (slot.index, value)))
    }

    /// Position of the cursor holding the smallest value.
    pub(crate) fn select_min<C>(
        &self,
        compare: &mut C,
        demote: Option<&FixedBitSet>,
    ) -> Result<Option<usize>, CompareError>
    where
        I::Item: fmt::Debug,
        C: Comparator<I::Item>,
    {
        select_min(self.candidates(), compare, demote)
    }

    /// Advance the cursor at `pos`, removing it from the set if that
    /// exhausted it.
    pub(crate) fn advance(&mut self, pos: usize) -> Option<Pulled<I::Item>> {
        let slot = self.slots.get_mut(pos)?;
        let value = slot.cursor.advance()?;
        let index = slot.index;
        let retired = slot.cursor.is_exhausted();
        if retired {
            self.slots.remove(pos);
        }
        Some(Pulled {
            value,
            index,
            retired,
        })
    }

    /// The total number of values the set can still produce.
    pub(crate) fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.pending {
            Some(sources) => size_hint::sum(sources.iter().map(Iterator::size_hint)),
            None => size_hint::sum(self.slots.iter().map(|slot| slot.cursor.size_hint())),
        }
    }
}

impl<I> Clone for ActiveSet<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            pending: self.pending.clone(),
            slots: self
                .slots
                .iter()
                .map(|slot| Slot {
                    cursor: slot.cursor.clone(),
                    index: slot.index,
                })
                .collect(),
        }
    }
}

impl<I> fmt::Debug for ActiveSet<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pending {
            Some(sources) => f.debug_tuple("Pending").field(sources).finish(),
            None => f
                .debug_map()
                .entries(self.slots.iter().map(|slot| (slot.index, &slot.cursor)))
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Natural;
    use alloc::vec;
    use core::cell::Cell;

    /// Counts how many times `next` was called on the inner iterator.
    struct Counted<'a, I> {
        iter: I,
        pulls: &'a Cell<usize>,
    }

    impl<I: Iterator> Iterator for Counted<'_, I> {
        type Item = I::Item;

        fn next(&mut self) -> Option<I::Item> {
            self.pulls.set(self.pulls.get() + 1);
            self.iter.next()
        }
    }

    #[test]
    fn cursor_pulls_first_value_on_creation() {
        let pulls = Cell::new(0);
        let cursor = Cursor::new(Counted {
            iter: [1, 2].into_iter(),
            pulls: &pulls,
        });
        assert_eq!(pulls.get(), 1);
        assert_eq!(cursor.current(), Some(&1));
        assert!(!cursor.is_exhausted());
    }

    #[test]
    fn cursor_refills_on_advance() {
        let mut cursor = Cursor::new([1, 2].into_iter());
        assert_eq!(cursor.advance(), Some(1));
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(cursor.advance(), Some(2));
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn exhausted_cursor_never_pulls_again() {
        let pulls = Cell::new(0);
        let mut cursor = Cursor::new(Counted {
            iter: core::iter::empty::<u8>(),
            pulls: &pulls,
        });
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.advance(), None);
        assert_eq!(pulls.get(), 1);
    }

    #[test]
    fn cursor_size_hint_counts_buffered_value() {
        let cursor = Cursor::new([1, 2, 3].into_iter());
        assert_eq!(cursor.size_hint(), (3, Some(3)));
    }

    #[test]
    fn active_set_is_lazy_until_primed() {
        let pulls = Cell::new(0);
        let sources = vec![
            Counted {
                iter: [1].into_iter(),
                pulls: &pulls,
            },
            Counted {
                iter: [2].into_iter(),
                pulls: &pulls,
            },
        ];
        let mut active = ActiveSet::new(sources);
        assert_eq!(pulls.get(), 0);
        assert_eq!(active.primed().len(), 2);
        assert_eq!(pulls.get(), 2);
        active.primed();
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn active_set_drops_empty_sources() {
        let sources = vec![vec![], vec![1], vec![]];
        let mut active = ActiveSet::new(sources.into_iter().map(Vec::into_iter).collect());
        let active = active.primed();
        assert_eq!(active.len(), 1);

        let pulled = active.advance(0).unwrap();
        assert_eq!((pulled.value, pulled.index, pulled.retired), (1, 1, true));
        assert!(active.is_empty());
    }

    #[test]
    fn active_set_selects_by_position() {
        let sources = vec![vec![4, 5], vec![], vec![3, 6]];
        let mut active = ActiveSet::new(sources.into_iter().map(Vec::into_iter).collect());
        let active = active.primed();

        let pos = active.select_min(&mut Natural, None).unwrap().unwrap();
        assert_eq!(pos, 1);
        let pulled = active.advance(pos).unwrap();
        assert_eq!((pulled.value, pulled.index, pulled.retired), (3, 2, false));
        assert_eq!(active.size_hint(), (3, Some(3)));
    }
}
