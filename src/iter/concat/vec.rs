use super::Concat as ConcatTrait;
use crate::utils::size_hint;

use alloc::vec::Vec;
use core::iter::FusedIterator;

/// An iterator that yields the values of multiple iterators one after
/// another.
///
/// This `struct` is created by the [`concat`] method on the [`Concat`]
/// trait. See its documentation for more.
///
/// [`concat`]: crate::iter::Concat::concat
/// [`Concat`]: crate::iter::Concat
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Concat<I> {
    sources: Vec<I>,
    index: usize,
}

impl<I: Iterator> Iterator for Concat<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(source) = self.sources.get_mut(self.index) {
            match source.next() {
                Some(value) => return Some(value),
                None => self.index += 1,
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        size_hint::sum(self.sources[self.index..].iter().map(Iterator::size_hint))
    }
}

impl<I: Iterator> FusedIterator for Concat<I> {}

impl<S: IntoIterator> ConcatTrait for Vec<S> {
    type Item = S::Item;
    type Source = S::IntoIter;

    fn concat(self) -> Concat<Self::Source> {
        Concat {
            sources: self.into_iter().map(IntoIterator::into_iter).collect(),
            index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::cell::Cell;

    #[test]
    fn concat_vec_3() {
        let s: Vec<_> = vec![vec![], vec![2, 1], vec![1], vec![]].concat().collect();
        assert_eq!(s, [2, 1, 1]);
    }

    #[test]
    fn concat_vec_empty() {
        let mut s = Vec::<Vec<u8>>::new().concat();
        assert_eq!(s.next(), None);
        assert_eq!(s.next(), None);
    }

    #[test]
    fn concat_vec_pulls_one_source_at_a_time() {
        let pulled = Cell::new([0; 2]);
        let tracked = |index: usize, values: Vec<i32>| {
            let pulled = &pulled;
            values.into_iter().inspect(move |_| {
                let mut counts = pulled.get();
                counts[index] += 1;
                pulled.set(counts);
            })
        };
        let mut s = vec![tracked(0, vec![1, 2]), tracked(1, vec![3])].concat();
        assert_eq!(s.next(), Some(1));
        assert_eq!(s.next(), Some(2));
        assert_eq!(pulled.get(), [2, 0]);
        assert_eq!(s.next(), Some(3));
        assert_eq!(pulled.get(), [2, 1]);
    }

    #[test]
    fn concat_vec_size_hint() {
        let mut s = vec![vec![1, 2], vec![3]].concat();
        assert_eq!(s.size_hint(), (3, Some(3)));
        s.next();
        s.next();
        assert_eq!(s.size_hint(), (1, Some(1)));

        let s = vec![0.., 0..].concat();
        assert_eq!(s.size_hint(), (usize::MAX, None));
    }

    #[test]
    fn concat_vec_size_hint_overflow() {
        let s = vec![0..usize::MAX, 0..2].concat();
        assert_eq!(s.size_hint(), (usize::MAX, None));
    }
}
