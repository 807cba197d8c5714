use super::vec::Concat;
use super::Concat as ConcatTrait;

use alloc::vec::Vec;

impl<S: IntoIterator, const N: usize> ConcatTrait for [S; N] {
    type Item = S::Item;
    type Source = S::IntoIter;

    fn concat(self) -> Concat<Self::Source> {
        Vec::from(self).concat()
    }
}
