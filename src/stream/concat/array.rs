use super::vec::Concat;
use super::Concat as ConcatTrait;
use crate::stream::IntoStream;

use alloc::vec::Vec;

impl<S: IntoStream, const N: usize> ConcatTrait for [S; N] {
    type Item = S::Item;
    type Source = S::IntoStream;

    fn concat(self) -> Concat<Self::Source> {
        Vec::from(self).concat()
    }
}
