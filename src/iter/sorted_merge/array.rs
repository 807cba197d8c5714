use super::vec::SortedMerge;
use super::SortedMerge as SortedMergeTrait;
use crate::compare::Natural;

use alloc::vec::Vec;
use core::cmp::Ordering;

impl<S: IntoIterator, const N: usize> SortedMergeTrait for [S; N] {
    type Item = S::Item;
    type Source = S::IntoIter;

    fn sorted_merge(self) -> SortedMerge<Self::Source, Natural> {
        Vec::from(self).sorted_merge()
    }

    fn sorted_merge_by<F>(self, compare: F) -> SortedMerge<Self::Source, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Option<Ordering>,
    {
        Vec::from(self).sorted_merge_by(compare)
    }
}
