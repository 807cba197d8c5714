use super::vec::SortedIntersection;
use super::SortedIntersection as SortedIntersectionTrait;
use crate::compare::Natural;

use alloc::vec::Vec;
use core::cmp::Ordering;

impl<S: IntoIterator, const N: usize> SortedIntersectionTrait for [S; N] {
    type Item = S::Item;
    type Source = S::IntoIter;

    fn sorted_intersection(self) -> SortedIntersection<Self::Source, Natural> {
        Vec::from(self).sorted_intersection()
    }

    fn sorted_intersection_by<F>(self, compare: F) -> SortedIntersection<Self::Source, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Option<Ordering>,
    {
        Vec::from(self).sorted_intersection_by(compare)
    }
}
