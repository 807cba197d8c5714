use super::vec::SortedUnion;
use super::SortedUnion as SortedUnionTrait;
use crate::compare::Natural;

use alloc::vec::Vec;
use core::cmp::Ordering;

impl<S: IntoIterator, const N: usize> SortedUnionTrait for [S; N] {
    type Item = S::Item;
    type Source = S::IntoIter;

    fn sorted_union(self) -> SortedUnion<Self::Source, Natural> {
        Vec::from(self).sorted_union()
    }

    fn sorted_union_by<F>(self, compare: F) -> SortedUnion<Self::Source, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Option<Ordering>,
    {
        Vec::from(self).sorted_union_by(compare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn union_array_3() {
        let union: Vec<_> = [vec![1, 2], vec![2, 3], vec![1, 2, 5]]
            .sorted_union()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(union, [1, 2, 3, 5]);
    }

    #[test]
    fn union_array_reversed() {
        let union: Vec<_> = [vec![2, 1], vec![3, 2], vec![5, 2, 1]]
            .sorted_union_by(|a, b| b.partial_cmp(a))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(union, [5, 3, 2, 1]);
    }
}
