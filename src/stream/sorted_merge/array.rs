use super::vec::SortedMerge;
use super::SortedMerge as SortedMergeTrait;
use crate::compare::Natural;
use crate::stream::IntoStream;

use alloc::vec::Vec;
use core::cmp::Ordering;

impl<S: IntoStream, const N: usize> SortedMergeTrait for [S; N] {
    type Item = S::Item;
    type Source = S::IntoStream;

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

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use futures_lite::future::block_on;
    use futures_lite::stream::{self, StreamExt};

    #[test]
    fn merge_array_reversed() {
        block_on(async {
            let a = stream::iter(vec![3, 1]);
            let b = stream::iter(vec![2]);
            let merged: Vec<_> = [a, b]
                .sorted_merge_by(|a, b| b.partial_cmp(a))
                .with_index()
                .collect()
                .await;
            assert_eq!(merged, [Ok((3, 0)), Ok((2, 1)), Ok((1, 0))]);
        })
    }
}
