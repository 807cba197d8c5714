use super::vec::SortedUnion;
use super::SortedUnion as SortedUnionTrait;
use crate::compare::Natural;
use crate::stream::IntoStream;

use alloc::vec::Vec;
use core::cmp::Ordering;

impl<S: IntoStream, const N: usize> SortedUnionTrait for [S; N] {
    type Item = S::Item;
    type Source = S::IntoStream;

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
    use futures_lite::future::block_on;
    use futures_lite::stream::{self, StreamExt};

    #[test]
    fn union_array_by_key() {
        block_on(async {
            let a = stream::iter(["a", "bb"]);
            let b = stream::iter(["c", "ddd"]);
            let union: Vec<_> = [a, b]
                .sorted_union_by(|a, b| Some(a.len().cmp(&b.len())))
                .collect()
                .await;
            assert_eq!(union, [Ok("a"), Ok("bb"), Ok("ddd")]);
        })
    }
}
