use super::vec::RoundRobin;
use super::RoundRobin as RoundRobinTrait;
use crate::stream::IntoStream;

use alloc::vec::Vec;

impl<S: IntoStream, const N: usize> RoundRobinTrait for [S; N] {
    type Item = S::Item;
    type Source = S::IntoStream;

    fn round_robin(self) -> RoundRobin<Self::Source> {
        Vec::from(self).round_robin()
    }
}
