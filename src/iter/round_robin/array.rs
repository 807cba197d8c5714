use super::vec::RoundRobin;
use super::RoundRobin as RoundRobinTrait;

use alloc::vec::Vec;

impl<S: IntoIterator, const N: usize> RoundRobinTrait for [S; N] {
    type Item = S::Item;
    type Source = S::IntoIter;

    fn round_robin(self) -> RoundRobin<Self::Source> {
        Vec::from(self).round_robin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn round_robin_array_3() {
        let s: Vec<_> = [0..3, 10..11, 20..22].round_robin().collect();
        assert_eq!(s, [0, 10, 20, 1, 21, 2]);
    }

    #[test]
    fn round_robin_array_with_index() {
        let s: Vec<_> = [vec!['a'], vec![], vec!['b', 'c']]
            .round_robin()
            .with_index()
            .collect();
        assert_eq!(s, [('a', 0), ('b', 2), ('c', 2)]);
    }
}
