#![allow(unused)]

use futures_core::Stream;
use pin_project::pin_project;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use std::pin::Pin;
use std::task::{Context, Poll};

/// `count` sorted sources of `len` values each. Values are drawn from a range
/// about as wide as the total, so there are duplicates but not many.
pub fn sorted_vecs(count: usize, len: usize) -> Vec<Vec<u64>> {
    let mut rng = StdRng::seed_from_u64(42);
    let range = (count * len) as u64;
    (0..count)
        .map(|_| {
            let mut values: Vec<u64> = (0..len).map(|_| rng.gen_range(0..range)).collect();
            values.sort_unstable();
            values
        })
        .collect()
}

/// `sorted_vecs`, as streams which are pending before every value.
pub fn yielding_streams(count: usize, len: usize) -> Vec<Yielding<std::vec::IntoIter<u64>>> {
    sorted_vecs(count, len)
        .into_iter()
        .map(|values| Yielding::new(values.into_iter()))
        .collect()
}

/// A stream which needs to be polled twice for each of its values.
#[pin_project]
pub struct Yielding<I> {
    iter: I,
    ready: bool,
}

impl<I> Yielding<I> {
    pub fn new(iter: I) -> Self {
        Self { iter, ready: false }
    }
}

impl<I: Iterator> Stream for Yielding<I> {
    type Item = I::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if *this.ready {
            *this.ready = false;
            Poll::Ready(this.iter.next())
        } else {
            *this.ready = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
