use sequence_combinators::prelude::*;

use futures::stream::{self, BoxStream, StreamExt};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A stream of `values` that gives way to the runtime before each value.
fn yielding(values: Vec<u32>) -> BoxStream<'static, u32> {
    stream::iter(values)
        .then(|value| async move {
            tokio::task::yield_now().await;
            value
        })
        .boxed()
}

fn sorted_sources(seed: u64, count: usize) -> Vec<Vec<u32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..50);
            let mut values: Vec<u32> = (0..len).map(|_| rng.gen_range(0..100)).collect();
            values.sort_unstable();
            values
        })
        .collect()
}

#[tokio::test]
async fn stream_merge_matches_iter_merge() {
    for seed in 0..4 {
        let sources = sorted_sources(seed, 6);
        let expected: Vec<_> = sources.clone().sorted_merge().with_index().collect();

        let streams: Vec<_> = sources.into_iter().map(yielding).collect();
        let merged: Vec<_> = streams.sorted_merge().with_index().collect().await;
        assert_eq!(merged, expected);
    }
}

#[tokio::test]
async fn stream_union_matches_kmerge_dedup() {
    let sources = sorted_sources(42, 5);
    let expected: Vec<_> = sources.clone().into_iter().kmerge().dedup().map(Ok).collect();

    let streams: Vec<_> = sources.into_iter().map(yielding).collect();
    let union: Vec<_> = streams.sorted_union().collect().await;
    assert_eq!(union, expected);
}

#[tokio::test]
async fn stream_intersection_matches_iter_intersection() {
    for degree in 1..=4 {
        let sources = sorted_sources(7, 4);
        let expected: Vec<_> = sources.clone().sorted_intersection().degree(degree).collect();

        let streams: Vec<_> = sources.into_iter().map(yielding).collect();
        let common: Vec<_> = streams.sorted_intersection().degree(degree).collect().await;
        assert_eq!(common, expected, "degree {degree}");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn stream_round_robin_and_concat_match_iter() {
    let sources = sorted_sources(3, 5);

    let expected: Vec<_> = sources.clone().round_robin().with_index().collect();
    let streams: Vec<_> = sources.clone().into_iter().map(yielding).collect();
    let interleaved: Vec<_> = tokio::spawn(async move {
        streams.round_robin().with_index().collect::<Vec<_>>().await
    })
    .await
    .unwrap();
    assert_eq!(interleaved, expected);

    let expected: Vec<_> = sources.clone().concat().collect();
    let streams: Vec<_> = sources.into_iter().map(yielding).collect();
    let concatenated: Vec<_> = streams.concat().collect().await;
    assert_eq!(concatenated, expected);
}
