//! Strategy builders for union-sequence property tests.
//!
//! Each generator is driven by a seeded [`SmallRng`] so rstest cases can pin
//! a topology and seed while proptest samples both freely.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{Topology, UnionFixture};

/// Minimum element count for generated fixtures.
const MIN_NODES: usize = 2;
/// Maximum element count for generated fixtures.
const MAX_NODES: usize = 64;

/// Generates fixtures across every [`Topology`].
pub(super) fn union_fixture_strategy() -> impl Strategy<Value = UnionFixture> {
    (any::<Topology>(), any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, &mut rng)
    })
}

/// Generates a fixture for a specific topology.
pub(super) fn generate_fixture(topology: Topology, rng: &mut SmallRng) -> UnionFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let unions = match topology {
        Topology::Chain => chain(node_count, rng),
        Topology::Star => star(node_count, rng),
        Topology::Random => random_pairs(0, node_count, node_count, rng),
        Topology::Components => components(node_count, rng),
    };
    UnionFixture {
        node_count,
        unions,
        topology,
    }
}

/// Joins `i - 1` and `i` for every `i`, occasionally swapping argument order.
fn chain(node_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    (1..node_count)
        .map(|i| oriented(i - 1, i, rng))
        .collect()
}

fn star(node_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let hub = rng.gen_range(0..node_count);
    (0..node_count)
        .filter(|&leaf| leaf != hub)
        .map(|leaf| oriented(hub, leaf, rng))
        .collect()
}

/// Draws between `len / 2` and `2 * len` pairs from `offset..offset + len`.
fn random_pairs(
    offset: usize,
    len: usize,
    max_pairs_hint: usize,
    rng: &mut SmallRng,
) -> Vec<(usize, usize)> {
    let count = rng.gen_range(max_pairs_hint / 2..=max_pairs_hint * 2);
    (0..count)
        .map(|_| {
            (
                offset + rng.gen_range(0..len),
                offset + rng.gen_range(0..len),
            )
        })
        .collect()
}

/// Splits the elements into 2-5 contiguous blocks with random unions inside
/// each block only.
fn components(node_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let block_count = rng.gen_range(2..=5).min(node_count);
    let block_len = node_count.div_ceil(block_count);
    let mut unions = Vec::new();
    let mut offset = 0;
    while offset < node_count {
        let len = block_len.min(node_count - offset);
        unions.extend(random_pairs(offset, len, len, rng));
        offset += len;
    }
    unions
}

fn oriented(left: usize, right: usize, rng: &mut SmallRng) -> (usize, usize) {
    if rng.gen_bool(0.5) {
        (left, right)
    } else {
        (right, left)
    }
}
