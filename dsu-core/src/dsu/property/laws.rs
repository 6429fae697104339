//! Algebraic laws of connectivity.
//!
//! Checks reflexivity, symmetry and transitivity of `is_connected`, the
//! stability of `find`, idempotence of repeated unions, the height bound of
//! union by size, and that merging never disturbs payloads.

use proptest::prop_assert;
use proptest::prop_assert_eq;
use proptest::test_runner::TestCaseResult;

use crate::{Dsu, FindStrategy, Heuristics, UnionStrategy};

use super::types::UnionFixture;

fn united(fixture: &UnionFixture, heuristics: Heuristics) -> Dsu<usize> {
    let mut dsu = Dsu::from_values(0..fixture.node_count);
    dsu.set_heuristics(heuristics);
    for &(left, right) in &fixture.unions {
        dsu.unite(left, right);
    }
    dsu
}

/// Connectivity is an equivalence relation under every strategy.
///
/// Every pair is checked against the group label taken from `groups()`.
/// Label equality is itself an equivalence, so agreement on all pairs gives
/// reflexivity, symmetry and transitivity over the whole container.
pub(super) fn run_equivalence_relation_property(fixture: &UnionFixture) -> TestCaseResult {
    for heuristics in Heuristics::combinations() {
        let mut dsu = united(fixture, heuristics);
        let mut label = vec![usize::MAX; fixture.node_count];
        for (group, members) in dsu.groups().into_iter().enumerate() {
            for member in members {
                prop_assert_eq!(label[member], usize::MAX, "{} listed twice", member);
                label[member] = group;
            }
        }
        prop_assert!(label.iter().all(|&group| group != usize::MAX), "element missing from groups");

        for left in 0..fixture.node_count {
            for right in 0..fixture.node_count {
                prop_assert_eq!(
                    dsu.is_connected(left, right),
                    label[left] == label[right],
                    "pair ({}, {}) under {:?}",
                    left,
                    right,
                    heuristics
                );
            }
        }
    }
    Ok(())
}

/// Repeated finds agree, and replaying the same unions changes nothing.
pub(super) fn run_stability_property(fixture: &UnionFixture) -> TestCaseResult {
    for heuristics in Heuristics::combinations() {
        let mut dsu = united(fixture, heuristics);
        for index in 0..fixture.node_count {
            let first = dsu.find(index);
            prop_assert_eq!(dsu.find(index), first);
            prop_assert_eq!(dsu.root_of(index), first);
        }

        let groups = dsu.groups();
        let group_count = dsu.group_count();
        for &(left, right) in &fixture.unions {
            let root = dsu.find(left);
            prop_assert_eq!(dsu.unite(left, right), root);
        }
        prop_assert_eq!(dsu.groups(), groups);
        prop_assert_eq!(dsu.group_count(), group_count);
    }
    Ok(())
}

/// Payload `i` stays at index `i` regardless of how the forest was built.
pub(super) fn run_payload_preservation_property(fixture: &UnionFixture) -> TestCaseResult {
    for heuristics in Heuristics::combinations() {
        let dsu = united(fixture, heuristics);
        prop_assert_eq!(dsu.len(), fixture.node_count);
        for (index, &value) in dsu.iter().enumerate() {
            prop_assert_eq!(value, index);
        }
    }
    Ok(())
}

/// Union by size without compression keeps every tree within `log2(n)`
/// levels, whatever order the unions arrive in.
pub(super) fn run_size_union_height_property(fixture: &UnionFixture) -> TestCaseResult {
    let dsu = united(
        fixture,
        Heuristics {
            find: FindStrategy::Plain,
            union: UnionStrategy::BySize,
        },
    );
    let bound = fixture.node_count.ilog2() as usize;
    for index in 0..fixture.node_count {
        let depth = dsu.depth(index);
        let group_bound = dsu.set_size(index).ilog2() as usize;
        prop_assert!(
            depth <= group_bound && depth <= bound,
            "depth {} of {} exceeds log2 bound {} (group size {}, topology {:?})",
            depth,
            index,
            group_bound,
            dsu.set_size(index),
            fixture.topology
        );
    }
    Ok(())
}
