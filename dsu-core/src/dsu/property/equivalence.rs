//! Heuristic equivalence with the relabelling oracle.
//!
//! Every combination of find and union strategy, and a sequence that
//! switches strategy between unions, must produce exactly the partition the
//! oracle computes.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Dsu, Heuristics};

use super::oracle::OraclePartition;
use super::types::UnionFixture;

/// Replays the fixture under each fixed strategy combination and compares
/// groups, group count, and set sizes with the oracle.
pub(super) fn run_oracle_equivalence_property(fixture: &UnionFixture) -> TestCaseResult {
    let oracle = OraclePartition::replay(fixture.node_count, &fixture.unions);
    let expected = oracle.groups();

    for heuristics in Heuristics::combinations() {
        let mut dsu = replay(fixture, |_| heuristics);
        compare_with_oracle(&mut dsu, &oracle, &expected, fixture, &format!("{heuristics:?}"))?;
    }
    Ok(())
}

/// Rotates through every strategy combination between consecutive unions.
pub(super) fn run_switching_equivalence_property(fixture: &UnionFixture) -> TestCaseResult {
    let oracle = OraclePartition::replay(fixture.node_count, &fixture.unions);
    let expected = oracle.groups();
    let combinations = Heuristics::combinations();

    let mut dsu = replay(fixture, |step| combinations[step % combinations.len()]);
    compare_with_oracle(&mut dsu, &oracle, &expected, fixture, "switching")
}

fn replay(fixture: &UnionFixture, heuristics_at: impl Fn(usize) -> Heuristics) -> Dsu<usize> {
    let mut dsu: Dsu<usize> = (0..fixture.node_count).collect();
    for (step, &(left, right)) in fixture.unions.iter().enumerate() {
        dsu.set_heuristics(heuristics_at(step));
        dsu.unite(left, right);
    }
    dsu
}

fn compare_with_oracle(
    dsu: &mut Dsu<usize>,
    oracle: &OraclePartition,
    expected: &[Vec<usize>],
    fixture: &UnionFixture,
    label: &str,
) -> TestCaseResult {
    dsu.check_invariants().map_err(|err| {
        TestCaseError::fail(format!(
            "invariant violated under {label}: {err} (topology={:?}, nodes={}, unions={})",
            fixture.topology,
            fixture.node_count,
            fixture.unions.len(),
        ))
    })?;

    let actual = dsu.groups();
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "partition mismatch under {label}: dsu={actual:?}, oracle={expected:?} \
             (topology={:?}, nodes={})",
            fixture.topology, fixture.node_count,
        )));
    }

    if dsu.group_count() != expected.len() {
        return Err(TestCaseError::fail(format!(
            "group count mismatch under {label}: dsu={}, oracle={} (topology={:?})",
            dsu.group_count(),
            expected.len(),
            fixture.topology,
        )));
    }

    for index in 0..fixture.node_count {
        let (size, oracle_size) = (dsu.set_size(index), oracle.group_size(index));
        if size != oracle_size {
            return Err(TestCaseError::fail(format!(
                "set size mismatch under {label} at {index}: dsu={size}, oracle={oracle_size} \
                 (topology={:?})",
                fixture.topology,
            )));
        }
    }
    Ok(())
}
