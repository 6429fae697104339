//! Type definitions for union-sequence property tests.

use test_strategy::Arbitrary;

/// Shape of the generated union sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum Topology {
    /// Consecutive elements joined in order, the worst case for plain
    /// linking.
    #[weight(2)]
    Chain,
    /// One hub joined to every other element.
    #[weight(2)]
    Star,
    /// Uniformly random pairs, including self-unions and repeats.
    #[weight(3)]
    Random,
    /// Random unions confined to disjoint blocks, so several groups survive.
    #[weight(2)]
    Components,
}

/// Fixture for union-sequence property tests.
#[derive(Clone, Debug)]
pub(super) struct UnionFixture {
    /// Number of elements in the container.
    pub node_count: usize,
    /// Union calls in application order.
    pub unions: Vec<(usize, usize)>,
    /// Topology used during generation.
    pub topology: Topology,
}
