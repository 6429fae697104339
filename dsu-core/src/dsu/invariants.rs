//! Structural invariant checks for [`Dsu`].
//!
//! The forest must stay a forest: every parent link in range, every chain
//! ending at a self-referencing root, and the bookkeeping (root weights and
//! the tracked group count) agreeing with the actual trees.

use std::fmt;

use thiserror::Error;
use tracing::instrument;

use crate::error::define_error_codes;

use super::Dsu;

/// A broken structural invariant detected by [`Dsu::check_invariants`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DsuInvariantViolation {
    /// Payload, parent, and weight storage disagree on the element count.
    #[error("storage lengths disagree: payloads={payloads}, parents={parents}, weights={weights}")]
    LengthMismatch {
        /// Number of stored payloads.
        payloads: usize,
        /// Number of parent links.
        parents: usize,
        /// Number of weight slots.
        weights: usize,
    },
    /// A parent link points outside the container.
    #[error("element {node} has parent {parent}, but the container holds {len} elements")]
    ParentOutOfBounds {
        /// Element owning the bad link.
        node: usize,
        /// The out-of-range parent index.
        parent: usize,
        /// Number of elements in the container.
        len: usize,
    },
    /// Following parent links from `node` never reaches a root.
    #[error("parent links starting at element {node} form a cycle")]
    Cycle {
        /// An element on or leading into the cycle.
        node: usize,
    },
    /// A root's weight disagrees with the number of elements in its tree.
    #[error("root {root} records weight {recorded} but its tree holds {actual} elements")]
    WeightMismatch {
        /// The root whose weight is wrong.
        root: usize,
        /// Weight stored for the root.
        recorded: usize,
        /// Element count of the tree.
        actual: usize,
    },
    /// The tracked group count disagrees with the number of roots.
    #[error("tracked group count {tracked} differs from {roots} roots")]
    GroupCountMismatch {
        /// Group count maintained incrementally.
        tracked: usize,
        /// Number of roots present in the forest.
        roots: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DsuInvariantViolation`] variants.
    enum DsuInvariantViolationCode for DsuInvariantViolation {
        /// Payload, parent, and weight storage disagree on the element count.
        LengthMismatch => LengthMismatch { .. } => "DSU_LENGTH_MISMATCH",
        /// A parent link points outside the container.
        ParentOutOfBounds => ParentOutOfBounds { .. } => "DSU_PARENT_OUT_OF_BOUNDS",
        /// Following parent links never reaches a root.
        Cycle => Cycle { .. } => "DSU_CYCLE",
        /// A root's weight disagrees with its tree size.
        WeightMismatch => WeightMismatch { .. } => "DSU_WEIGHT_MISMATCH",
        /// The tracked group count disagrees with the number of roots.
        GroupCountMismatch => GroupCountMismatch { .. } => "DSU_GROUP_COUNT_MISMATCH",
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unseen,
    OnPath,
    Resolved,
}

impl<T> Dsu<T> {
    /// Verifies the structural invariants of the container.
    ///
    /// Runs in linear time and never mutates the forest.
    ///
    /// # Errors
    /// Returns the first [`DsuInvariantViolation`] found.
    ///
    /// # Examples
    /// ```
    /// use dsu_core::Dsu;
    ///
    /// let mut dsu: Dsu<u8> = Dsu::with_len(5);
    /// dsu.enable_union_heuristic();
    /// dsu.unite(0, 4);
    /// dsu.unite(1, 4);
    /// assert!(dsu.check_invariants().is_ok());
    /// ```
    #[instrument(
        name = "dsu.check_invariants",
        level = "debug",
        err,
        skip(self),
        fields(len = self.len(), groups = self.forest.groups),
    )]
    pub fn check_invariants(&self) -> Result<(), DsuInvariantViolation> {
        let forest = &self.forest;
        let len = self.values.len();
        if forest.len() != len || forest.weight.len() != len {
            return Err(DsuInvariantViolation::LengthMismatch {
                payloads: len,
                parents: forest.len(),
                weights: forest.weight.len(),
            });
        }

        for (node, &parent) in forest.parent.iter().enumerate() {
            if parent >= len {
                return Err(DsuInvariantViolation::ParentOutOfBounds { node, parent, len });
            }
        }

        let root_of = resolve_roots(&forest.parent)?;

        let mut counted = vec![0_usize; len];
        for &root in &root_of {
            counted[root] += 1;
        }
        let mut root_count = 0;
        for (node, &parent) in forest.parent.iter().enumerate() {
            if parent != node {
                continue;
            }
            root_count += 1;
            if forest.weight[node] != counted[node] {
                return Err(DsuInvariantViolation::WeightMismatch {
                    root: node,
                    recorded: forest.weight[node],
                    actual: counted[node],
                });
            }
        }

        if root_count != forest.groups {
            return Err(DsuInvariantViolation::GroupCountMismatch {
                tracked: forest.groups,
                roots: root_count,
            });
        }
        Ok(())
    }
}

/// Resolves every element's root in one pass, memoising finished chains.
///
/// Parents must already be known to be in range.
fn resolve_roots(parent: &[usize]) -> Result<Vec<usize>, DsuInvariantViolation> {
    let mut state = vec![Visit::Unseen; parent.len()];
    let mut root_of = vec![0_usize; parent.len()];
    let mut path = Vec::new();

    for start in 0..parent.len() {
        let mut node = start;
        let root = loop {
            match state[node] {
                Visit::Resolved => break root_of[node],
                Visit::OnPath => return Err(DsuInvariantViolation::Cycle { node }),
                Visit::Unseen if parent[node] == node => break node,
                Visit::Unseen => {
                    state[node] = Visit::OnPath;
                    path.push(node);
                    node = parent[node];
                }
            }
        };
        state[node] = Visit::Resolved;
        root_of[node] = root;
        for visited in path.drain(..) {
            state[visited] = Visit::Resolved;
            root_of[visited] = root;
        }
    }
    Ok(root_of)
}
