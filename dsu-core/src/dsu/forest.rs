//! Parent-pointer forest backing [`super::Dsu`].
//!
//! Groups are trees stored as two parallel arrays: `parent[i]` is the index
//! of `i`'s parent (roots point at themselves) and `weight[i]` is the number
//! of elements in the tree rooted at `i`. Weights are only meaningful for
//! roots; once a root is absorbed its weight is never read again.
//!
//! Every method here assumes its indices were bounds-checked by the caller.

use crate::strategy::{FindStrategy, UnionStrategy};

/// Outcome of linking the groups of two elements.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Link {
    /// Both elements already shared `root`.
    AlreadyJoined {
        /// Representative of the shared group.
        root: usize,
    },
    /// `absorbed` was attached under `root`.
    Merged {
        /// Surviving representative.
        root: usize,
        /// Former representative now pointing at `root`.
        absorbed: usize,
    },
}

impl Link {
    pub(super) const fn root(self) -> usize {
        match self {
            Self::AlreadyJoined { root } | Self::Merged { root, .. } => root,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub(super) struct Forest {
    pub(super) parent: Vec<usize>,
    pub(super) weight: Vec<usize>,
    pub(super) groups: usize,
}

impl Forest {
    pub(super) fn with_len(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            weight: vec![1; n],
            groups: n,
        }
    }

    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: Vec::with_capacity(capacity),
            weight: Vec::with_capacity(capacity),
            groups: 0,
        }
    }

    pub(super) fn len(&self) -> usize {
        self.parent.len()
    }

    pub(super) fn reserve(&mut self, additional: usize) {
        self.parent.reserve(additional);
        self.weight.reserve(additional);
    }

    /// Appends a singleton tree and returns its index.
    pub(super) fn push_singleton(&mut self) -> usize {
        let index = self.parent.len();
        self.parent.push(index);
        self.weight.push(1);
        self.groups += 1;
        index
    }

    /// Walks to the root of `node` without touching the forest.
    pub(super) fn root(&self, mut node: usize) -> usize {
        while self.parent[node] != node {
            node = self.parent[node];
        }
        node
    }

    /// Number of parent links between `node` and its root.
    pub(super) fn depth(&self, mut node: usize) -> usize {
        let mut depth = 0;
        while self.parent[node] != node {
            node = self.parent[node];
            depth += 1;
        }
        depth
    }

    /// Returns the root of `node` and how many links were rewritten.
    pub(super) fn find(&mut self, node: usize, strategy: FindStrategy) -> (usize, usize) {
        match strategy {
            FindStrategy::Plain => (self.root(node), 0),
            FindStrategy::PathCompression => self.find_compressing(node),
        }
    }

    fn find_compressing(&mut self, mut node: usize) -> (usize, usize) {
        let root = self.root(node);
        let mut rewired = 0;
        while self.parent[node] != root && node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            rewired += 1;
            node = next;
        }
        (root, rewired)
    }

    /// Links the trees rooted at `left_root` and `right_root`.
    pub(super) fn link_roots(
        &mut self,
        left_root: usize,
        right_root: usize,
        strategy: UnionStrategy,
    ) -> Link {
        if left_root == right_root {
            return Link::AlreadyJoined { root: left_root };
        }

        let (child, parent) = choose_child_parent(
            left_root,
            right_root,
            self.weight[left_root],
            self.weight[right_root],
            strategy,
        );
        self.parent[child] = parent;
        self.weight[parent] += self.weight[child];
        self.groups -= 1;
        Link::Merged {
            root: parent,
            absorbed: child,
        }
    }
}

/// Picks which root is attached under which.
///
/// The plain policy is right-biased. The size policy only deviates from it
/// when the left group is strictly larger.
fn choose_child_parent(
    left_root: usize,
    right_root: usize,
    left_weight: usize,
    right_weight: usize,
    strategy: UnionStrategy,
) -> (usize, usize) {
    match strategy {
        UnionStrategy::BySize if left_weight > right_weight => (right_root, left_root),
        UnionStrategy::Plain | UnionStrategy::BySize => (left_root, right_root),
    }
}
