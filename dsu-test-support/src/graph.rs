//! Explicit-edge undirected graph used to cross-check disjoint-set results.
//!
//! The graph stores every edge in both endpoints' adjacency sets and answers
//! reachability by brute-force depth-first search. Tests mirror each `unite`
//! call with an `add_edge` and then compare `is_connected` against
//! [`TestGraph::subtree`].

use std::collections::HashSet;

use thiserror::Error;

/// Errors surfaced by [`TestGraph`] operations.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum TestGraphError {
    /// A vertex index fell outside the graph.
    #[error("vertex {index} is out of bounds for a graph with {len} vertices")]
    OutOfBounds {
        /// The offending vertex index.
        index: usize,
        /// Number of vertices in the graph.
        len: usize,
    },
    /// The adjacency sets disagree about whether an edge exists.
    #[error("edge ({left}, {right}) is recorded in only one direction")]
    AsymmetricEdge {
        /// Left endpoint of the inconsistent edge.
        left: usize,
        /// Right endpoint of the inconsistent edge.
        right: usize,
    },
}

/// Undirected graph with per-vertex payloads and adjacency sets.
///
/// # Examples
/// ```
/// use dsu_test_support::graph::TestGraph;
///
/// let mut graph: TestGraph<u32> = TestGraph::new(3);
/// graph.add_edge(0, 1)?;
/// assert!(graph.has_edge(1, 0)?);
/// assert_eq!(graph.subtree(2)?, vec![2]);
/// # Ok::<(), dsu_test_support::graph::TestGraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct TestGraph<T> {
    data: Vec<T>,
    adjacency: Vec<HashSet<usize>>,
}

impl<T: Default> TestGraph<T> {
    /// Creates a graph of `n` isolated vertices with default payloads.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self::from_values((0..n).map(|_| T::default()).collect())
    }
}

impl<T> TestGraph<T> {
    /// Creates a graph with one isolated vertex per payload.
    #[must_use]
    pub fn from_values(data: Vec<T>) -> Self {
        let adjacency = (0..data.len()).map(|_| HashSet::new()).collect();
        Self { data, adjacency }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the payload stored at `vertex`, if it exists.
    #[must_use]
    pub fn value(&self, vertex: usize) -> Option<&T> {
        self.data.get(vertex)
    }

    /// Inserts the undirected edge `(left, right)`.
    ///
    /// # Errors
    /// Returns [`TestGraphError::OutOfBounds`] for invalid vertices and
    /// [`TestGraphError::AsymmetricEdge`] when the adjacency sets disagree
    /// about the edge before insertion.
    pub fn add_edge(&mut self, left: usize, right: usize) -> Result<(), TestGraphError> {
        self.ensure_consistent(left, right)?;
        self.adjacency[left].insert(right);
        self.adjacency[right].insert(left);
        Ok(())
    }

    /// Returns whether the undirected edge `(left, right)` exists.
    ///
    /// # Errors
    /// Same conditions as [`Self::add_edge`].
    pub fn has_edge(&self, left: usize, right: usize) -> Result<bool, TestGraphError> {
        self.ensure_consistent(left, right)?;
        Ok(self.is_adjacent(left, right))
    }

    /// Returns the neighbour set of `vertex`.
    ///
    /// # Errors
    /// Returns [`TestGraphError::OutOfBounds`] for an invalid vertex.
    pub fn neighbours(&self, vertex: usize) -> Result<&HashSet<usize>, TestGraphError> {
        self.adjacency.get(vertex).ok_or(TestGraphError::OutOfBounds {
            index: vertex,
            len: self.len(),
        })
    }

    /// Returns every vertex reachable from `vertex`, including itself.
    ///
    /// Traversal is an iterative depth-first search with an explicit stack;
    /// each vertex appears exactly once, in visitation order.
    ///
    /// # Errors
    /// Returns [`TestGraphError::OutOfBounds`] for an invalid vertex.
    pub fn subtree(&self, vertex: usize) -> Result<Vec<usize>, TestGraphError> {
        self.ensure_in_bounds(vertex)?;
        let mut visited = vec![false; self.len()];
        let mut stack = vec![vertex];
        let mut order = Vec::new();
        while let Some(current) = stack.pop() {
            if visited[current] {
                continue;
            }
            visited[current] = true;
            order.push(current);
            stack.extend(
                self.adjacency[current]
                    .iter()
                    .copied()
                    .filter(|&next| !visited[next]),
            );
        }
        Ok(order)
    }

    fn is_adjacent(&self, left: usize, right: usize) -> bool {
        self.adjacency[left].contains(&right)
    }

    fn ensure_in_bounds(&self, index: usize) -> Result<(), TestGraphError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(TestGraphError::OutOfBounds {
                index,
                len: self.len(),
            })
        }
    }

    fn ensure_consistent(&self, left: usize, right: usize) -> Result<(), TestGraphError> {
        self.ensure_in_bounds(left)?;
        self.ensure_in_bounds(right)?;
        if self.is_adjacent(left, right) == self.is_adjacent(right, left) {
            Ok(())
        } else {
            Err(TestGraphError::AsymmetricEdge { left, right })
        }
    }
}
