//! The disjoint-set-union container.
//!
//! [`Dsu`] stores one payload per element and partitions the elements into
//! disjoint groups. Payloads and group structure are independent: indexing
//! into the container never touches the forest, and merging groups never
//! touches payloads.

mod forest;
mod invariants;
#[cfg(test)]
mod property;

use std::ops::{Index, IndexMut};

#[cfg(feature = "metrics")]
use metrics::counter;
use tracing::{debug, trace};

use crate::{
    error::{DsuError, Result},
    strategy::{FindStrategy, Heuristics, UnionStrategy},
};

use self::forest::{Forest, Link};

pub use self::invariants::{DsuInvariantViolation, DsuInvariantViolationCode};

/// Generic disjoint-set-union container.
///
/// Elements are addressed by the zero-based index returned from
/// [`Dsu::add`] (or their position in the initial values). Indices are stable
/// for the container's lifetime because elements are never removed.
///
/// Operations taking an index panic when it is out of range; the `try_`
/// variants return [`DsuError::IndexOutOfBounds`] instead.
///
/// # Examples
/// ```
/// use dsu_core::Dsu;
///
/// let mut dsu = Dsu::from_values(["a", "b", "c", "d"]);
/// dsu.unite(0, 1);
/// dsu.unite(2, 3);
/// assert!(dsu.is_connected(0, 1));
/// assert!(!dsu.is_connected(1, 2));
/// assert_eq!(dsu.group_count(), 2);
/// assert_eq!(dsu[2], "c");
/// ```
#[derive(Clone, Debug)]
pub struct Dsu<T> {
    values: Vec<T>,
    forest: Forest,
    heuristics: Heuristics,
}

impl<T> Default for Dsu<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            forest: Forest::default(),
            heuristics: Heuristics::none(),
        }
    }
}

impl<T: Default> Dsu<T> {
    /// Creates `n` singleton groups holding default payloads.
    ///
    /// # Examples
    /// ```
    /// use dsu_core::Dsu;
    ///
    /// let mut dsu: Dsu<u32> = Dsu::with_len(3);
    /// assert_eq!(dsu.len(), 3);
    /// assert_eq!(dsu.find(2), 2);
    /// assert_eq!(dsu[1], 0);
    /// ```
    #[must_use]
    pub fn with_len(n: usize) -> Self {
        Self::from_values((0..n).map(|_| T::default()))
    }
}

impl<T> Dsu<T> {
    /// Creates an empty container with both heuristics disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty container with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            forest: Forest::with_capacity(capacity),
            heuristics: Heuristics::none(),
        }
    }

    /// Creates one singleton group per value, indexed in iteration order.
    ///
    /// # Examples
    /// ```
    /// use dsu_core::Dsu;
    ///
    /// let dsu = Dsu::from_values(vec![10, 20, 30]);
    /// assert_eq!(dsu.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
    /// assert_eq!(dsu.group_count(), 3);
    /// ```
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        let forest = Forest::with_len(values.len());
        Self {
            values,
            forest,
            heuristics: Heuristics::none(),
        }
    }

    /// Number of elements ever added.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the container holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.values.reserve(additional);
        self.forest.reserve(additional);
    }

    /// Appends `value` as a new singleton group and returns its index.
    ///
    /// The returned index is always `self.len() - 1` after the call.
    ///
    /// # Examples
    /// ```
    /// use dsu_core::Dsu;
    ///
    /// let mut dsu = Dsu::new();
    /// assert_eq!(dsu.add('x'), 0);
    /// assert_eq!(dsu.add('y'), 1);
    /// assert_eq!(dsu[1], 'y');
    /// ```
    pub fn add(&mut self, value: T) -> usize {
        self.values.push(value);
        self.forest.push_singleton()
    }

    // ── Group queries ──────────────────────────────────────────────────

    /// Returns the representative of the group containing `index`.
    ///
    /// Compresses the walked path when [`FindStrategy::PathCompression`] is
    /// active.
    ///
    /// # Errors
    /// Returns [`DsuError::IndexOutOfBounds`] when `index >= self.len()`.
    pub fn try_find(&mut self, index: usize) -> Result<usize> {
        self.ensure_index(index)?;
        Ok(self.find_unchecked(index))
    }

    /// Returns the representative of the group containing `index`.
    ///
    /// # Panics
    /// Panics when `index >= self.len()`.
    #[track_caller]
    pub fn find(&mut self, index: usize) -> usize {
        expect_in_bounds(self.try_find(index))
    }

    /// Merges the groups of `left` and `right` and returns the surviving
    /// representative.
    ///
    /// Returns the shared representative unchanged when both elements are
    /// already in one group.
    ///
    /// # Errors
    /// Returns [`DsuError::IndexOutOfBounds`] when either index is out of
    /// range; the container is left untouched in that case.
    pub fn try_unite(&mut self, left: usize, right: usize) -> Result<usize> {
        self.ensure_index(left)?;
        self.ensure_index(right)?;
        let left_root = self.find_unchecked(left);
        let right_root = self.find_unchecked(right);
        let link = self
            .forest
            .link_roots(left_root, right_root, self.heuristics.union);
        if let Link::Merged { root, absorbed } = link {
            trace!(
                absorbed,
                root,
                weight = self.forest.weight[root],
                strategy = self.heuristics.union.as_str(),
                "merged groups"
            );
            #[cfg(feature = "metrics")]
            counter!("dsu_unite_merges_total").increment(1);
        }
        Ok(link.root())
    }

    /// Merges the groups of `left` and `right`.
    ///
    /// # Panics
    /// Panics when either index is out of range.
    #[track_caller]
    pub fn unite(&mut self, left: usize, right: usize) -> usize {
        expect_in_bounds(self.try_unite(left, right))
    }

    /// Returns whether `left` and `right` belong to the same group.
    ///
    /// # Errors
    /// Returns [`DsuError::IndexOutOfBounds`] when either index is out of
    /// range.
    pub fn try_is_connected(&mut self, left: usize, right: usize) -> Result<bool> {
        self.ensure_index(left)?;
        self.ensure_index(right)?;
        Ok(self.find_unchecked(left) == self.find_unchecked(right))
    }

    /// Returns whether `left` and `right` belong to the same group.
    ///
    /// # Panics
    /// Panics when either index is out of range.
    #[track_caller]
    pub fn is_connected(&mut self, left: usize, right: usize) -> bool {
        expect_in_bounds(self.try_is_connected(left, right))
    }

    // ── Read-only introspection ────────────────────────────────────────

    /// Returns the representative of `index` without compressing paths.
    ///
    /// # Panics
    /// Panics when `index >= self.len()`.
    #[must_use]
    #[track_caller]
    pub fn root_of(&self, index: usize) -> usize {
        expect_in_bounds(self.ensure_index(index));
        self.forest.root(index)
    }

    /// Number of parent links between `index` and its representative.
    ///
    /// # Examples
    /// ```
    /// use dsu_core::Dsu;
    ///
    /// let mut dsu: Dsu<()> = Dsu::with_len(3);
    /// dsu.unite(0, 1);
    /// dsu.unite(1, 2);
    /// assert_eq!(dsu.depth(0), 2);
    /// dsu.enable_find_heuristic();
    /// dsu.find(0);
    /// assert_eq!(dsu.depth(0), 1);
    /// ```
    ///
    /// # Panics
    /// Panics when `index >= self.len()`.
    #[must_use]
    #[track_caller]
    pub fn depth(&self, index: usize) -> usize {
        expect_in_bounds(self.ensure_index(index));
        self.forest.depth(index)
    }

    /// Number of elements in the group containing `index`.
    ///
    /// # Panics
    /// Panics when `index >= self.len()`.
    #[must_use]
    #[track_caller]
    pub fn set_size(&self, index: usize) -> usize {
        let root = self.root_of(index);
        self.forest.weight[root]
    }

    /// Number of disjoint groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.forest.groups
    }

    /// Returns the partition as ascending index lists, ordered by each
    /// group's smallest member.
    ///
    /// # Examples
    /// ```
    /// use dsu_core::Dsu;
    ///
    /// let mut dsu: Dsu<()> = Dsu::with_len(4);
    /// dsu.unite(3, 1);
    /// assert_eq!(dsu.groups(), vec![vec![0], vec![1, 3], vec![2]]);
    /// ```
    #[must_use]
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut slot_of_root: Vec<Option<usize>> = vec![None; self.len()];
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.forest.groups);
        for index in 0..self.len() {
            let root = self.forest.root(index);
            let slot = *slot_of_root[root].get_or_insert_with(|| {
                groups.push(Vec::with_capacity(self.forest.weight[root]));
                groups.len() - 1
            });
            groups[slot].push(index);
        }
        groups
    }

    // ── Payload access ─────────────────────────────────────────────────

    /// Returns the payload at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Returns the payload at `index` mutably, if it exists.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.values.get_mut(index)
    }

    /// Iterates over payloads in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Iterates mutably over payloads in index order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.values.iter_mut()
    }

    /// Returns every payload as a slice in index order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Consumes the container and returns the payloads in index order.
    #[must_use]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    // ── Strategy selection ─────────────────────────────────────────────

    /// Currently active strategies.
    #[must_use]
    pub const fn heuristics(&self) -> Heuristics {
        self.heuristics
    }

    /// Currently active find strategy.
    #[must_use]
    pub const fn find_strategy(&self) -> FindStrategy {
        self.heuristics.find
    }

    /// Currently active union strategy.
    #[must_use]
    pub const fn union_strategy(&self) -> UnionStrategy {
        self.heuristics.union
    }

    /// Replaces both strategies for subsequent calls.
    pub fn set_heuristics(&mut self, heuristics: Heuristics) {
        self.set_find_strategy(heuristics.find);
        self.set_union_strategy(heuristics.union);
    }

    /// Selects the find strategy for subsequent calls.
    pub fn set_find_strategy(&mut self, strategy: FindStrategy) {
        debug!(
            previous = self.heuristics.find.as_str(),
            find_strategy = strategy.as_str(),
            "find strategy selected"
        );
        self.heuristics.find = strategy;
    }

    /// Selects the union strategy for subsequent calls.
    pub fn set_union_strategy(&mut self, strategy: UnionStrategy) {
        debug!(
            previous = self.heuristics.union.as_str(),
            union_strategy = strategy.as_str(),
            "union strategy selected"
        );
        self.heuristics.union = strategy;
    }

    /// Enables path compression.
    pub fn enable_find_heuristic(&mut self) {
        self.set_find_strategy(FindStrategy::PathCompression);
    }

    /// Disables path compression.
    pub fn disable_find_heuristic(&mut self) {
        self.set_find_strategy(FindStrategy::Plain);
    }

    /// Enables union by size.
    pub fn enable_union_heuristic(&mut self) {
        self.set_union_strategy(UnionStrategy::BySize);
    }

    /// Disables union by size.
    pub fn disable_union_heuristic(&mut self) {
        self.set_union_strategy(UnionStrategy::Plain);
    }

    // ── Internals ──────────────────────────────────────────────────────

    fn ensure_index(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(DsuError::IndexOutOfBounds {
                index,
                len: self.len(),
            })
        }
    }

    fn find_unchecked(&mut self, index: usize) -> usize {
        let (root, rewired) = self.forest.find(index, self.heuristics.find);
        #[cfg(feature = "metrics")]
        if rewired > 0 {
            counter!("dsu_path_compressions_total").increment(rewired as u64);
        }
        #[cfg(not(feature = "metrics"))]
        let _ = rewired;
        root
    }
}

#[track_caller]
fn expect_in_bounds<R>(result: Result<R>) -> R {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

impl<T> Index<usize> for Dsu<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        expect_in_bounds(self.ensure_index(index));
        &self.values[index]
    }
}

impl<T> IndexMut<usize> for Dsu<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        expect_in_bounds(self.ensure_index(index));
        &mut self.values[index]
    }
}

impl<T> From<Vec<T>> for Dsu<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

impl<T> FromIterator<T> for Dsu<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T> Extend<T> for Dsu<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> IntoIterator for Dsu<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Dsu<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Dsu<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter_mut()
    }
}
