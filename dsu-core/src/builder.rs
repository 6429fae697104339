//! Builder for configuring [`Dsu`] instances.
//!
//! Collects the initial strategies and storage capacity, then constructs an
//! empty, sized, or value-seeded container.

use tracing::debug;

use crate::{
    dsu::Dsu,
    strategy::{FindStrategy, Heuristics, UnionStrategy},
};

/// Configures and constructs [`Dsu`] instances.
///
/// # Examples
/// ```
/// use dsu_core::{DsuBuilder, FindStrategy, UnionStrategy};
///
/// let mut dsu = DsuBuilder::new()
///     .with_find_strategy(FindStrategy::PathCompression)
///     .with_union_strategy(UnionStrategy::BySize)
///     .build_from(["x", "y", "z"]);
/// dsu.unite(0, 2);
/// assert!(dsu.is_connected(2, 0));
/// assert_eq!(dsu.find_strategy(), FindStrategy::PathCompression);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DsuBuilder {
    heuristics: Heuristics,
    capacity: usize,
}

impl DsuBuilder {
    /// Creates a builder with both heuristics disabled and no reserved
    /// capacity.
    ///
    /// # Examples
    /// ```
    /// use dsu_core::{DsuBuilder, Heuristics};
    ///
    /// let builder = DsuBuilder::new();
    /// assert_eq!(builder.heuristics(), Heuristics::none());
    /// assert_eq!(builder.capacity(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the initial find strategy.
    #[must_use]
    pub fn with_find_strategy(mut self, strategy: FindStrategy) -> Self {
        self.heuristics.find = strategy;
        self
    }

    /// Overrides the initial union strategy.
    #[must_use]
    pub fn with_union_strategy(mut self, strategy: UnionStrategy) -> Self {
        self.heuristics.union = strategy;
        self
    }

    /// Overrides both initial strategies.
    ///
    /// # Examples
    /// ```
    /// use dsu_core::{DsuBuilder, Heuristics};
    ///
    /// let builder = DsuBuilder::new().with_heuristics(Heuristics::all());
    /// assert_eq!(builder.heuristics(), Heuristics::all());
    /// ```
    #[must_use]
    pub fn with_heuristics(mut self, heuristics: Heuristics) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Reserves room for `capacity` elements up front.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Returns the configured strategies.
    #[must_use]
    pub const fn heuristics(&self) -> Heuristics {
        self.heuristics
    }

    /// Returns the configured capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Builds an empty container.
    #[must_use]
    pub fn build<T>(self) -> Dsu<T> {
        self.configure(Dsu::with_capacity(self.capacity))
    }

    /// Builds a container of `n` singleton groups with default payloads.
    ///
    /// # Examples
    /// ```
    /// use dsu_core::DsuBuilder;
    ///
    /// let dsu = DsuBuilder::new().build_with_len::<i64>(4);
    /// assert_eq!(dsu.len(), 4);
    /// assert_eq!(dsu.group_count(), 4);
    /// ```
    #[must_use]
    pub fn build_with_len<T: Default>(self, n: usize) -> Dsu<T> {
        let mut dsu = Dsu::with_capacity(self.capacity.max(n));
        dsu.extend((0..n).map(|_| T::default()));
        self.configure(dsu)
    }

    /// Builds a container with one singleton group per value.
    #[must_use]
    pub fn build_from<T, I>(self, values: I) -> Dsu<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut dsu = Dsu::with_capacity(self.capacity);
        dsu.extend(values);
        self.configure(dsu)
    }

    fn configure<T>(self, mut dsu: Dsu<T>) -> Dsu<T> {
        dsu.set_heuristics(self.heuristics);
        debug!(
            len = dsu.len(),
            capacity = self.capacity,
            find_strategy = self.heuristics.find.as_str(),
            union_strategy = self.heuristics.union.as_str(),
            "container built"
        );
        dsu
    }
}
