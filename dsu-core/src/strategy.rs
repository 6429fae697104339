//! Algorithm variants selectable at runtime.
//!
//! A [`crate::Dsu`] holds one [`FindStrategy`] and one [`UnionStrategy`].
//! Switching either only changes how later calls behave; the existing forest
//! is left exactly as it is.

/// How `find` walks from an element to its root.
///
/// # Examples
/// ```
/// use dsu_core::FindStrategy;
///
/// assert_eq!(FindStrategy::default(), FindStrategy::Plain);
/// assert_eq!(FindStrategy::PathCompression.as_str(), "path_compression");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum FindStrategy {
    /// Follow parent links to the root without modifying the forest.
    #[default]
    Plain,
    /// Re-point every visited element directly at the root.
    PathCompression,
}

impl FindStrategy {
    /// Returns a stable lowercase label for logs and benchmark ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::PathCompression => "path_compression",
        }
    }

    /// Returns whether this is the path-compressing variant.
    ///
    /// # Examples
    /// ```
    /// use dsu_core::FindStrategy;
    ///
    /// assert!(FindStrategy::PathCompression.is_heuristic());
    /// assert!(!FindStrategy::Plain.is_heuristic());
    /// ```
    #[must_use]
    pub const fn is_heuristic(self) -> bool {
        matches!(self, Self::PathCompression)
    }
}

/// How `unite` decides which root survives a merge.
///
/// # Examples
/// ```
/// use dsu_core::UnionStrategy;
///
/// assert_eq!(UnionStrategy::default(), UnionStrategy::Plain);
/// assert_eq!(UnionStrategy::BySize.as_str(), "by_size");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum UnionStrategy {
    /// Always attach the left argument's root under the right argument's root.
    #[default]
    Plain,
    /// Attach the smaller group's root under the larger group's root. Equal
    /// sizes fall back to the plain left-under-right attachment.
    BySize,
}

impl UnionStrategy {
    /// Returns a stable lowercase label for logs and benchmark ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::BySize => "by_size",
        }
    }

    /// Returns whether this is the size-balancing variant.
    ///
    /// # Examples
    /// ```
    /// use dsu_core::UnionStrategy;
    ///
    /// assert!(UnionStrategy::BySize.is_heuristic());
    /// assert!(!UnionStrategy::Plain.is_heuristic());
    /// ```
    #[must_use]
    pub const fn is_heuristic(self) -> bool {
        matches!(self, Self::BySize)
    }
}

/// The pair of strategies a container runs with.
///
/// # Examples
/// ```
/// use dsu_core::{FindStrategy, Heuristics, UnionStrategy};
///
/// let all = Heuristics::all();
/// assert_eq!(all.find, FindStrategy::PathCompression);
/// assert_eq!(all.union, UnionStrategy::BySize);
/// assert_eq!(Heuristics::default(), Heuristics::none());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Heuristics {
    /// Strategy used by `find` and by the root lookups inside `unite`.
    pub find: FindStrategy,
    /// Strategy used to link two distinct roots.
    pub union: UnionStrategy,
}

impl Heuristics {
    /// Both heuristics disabled.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            find: FindStrategy::Plain,
            union: UnionStrategy::Plain,
        }
    }

    /// Path compression and union by size both enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            find: FindStrategy::PathCompression,
            union: UnionStrategy::BySize,
        }
    }

    /// Every combination, in a fixed order, for exhaustive testing and
    /// benchmarking.
    #[must_use]
    pub const fn combinations() -> [Self; 4] {
        [
            Self::none(),
            Self {
                find: FindStrategy::PathCompression,
                union: UnionStrategy::Plain,
            },
            Self {
                find: FindStrategy::Plain,
                union: UnionStrategy::BySize,
            },
            Self::all(),
        ]
    }
}
