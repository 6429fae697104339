//! Seeded union workloads.
//!
//! A workload is a union sequence followed by a batch of find queries. The
//! chain shape is the adversarial case for plain linking: without either
//! heuristic every query walks a path proportional to the container size.

use dsu_core::{Dsu, Heuristics};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::BenchSetupError;

/// Shape of the generated union sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WorkloadShape {
    /// `(i - 1, i)` for every `i`, joined left to right.
    Chain,
    /// Every element joined to element zero.
    Star,
    /// Uniformly random pairs, one per element.
    Random,
}

impl WorkloadShape {
    /// Every shape, in benchmark order.
    pub const ALL: [Self; 3] = [Self::Chain, Self::Star, Self::Random];

    /// Returns the shape's name for benchmark identifiers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chain => "chain",
            Self::Star => "star",
            Self::Random => "random",
        }
    }
}

/// A union sequence plus the queries issued after it.
#[derive(Clone, Debug)]
pub struct Workload {
    node_count: usize,
    unions: Vec<(usize, usize)>,
    queries: Vec<usize>,
}

impl Workload {
    /// Generates a workload of `node_count` elements from `seed`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when `node_count` is zero.
    pub fn generate(
        shape: WorkloadShape,
        node_count: usize,
        seed: u64,
    ) -> Result<Self, BenchSetupError> {
        if node_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "workload node count",
            });
        }
        let mut rng = SmallRng::seed_from_u64(seed);
        let unions = match shape {
            WorkloadShape::Chain => (1..node_count).map(|i| (i - 1, i)).collect(),
            WorkloadShape::Star => (1..node_count).map(|leaf| (0, leaf)).collect(),
            WorkloadShape::Random => (0..node_count)
                .map(|_| (rng.gen_range(0..node_count), rng.gen_range(0..node_count)))
                .collect(),
        };
        let queries = (0..node_count)
            .map(|_| rng.gen_range(0..node_count))
            .collect();
        Ok(Self {
            node_count,
            unions,
            queries,
        })
    }

    /// Number of elements the workload addresses.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Union calls in application order.
    #[must_use]
    pub fn unions(&self) -> &[(usize, usize)] {
        &self.unions
    }

    /// Find queries issued after the unions.
    #[must_use]
    pub fn queries(&self) -> &[usize] {
        &self.queries
    }

    /// Applies every union to a fresh container configured with
    /// `heuristics`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Dsu`] if a union addresses an element
    /// outside the container.
    pub fn replay(&self, heuristics: Heuristics) -> Result<Dsu<()>, BenchSetupError> {
        let mut dsu = Dsu::with_len(self.node_count);
        dsu.set_heuristics(heuristics);
        for &(left, right) in &self.unions {
            dsu.try_unite(left, right)?;
        }
        Ok(dsu)
    }

    /// Runs every query against `dsu` and returns the sum of the
    /// representatives, so the work cannot be optimised away.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Dsu`] if a query is out of range.
    pub fn run_queries<T>(&self, dsu: &mut Dsu<T>) -> Result<usize, BenchSetupError> {
        let mut checksum = 0_usize;
        for &query in &self.queries {
            checksum = checksum.wrapping_add(dsu.try_find(query)?);
        }
        Ok(checksum)
    }
}
