//! Benchmark parameter types.

use std::fmt;

use dsu_core::Heuristics;

use crate::workload::WorkloadShape;

/// Parameters for one find/unite benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct DsuBenchParams {
    /// Number of elements in the container.
    pub node_count: usize,
    /// Shape of the union sequence.
    pub shape: WorkloadShape,
    /// Strategies active while the workload runs.
    pub heuristics: Heuristics,
}

impl fmt::Display for DsuBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},shape={},find={},union={}",
            self.node_count,
            self.shape.as_str(),
            self.heuristics.find.as_str(),
            self.heuristics.union.as_str(),
        )
    }
}
