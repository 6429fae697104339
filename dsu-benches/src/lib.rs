//! Benchmark support crate for the disjoint-set-union container.
//!
//! Provides seeded union workloads and parameter types used by the Criterion
//! benchmarks that compare find and union strategies.

pub mod error;
pub mod params;
pub mod workload;
