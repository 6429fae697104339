//! Benchmark setup error type.
//!
//! Lets workload preparation propagate failures with `?` instead of
//! panicking inside Criterion closures.

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// Replaying a workload against the container failed.
    #[error("workload replay failed: {0}")]
    Dsu(#[from] dsu_core::DsuError),
}
