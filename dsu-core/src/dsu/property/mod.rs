//! Property-based tests for the disjoint-set-union container.
//!
//! Generates union sequences over several topologies, replays them under
//! every heuristic combination, and checks the resulting partition against a
//! naive relabelling oracle together with the algebraic laws of connectivity.

mod equivalence;
mod laws;
mod oracle;
mod strategies;
mod types;
