//! Generic disjoint-set-union container.
//!
//! [`Dsu`] keeps a payload per element and a parent-pointer forest that
//! partitions elements into disjoint groups. Two independent heuristics,
//! path compression ([`FindStrategy`]) and union by size ([`UnionStrategy`]),
//! can be switched on and off at any time without changing which elements are
//! connected.
//!
//! # Instrumentation
//!
//! Strategy changes emit `debug` events and every merge emits a `trace` event
//! through [`tracing`]. With the `metrics` feature enabled the container also
//! increments:
//!
//! - `dsu_unite_merges_total` (counter)
//! - `dsu_path_compressions_total` (counter, parent links rewritten)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod dsu;
mod error;
mod strategy;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::DsuBuilder,
    dsu::{Dsu, DsuInvariantViolation, DsuInvariantViolationCode},
    error::{DsuError, DsuErrorCode, Result},
    strategy::{FindStrategy, Heuristics, UnionStrategy},
};
