//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for spanning-tree and shortest-path queries.

pub mod error;
pub mod params;
pub mod source;
