//! Property-based tests for Kruskal spanning-forest construction.
//!
//! Verifies the forest against a sequential oracle and, for small graphs,
//! against brute-force enumeration of every spanning tree. Also validates
//! structural invariants (acyclicity, edge count, connectivity) and checks
//! that repeated runs over the same input select identical edges.

mod helpers;
mod oracle;
mod strategies;
mod types;
