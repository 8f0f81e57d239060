//! Support library for the arbor CLI binary.
//!
//! Exposes the command pipeline, logging setup, and the maze model so
//! doctests and unit tests can exercise them without spawning a process.

pub mod cli;
pub mod logging;
pub mod maze;
