//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: vertex `i > 0` is first joined to a
//! random earlier vertex, then extra random edges are sprinkled on top until
//! the requested average degree is reached.

use arbor_core::{Graph, WeightedEdge};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Largest weight drawn for a synthetic edge.
const MAX_WEIGHT: f64 = 100.0;

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested degree was zero.
    #[error("degree must be greater than zero")]
    ZeroDegree,
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Average number of edges per vertex.
    pub degree: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Builds a connected random graph over the vertices `0..vertex_count`.
///
/// # Errors
///
/// Returns [`SyntheticError`] wrapped in [`BenchSetupError`] when the
/// configuration is empty.
///
/// # Examples
///
/// ```
/// use arbor_benches::source::{SyntheticConfig, generate};
///
/// let config = SyntheticConfig { vertex_count: 10, degree: 3, seed: 42 };
/// let graph = generate(&config).expect("valid config");
/// assert_eq!(graph.num_vertices(), 10);
/// assert_eq!(graph.num_edges(), 30);
/// ```
pub fn generate(
    config: &SyntheticConfig,
) -> Result<Graph<usize, WeightedEdge<usize>>, BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices.into());
    }
    if config.degree == 0 {
        return Err(SyntheticError::ZeroDegree.into());
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let total = config.vertex_count.saturating_mul(config.degree);
    let mut edges = Vec::with_capacity(total);
    for vertex in 1..config.vertex_count {
        let parent = rng.gen_range(0..vertex);
        edges.push(WeightedEdge::new(
            parent,
            vertex,
            rng.gen_range(0.0..MAX_WEIGHT),
        ));
    }
    while edges.len() < total {
        let a = rng.gen_range(0..config.vertex_count);
        let b = rng.gen_range(0..config.vertex_count);
        edges.push(WeightedEdge::new(a, b, rng.gen_range(0.0..MAX_WEIGHT)));
    }

    Ok(Graph::new((0..config.vertex_count).collect(), edges)?)
}
