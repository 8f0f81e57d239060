//! Type definitions for MST property-based tests.

use crate::graph::{Graph, WeightedEdge};

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation, producing
/// inputs that stress different aspects of the spanning-tree selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a weight drawn from a continuous range.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Random spanning tree plus roughly `0.5n` to `n` extra edges.
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
}

/// Fixture for MST property tests.
///
/// Captures the node count, generated edges, and the weight distribution
/// used during generation, providing full context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of nodes in the graph; vertices are `0..node_count`.
    pub node_count: usize,
    /// Generated edges in construction order.
    pub edges: Vec<WeightedEdge<usize>>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Builds the graph described by the fixture.
    pub(super) fn graph(&self) -> Result<Graph<usize, WeightedEdge<usize>>, crate::GraphError> {
        Graph::new((0..self.node_count).collect(), self.edges.clone())
    }

    /// Short description used in failure messages.
    pub(super) fn context(&self) -> String {
        format!(
            "distribution={:?}, nodes={}, edges={}",
            self.distribution,
            self.node_count,
            self.edges.len(),
        )
    }
}

/// Configuration for the determinism property.
///
/// Controls how many times the spanning forest is recomputed on the same
/// input.
pub(super) struct DeterminismConfig {
    /// Number of times to repeat the computation per input.
    pub repetitions: usize,
}

impl DeterminismConfig {
    /// Loads the configuration from the environment, falling back to a
    /// default of 5 repetitions.
    ///
    /// The environment variable `ARBOR_MST_PBT_REPETITIONS` controls the
    /// repetition count.
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("ARBOR_MST_PBT_REPETITIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);
        Self { repetitions }
    }
}
