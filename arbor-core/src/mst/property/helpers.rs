//! Shared helper functions for MST property-based tests.

use crate::graph::{Edge, WeightedEdge};

/// Path-halving find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Sums edge weights.
pub(super) fn total_weight(edges: &[&WeightedEdge<usize>]) -> f64 {
    edges.iter().map(|edge| edge.weight()).sum()
}

/// Compares two accumulated weights with a tolerance scaled to their size.
pub(super) fn weights_match(left: f64, right: f64) -> bool {
    (left - right).abs() <= 1e-9 * left.abs().max(right.abs()).max(1.0)
}

/// Counts connected components of `edges` over `node_count` vertices.
pub(super) fn count_components(node_count: usize, edges: &[WeightedEdge<usize>]) -> usize {
    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut components = node_count;
    for edge in edges {
        let left = find_root(&mut parent, *edge.vertex1());
        let right = find_root(&mut parent, *edge.vertex2());
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}
