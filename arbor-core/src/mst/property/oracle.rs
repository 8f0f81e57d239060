//! Reference implementations used as oracles by the MST properties.
//!
//! [`sequential_kruskal`] is a plain array-backed Kruskal that shares no
//! code with the graph module. [`brute_force_minimum_weight`] enumerates
//! every spanning tree of a small connected graph.

use crate::graph::{Edge, WeightedEdge};

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct SequentialMstResult {
    /// Total weight of the forest.
    pub total_weight: f64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components after construction.
    pub component_count: usize,
}

/// Computes a minimum spanning forest over vertices `0..node_count`.
///
/// Self-loops, out-of-range endpoints, and non-finite weights are skipped.
pub(super) fn sequential_kruskal(
    node_count: usize,
    edges: &[WeightedEdge<usize>],
) -> SequentialMstResult {
    let mut candidates: Vec<(f64, usize, usize)> = edges
        .iter()
        .filter(|edge| !is_invalid_edge(edge, node_count))
        .map(|edge| (edge.weight(), *edge.vertex1(), *edge.vertex2()))
        .collect();
    candidates.sort_by(|left, right| left.0.total_cmp(&right.0));

    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut rank = vec![0_usize; node_count];
    let mut components = node_count;
    let mut total_weight = 0.0;
    let mut edge_count = 0;

    for (weight, source, target) in candidates {
        let ra = find_root(&mut parent, source);
        let rb = find_root(&mut parent, target);
        if ra == rb {
            continue;
        }
        union_by_rank(&mut parent, &mut rank, ra, rb);
        total_weight += weight;
        edge_count += 1;
        components -= 1;
    }

    SequentialMstResult {
        total_weight,
        edge_count,
        component_count: components,
    }
}

/// Returns the minimum spanning-tree weight of a connected graph by
/// enumerating every `(node_count - 1)`-edge subset.
///
/// Returns `None` when the graph is disconnected. Intended for graphs with
/// at most a handful of vertices.
pub(super) fn brute_force_minimum_weight(
    node_count: usize,
    edges: &[WeightedEdge<usize>],
) -> Option<f64> {
    if node_count <= 1 {
        return Some(0.0);
    }
    let usable: Vec<&WeightedEdge<usize>> = edges
        .iter()
        .filter(|edge| !is_invalid_edge(edge, node_count))
        .collect();
    let mut chosen = Vec::with_capacity(node_count - 1);
    let mut best = None;
    enumerate(&usable, 0, node_count, &mut chosen, &mut best);
    best
}

fn enumerate<'a>(
    usable: &[&'a WeightedEdge<usize>],
    start: usize,
    node_count: usize,
    chosen: &mut Vec<&'a WeightedEdge<usize>>,
    best: &mut Option<f64>,
) {
    if chosen.len() == node_count - 1 {
        if spans(node_count, chosen) {
            let weight: f64 = chosen.iter().map(|edge| edge.weight()).sum();
            if best.is_none_or(|current| weight < current) {
                *best = Some(weight);
            }
        }
        return;
    }
    let remaining = node_count - 1 - chosen.len();
    for position in start..usable.len() {
        if usable.len() - position < remaining {
            break;
        }
        chosen.push(usable[position]);
        enumerate(usable, position + 1, node_count, chosen, best);
        chosen.pop();
    }
}

/// `n - 1` edges span `n` vertices exactly when they contain no cycle.
fn spans(node_count: usize, edges: &[&WeightedEdge<usize>]) -> bool {
    let mut parent: Vec<usize> = (0..node_count).collect();
    edges.iter().all(|edge| {
        let ra = find_root(&mut parent, *edge.vertex1());
        let rb = find_root(&mut parent, *edge.vertex2());
        parent[rb] = ra;
        ra != rb
    })
}

fn is_invalid_edge(edge: &WeightedEdge<usize>, node_count: usize) -> bool {
    let (source, target) = (*edge.vertex1(), *edge.vertex2());
    source == target || source >= node_count || target >= node_count || !edge.weight().is_finite()
}

/// Higher rank wins; on a tie the smaller index becomes root.
fn union_by_rank(parent: &mut [usize], rank: &mut [usize], a: usize, b: usize) {
    let (root, child) = match rank[a].cmp(&rank[b]) {
        std::cmp::Ordering::Greater => (a, b),
        std::cmp::Ordering::Less => (b, a),
        std::cmp::Ordering::Equal => {
            let (root, child) = if a < b { (a, b) } else { (b, a) };
            rank[root] += 1;
            (root, child)
        }
    };
    parent[child] = root;
}
