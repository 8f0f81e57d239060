//! Strategy builders for MST property-based tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies. Each generator returns edges over the
//! vertices `0..node_count` in construction order.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::graph::WeightedEdge;

use super::types::{MstFixture, WeightDistribution};

/// Minimum node count for most generated graphs.
const MIN_NODES: usize = 8;
/// Maximum node count for most generated graphs.
const MAX_NODES: usize = 48;
/// Maximum node count for dense graphs.
const DENSE_MAX_NODES: usize = 24;
/// Maximum node count for graphs checked by brute force.
pub(super) const BRUTE_FORCE_MAX_NODES: usize = 6;

/// Generates MST fixtures covering all five weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates small graphs (at most [`BRUTE_FORCE_MAX_NODES`] vertices)
/// whose spanning trees can be enumerated exhaustively.
pub(super) fn small_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (2..=BRUTE_FORCE_MAX_NODES, any::<u64>(), any::<bool>()).prop_map(
        |(node_count, seed, identical)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut edges = Vec::new();
            // A random spanning path guarantees connectivity.
            let mut order: Vec<usize> = (0..node_count).collect();
            order.shuffle(&mut rng);
            for pair in order.windows(2) {
                edges.push(WeightedEdge::new(pair[0], pair[1], small_weight(&mut rng, identical)));
            }
            for i in 0..node_count {
                for j in (i + 1)..node_count {
                    if rng.gen_bool(0.5) {
                        edges.push(WeightedEdge::new(i, j, small_weight(&mut rng, identical)));
                    }
                }
            }
            MstFixture {
                node_count,
                edges,
                distribution: if identical {
                    WeightDistribution::ManyIdentical
                } else {
                    WeightDistribution::Unique
                },
            }
        },
    )
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

fn small_weight(rng: &mut SmallRng, identical: bool) -> f64 {
    if identical {
        f64::from(rng.gen_range(1_u8..=3))
    } else {
        rng.gen_range(0.0..10.0)
    }
}

// ── Probabilistic graph helper ──────────────────────────────────────────

/// Parameters that vary between the probabilistic generators.
struct ProbabilisticGraphConfig {
    /// Upper bound for the random node count (inclusive).
    max_nodes: usize,
    /// Inclusive range from which the per-pair edge probability is sampled.
    edge_prob_range: (f64, f64),
    /// Weight distribution label for the resulting fixture.
    distribution: WeightDistribution,
}

/// Adds each unordered pair with a sampled probability, drawing weights
/// from `weight_generator`.
fn generate_probabilistic_graph(
    rng: &mut SmallRng,
    config: ProbabilisticGraphConfig,
    mut weight_generator: impl FnMut(&mut SmallRng) -> f64,
) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=config.max_nodes);
    let edge_probability: f64 = rng.gen_range(config.edge_prob_range.0..=config.edge_prob_range.1);
    let mut edges = Vec::new();

    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_bool(edge_probability) {
                let weight = weight_generator(rng);
                edges.push(oriented(i, j, weight, rng));
            }
        }
    }

    if edges.is_empty() {
        let weight = weight_generator(rng);
        edges.push(WeightedEdge::new(0, 1, weight));
    }

    MstFixture {
        node_count,
        edges,
        distribution: config.distribution,
    }
}

fn generate_unique_weights(rng: &mut SmallRng) -> MstFixture {
    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_nodes: MAX_NODES,
            edge_prob_range: (0.2, 0.6),
            distribution: WeightDistribution::Unique,
        },
        |r| r.gen_range(0.1..100.0),
    )
}

/// Large groups of edges share a weight drawn from a pool of one to three
/// integers, the main stress case for deterministic tie-breaking.
fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let weight_pool_size = rng.gen_range(1..=3);
    let weight_pool: Vec<f64> = (0..weight_pool_size)
        .map(|_| f64::from(rng.gen_range(1_u8..=10)))
        .collect();

    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_nodes: MAX_NODES,
            edge_prob_range: (0.3, 0.7),
            distribution: WeightDistribution::ManyIdentical,
        },
        move |r| weight_pool[r.gen_range(0..weight_pool.len())],
    )
}

/// Random spanning tree (guaranteeing connectivity) plus a few extra edges,
/// including the occasional self-loop and parallel edge.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut edges = Vec::new();

    let mut perm: Vec<usize> = (0..node_count).collect();
    perm.shuffle(rng);
    for pair in perm.windows(2) {
        let weight = rng.gen_range(0.1..100.0);
        edges.push(WeightedEdge::new(pair[0], pair[1], weight));
    }

    let extra_count = rng.gen_range(node_count / 2..=node_count);
    for _ in 0..extra_count {
        let i = rng.gen_range(0..node_count);
        let j = rng.gen_range(0..node_count);
        let weight = rng.gen_range(0.1..100.0);
        edges.push(WeightedEdge::new(i, j, weight));
    }

    MstFixture {
        node_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

fn generate_dense(rng: &mut SmallRng) -> MstFixture {
    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_nodes: DENSE_MAX_NODES,
            edge_prob_range: (0.7, 0.95),
            distribution: WeightDistribution::Dense,
        },
        |r| r.gen_range(0.1..100.0),
    )
}

/// Two to five components with random internal structure and no
/// cross-component edges.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let component_sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let node_count: usize = component_sizes.iter().sum();
    let mut edges = Vec::new();
    let mut node_offset = 0;

    for &size in &component_sizes {
        let edge_probability: f64 = rng.gen_range(0.3..=0.8);
        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen_bool(edge_probability) {
                    let weight = rng.gen_range(0.1..100.0);
                    edges.push(oriented(node_offset + i, node_offset + j, weight, rng));
                }
            }
        }
        node_offset += size;
    }

    MstFixture {
        node_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

/// Randomly orients an undirected pair so both endpoint slots are exercised.
fn oriented(i: usize, j: usize, weight: f64, rng: &mut SmallRng) -> WeightedEdge<usize> {
    if rng.gen_bool(0.5) {
        WeightedEdge::new(i, j, weight)
    } else {
        WeightedEdge::new(j, i, weight)
    }
}

// Biased towards `ManyIdentical`, the most important stress case.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
