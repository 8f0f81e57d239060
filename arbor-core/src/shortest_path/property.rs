//! Property tests comparing Dijkstra against a Floyd–Warshall oracle.

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::GraphErrorCode;
use crate::graph::{Edge, Graph, WeightedEdge};
use crate::test_utils::suite_proptest_config;

#[derive(Clone, Debug)]
struct PathFixture {
    node_count: usize,
    edges: Vec<WeightedEdge<usize>>,
    start: usize,
    end: usize,
}

fn path_fixture_strategy() -> impl Strategy<Value = PathFixture> {
    (1_usize..=12)
        .prop_flat_map(|node_count| {
            let edge = (0..node_count, 0..node_count, 0_u8..=20)
                .prop_map(|(a, b, w)| WeightedEdge::new(a, b, f64::from(w)));
            (
                Just(node_count),
                prop::collection::vec(edge, 0..=node_count * 3),
                0..node_count,
                0..node_count,
            )
        })
        .prop_map(|(node_count, edges, start, end)| PathFixture {
            node_count,
            edges,
            start,
            end,
        })
}

/// All-pairs distances; `f64::INFINITY` marks unreachable pairs.
fn floyd_warshall(node_count: usize, edges: &[WeightedEdge<usize>]) -> Vec<Vec<f64>> {
    let mut dist = vec![vec![f64::INFINITY; node_count]; node_count];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for edge in edges {
        let (a, b) = (*edge.vertex1(), *edge.vertex2());
        if edge.weight() < dist[a][b] {
            dist[a][b] = edge.weight();
            dist[b][a] = edge.weight();
        }
    }
    for k in 0..node_count {
        for i in 0..node_count {
            for j in 0..node_count {
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }
    dist
}

fn run_oracle_property(fixture: &PathFixture) -> TestCaseResult {
    let graph = Graph::new((0..fixture.node_count).collect(), fixture.edges.clone())
        .map_err(|e| TestCaseError::fail(format!("graph rejected: {e}")))?;
    let expected = floyd_warshall(fixture.node_count, &fixture.edges)[fixture.start][fixture.end];

    match graph.find_shortest_path_between(&fixture.start, &fixture.end) {
        Ok(path) => {
            prop_assert!(expected.is_finite(), "found a path the oracle cannot reach");
            prop_assert_eq!(path.total_weight(), expected);
            let summed: f64 = path.edges().iter().map(|edge| edge.weight()).sum();
            prop_assert_eq!(summed, expected);

            let vertices = path.vertices();
            prop_assert_eq!(vertices.len(), path.len() + 1);
            prop_assert_eq!(*vertices[0], fixture.start);
            prop_assert_eq!(**vertices.last().expect("start is always present"), fixture.end);
            for (edge, pair) in path.edges().iter().zip(vertices.windows(2)) {
                prop_assert_eq!(edge.other_vertex(pair[0]), Some(pair[1]));
            }
        }
        Err(err) => {
            prop_assert_eq!(err.code(), GraphErrorCode::NoPathExists);
            prop_assert!(expected.is_infinite(), "oracle reaches end at {}", expected);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn dijkstra_matches_floyd_warshall(fixture in path_fixture_strategy()) {
        run_oracle_property(&fixture)?;
    }
}

#[test]
fn oracle_handles_unreachable_pairs() {
    let dist = floyd_warshall(3, &[WeightedEdge::new(0, 1, 2.0)]);
    assert_eq!(dist[0][1], 2.0);
    assert_eq!(dist[1][0], 2.0);
    assert!(dist[0][2].is_infinite());
}
