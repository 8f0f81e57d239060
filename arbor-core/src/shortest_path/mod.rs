//! Single-source shortest paths with Dijkstra's algorithm.
//!
//! Each query owns an arena of search nodes indexed by vertex position and a
//! binary min-heap of queue entries ordered by `(distance, sequence)`. A
//! vertex is finalized the first time it leaves the heap; stale entries for
//! finalized vertices are skipped. The search stops as soon as the
//! destination is finalized or the smallest queued distance is infinite.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;
use std::hash::Hash;

use tracing::{Span, debug, field, instrument};

use crate::error::{GraphError, describe};
use crate::graph::{Edge, Graph};

/// Edges of a shortest path, ordered from the start vertex to the end vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPath<'g, V, E> {
    start: &'g V,
    edges: Vec<&'g E>,
    total_weight: f64,
}

impl<'g, V, E> ShortestPath<'g, V, E>
where
    V: PartialEq,
    E: Edge<V>,
{
    /// Returns the path edges; the first leaves the start vertex and the
    /// last enters the end vertex.
    #[rustfmt::skip]
    #[must_use]
    pub fn edges(&self) -> &[&'g E] { &self.edges }

    /// Consumes the path and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<&'g E> {
        self.edges
    }

    /// Returns the number of edges on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` for the trivial path from a vertex to itself.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the summed weight of the path edges.
    #[rustfmt::skip]
    #[must_use]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the visited vertices from start to end, inclusive.
    ///
    /// The trivial path yields just the start vertex.
    #[must_use]
    pub fn vertices(&self) -> Vec<&'g V> {
        let mut current = self.start;
        let mut visited = Vec::with_capacity(self.edges.len() + 1);
        visited.push(current);
        for &edge in &self.edges {
            let Some(next) = edge.other_vertex(current) else {
                break;
            };
            current = next;
            visited.push(current);
        }
        visited
    }
}

/// Per-vertex search state, discarded at the end of each query.
#[derive(Clone, Copy, Debug)]
struct SearchNode {
    distance: f64,
    predecessor: Option<Step>,
    finalized: bool,
}

impl SearchNode {
    const UNREACHED: Self = Self {
        distance: f64::INFINITY,
        predecessor: None,
        finalized: false,
    };
}

/// How a vertex was reached: the edge taken and the vertex it left from.
#[derive(Clone, Copy, Debug)]
struct Step {
    edge: usize,
    from: usize,
}

/// Heap entry; `sequence` breaks distance ties in insertion order.
#[derive(Clone, Copy, Debug)]
struct QueueEntry {
    distance: f64,
    sequence: u64,
    vertex: usize,
}

impl QueueEntry {
    fn compare(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl Eq for QueueEntry {}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap over [`QueueEntry`] stamping each push with a fresh sequence.
#[derive(Debug)]
struct Frontier {
    heap: BinaryHeap<Reverse<QueueEntry>>,
    next_sequence: u64,
}

impl Frontier {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    fn push(&mut self, vertex: usize, distance: f64) {
        self.heap.push(Reverse(QueueEntry {
            distance,
            sequence: self.next_sequence,
            vertex,
        }));
        self.next_sequence += 1;
    }

    fn pop(&mut self) -> Option<QueueEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Edge<V>,
{
    /// Finds a minimum-weight path from `start` to `end`.
    ///
    /// Returns an empty path when `start == end`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when either vertex is not in the
    /// graph and [`GraphError::NoPathExists`] when `end` is unreachable from
    /// `start`.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Graph, WeightedEdge};
    ///
    /// let graph = Graph::new(
    ///     vec!['a', 'b', 'c'],
    ///     vec![
    ///         WeightedEdge::new('a', 'b', 1.0),
    ///         WeightedEdge::new('b', 'c', 2.0),
    ///         WeightedEdge::new('a', 'c', 5.0),
    ///     ],
    /// )?;
    /// let path = graph.find_shortest_path_between(&'a', &'c')?;
    /// assert_eq!(path.total_weight(), 3.0);
    /// assert_eq!(path.vertices(), vec![&'a', &'b', &'c']);
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    #[instrument(
        name = "graph.shortest_path",
        err,
        skip_all,
        fields(
            vertices = self.num_vertices(),
            edges = self.num_edges(),
            settled = field::Empty,
            hops = field::Empty,
        ),
    )]
    pub fn find_shortest_path_between(
        &self,
        start: &V,
        end: &V,
    ) -> Result<ShortestPath<'_, V, E>, GraphError> {
        let source = self.vertex_position(start)?;
        let target = self.vertex_position(end)?;
        let start_vertex = &self.vertices()[source];
        if source == target {
            return Ok(ShortestPath {
                start: start_vertex,
                edges: Vec::new(),
                total_weight: 0.0,
            });
        }

        let (nodes, settled) = self.dijkstra(source, target);
        Span::current().record("settled", settled);

        let total_weight = nodes[target].distance;
        if !total_weight.is_finite() {
            debug!("destination unreachable");
            return Err(GraphError::NoPathExists {
                start: describe(start),
                end: describe(end),
            });
        }

        let mut edges = Vec::new();
        let mut cursor = target;
        while let Some(step) = nodes[cursor].predecessor {
            edges.push(&self.edges()[step.edge]);
            cursor = step.from;
        }
        edges.reverse();

        Span::current().record("hops", edges.len());
        debug!(total_weight, "shortest path found");
        Ok(ShortestPath {
            start: start_vertex,
            edges,
            total_weight,
        })
    }

    /// Runs the search and returns the node arena with the number of
    /// finalized vertices.
    fn dijkstra(&self, source: usize, target: usize) -> (Vec<SearchNode>, usize) {
        let vertex_count = self.num_vertices();
        let mut nodes = vec![SearchNode::UNREACHED; vertex_count];
        nodes[source].distance = 0.0;

        let mut frontier = Frontier::with_capacity(vertex_count);
        for (vertex, node) in nodes.iter().enumerate() {
            frontier.push(vertex, node.distance);
        }

        let mut settled = 0;
        while let Some(entry) = frontier.pop() {
            let current = entry.vertex;
            if nodes[current].finalized {
                continue;
            }
            if entry.distance.is_infinite() {
                break;
            }
            nodes[current].finalized = true;
            settled += 1;
            if current == target {
                break;
            }

            for &edge in self.incident_positions(current) {
                let (first, second) = self.endpoints_of(edge);
                let neighbour = if first == current { second } else { first };
                if nodes[neighbour].finalized {
                    continue;
                }
                let candidate = entry.distance + self.edges()[edge].weight();
                if candidate < nodes[neighbour].distance {
                    nodes[neighbour].distance = candidate;
                    nodes[neighbour].predecessor = Some(Step {
                        edge,
                        from: current,
                    });
                    frontier.push(neighbour, candidate);
                }
            }
        }

        (nodes, settled)
    }
}

#[cfg(test)]
mod property;
