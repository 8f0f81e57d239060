//! Immutable undirected weighted graph.
//!
//! A [`Graph`] owns its vertex sequence, its edge sequence, and an adjacency
//! index built once at construction. Vertices are addressed internally by
//! their position in the vertex sequence and edges by their position in the
//! edge sequence, so parallel edges stay distinct and a self-loop appears
//! once in its vertex's incidence list.
//!
//! Construction validates every edge up front: weights must be finite and
//! non-negative, and both endpoints must be listed vertices. Queries never
//! mutate the graph, so a single instance can serve concurrent read-only
//! callers.

mod edge;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use tracing::{debug, instrument};

use crate::error::{GraphError, describe};

pub use self::edge::{Edge, WeightedEdge};

/// An undirected, weighted graph over vertices `V` and edges `E`.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, WeightedEdge};
///
/// let graph = Graph::new(
///     vec!["a", "b", "c"],
///     vec![WeightedEdge::new("a", "b", 1.0), WeightedEdge::new("b", "c", 2.0)],
/// )?;
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.num_edges(), 2);
/// assert_eq!(graph.incident_edges(&"b").map(Iterator::count), Some(2));
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V, E> {
    vertices: Vec<V>,
    edges: Vec<E>,
    index: HashMap<V, usize>,
    endpoints: Vec<(usize, usize)>,
    adjacency: Vec<Vec<usize>>,
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Edge<V>,
{
    /// Builds a graph from ordered vertex and edge sequences.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] when a vertex is listed twice,
    /// [`GraphError::NonFiniteWeight`] or [`GraphError::NegativeWeight`] for
    /// invalid weights, [`GraphError::UnknownVertex`] when an edge
    /// references a vertex missing from `vertices`, and
    /// [`GraphError::WeightOverflow`] when the weights sum past `f64::MAX`.
    #[instrument(
        name = "graph.new",
        err,
        skip_all,
        fields(vertices = vertices.len(), edges = edges.len()),
    )]
    pub fn new(vertices: Vec<V>, edges: Vec<E>) -> Result<Self, GraphError> {
        let index = index_vertices(&vertices)?;
        let mut adjacency = vec![Vec::new(); vertices.len()];
        let mut endpoints = Vec::with_capacity(edges.len());
        let mut total_weight = 0.0_f64;

        for (position, edge) in edges.iter().enumerate() {
            validate_weight(position, edge.weight())?;
            total_weight += edge.weight();
            let first = lookup(&index, edge.vertex1())?;
            let second = lookup(&index, edge.vertex2())?;

            adjacency[first].push(position);
            if second != first {
                adjacency[second].push(position);
            }
            endpoints.push((first, second));
        }
        // Every path and forest total is bounded by this sum.
        if !total_weight.is_finite() {
            return Err(GraphError::WeightOverflow);
        }

        debug!("graph constructed");
        Ok(Self {
            vertices,
            edges,
            index,
            endpoints,
            adjacency,
        })
    }

    /// Builds a graph from unordered vertex and edge sets.
    ///
    /// Iteration order of the sets fixes the internal order, so tie-breaking
    /// between equal-weight edges follows the sets' hashing.
    ///
    /// # Errors
    /// Returns the same errors as [`Graph::new`].
    pub fn from_sets<S, T>(vertices: HashSet<V, S>, edges: HashSet<E, T>) -> Result<Self, GraphError>
    where
        E: Eq + Hash,
        S: BuildHasher,
        T: BuildHasher,
    {
        Self::new(vertices.into_iter().collect(), edges.into_iter().collect())
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the vertices in construction order.
    #[rustfmt::skip]
    #[must_use]
    pub fn vertices(&self) -> &[V] { &self.vertices }

    /// Returns the edges in construction order.
    #[rustfmt::skip]
    #[must_use]
    pub fn edges(&self) -> &[E] { &self.edges }

    /// Returns `true` when `vertex` belongs to the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns the edges incident to `vertex`, or `None` for unknown vertices.
    pub fn incident_edges<'g>(
        &'g self,
        vertex: &V,
    ) -> Option<impl Iterator<Item = &'g E> + use<'g, V, E>> {
        let position = *self.index.get(vertex)?;
        Some(
            self.adjacency[position]
                .iter()
                .map(move |&edge| &self.edges[edge]),
        )
    }

    pub(crate) fn vertex_position(&self, vertex: &V) -> Result<usize, GraphError> {
        lookup(&self.index, vertex)
    }

    pub(crate) fn endpoints_of(&self, edge: usize) -> (usize, usize) {
        self.endpoints[edge]
    }

    pub(crate) fn incident_positions(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }
}

fn index_vertices<V>(vertices: &[V]) -> Result<HashMap<V, usize>, GraphError>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    let mut index = HashMap::with_capacity(vertices.len());
    for (position, vertex) in vertices.iter().enumerate() {
        if index.insert(vertex.clone(), position).is_some() {
            return Err(GraphError::DuplicateVertex {
                vertex: describe(vertex),
            });
        }
    }
    Ok(index)
}

fn validate_weight(edge: usize, weight: f64) -> Result<(), GraphError> {
    if !weight.is_finite() {
        return Err(GraphError::NonFiniteWeight { edge });
    }
    if weight < 0.0 {
        return Err(GraphError::NegativeWeight { edge, weight });
    }
    Ok(())
}

fn lookup<V>(index: &HashMap<V, usize>, vertex: &V) -> Result<usize, GraphError>
where
    V: Eq + Hash + fmt::Debug,
{
    index
        .get(vertex)
        .copied()
        .ok_or_else(|| GraphError::UnknownVertex {
            vertex: describe(vertex),
        })
}
