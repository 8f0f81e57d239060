//! Minimum spanning tree (MST) construction with Kruskal's algorithm.
//!
//! Edges are visited in non-decreasing weight order using a stable sort, so
//! equal-weight edges keep their construction order. Each edge joining two
//! different components of a fresh [`DisjointSet`] over the vertex
//! positions is accepted. Together with the disjoint-set's deterministic
//! union tie-break this makes the selected tree reproducible for identical
//! input.

use std::fmt;
use std::hash::Hash;

use tracing::{Span, debug, field, instrument};

use crate::disjoint_set::DisjointSet;
use crate::error::GraphError;
use crate::graph::{Edge, Graph};

/// Edges selected by Kruskal's algorithm.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest<'g, E> {
    edges: Vec<&'g E>,
    total_weight: f64,
    component_count: usize,
}

impl<'g, E> MinimumSpanningForest<'g, E> {
    /// Returns the accepted edges in acceptance order.
    #[rustfmt::skip]
    #[must_use]
    pub fn edges(&self) -> &[&'g E] { &self.edges }

    /// Consumes the forest and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<&'g E> {
        self.edges
    }

    /// Returns the number of accepted edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no edge was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the summed weight of the accepted edges.
    ///
    /// Weights are the ones used for ordering, so a forest built with
    /// [`Graph::minimum_spanning_forest_by`] reports the override weights.
    #[rustfmt::skip]
    #[must_use]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of connected components spanned by the forest.
    #[rustfmt::skip]
    #[must_use]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count <= 1
    }
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Edge<V>,
{
    /// Computes a minimum spanning tree of a connected graph.
    ///
    /// An empty graph yields an empty tree.
    ///
    /// # Errors
    /// Returns [`GraphError::Disconnected`] when the graph has more than one
    /// connected component.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Graph, WeightedEdge};
    ///
    /// let graph = Graph::new(
    ///     vec![1, 2, 3],
    ///     vec![
    ///         WeightedEdge::new(1, 2, 1.0),
    ///         WeightedEdge::new(2, 3, 2.0),
    ///         WeightedEdge::new(1, 3, 5.0),
    ///     ],
    /// )?;
    /// let tree = graph.find_minimum_spanning_tree()?;
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.total_weight(), 3.0);
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    pub fn find_minimum_spanning_tree(&self) -> Result<MinimumSpanningForest<'_, E>, GraphError> {
        let forest = self.minimum_spanning_forest()?;
        if !forest.is_tree() {
            return Err(GraphError::Disconnected {
                components: forest.component_count(),
            });
        }
        Ok(forest)
    }

    /// Computes a minimum spanning forest, one tree per connected component.
    ///
    /// # Errors
    /// Propagates [`GraphError::DisjointSet`] should the backing disjoint-set
    /// reject an operation, which indicates a broken internal invariant.
    pub fn minimum_spanning_forest(&self) -> Result<MinimumSpanningForest<'_, E>, GraphError> {
        let edges = self.edges();
        let mut order: Vec<usize> = (0..edges.len()).collect();
        order.sort_by(|&left, &right| edges[left].cmp_by_weight(&edges[right]));
        self.kruskal(&order, |position| edges[position].weight())
    }

    /// Computes a minimum spanning forest under caller-supplied weights.
    ///
    /// `weight` is evaluated once per edge and replaces the stored weight for
    /// this query only; the graph and its edges are left untouched. This is
    /// how randomised generators (for example maze carvers) reuse a graph.
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteWeight`] when `weight` yields NaN or an
    /// infinite value for any edge, and [`GraphError::WeightOverflow`] when
    /// the magnitudes of the override weights sum past `f64::MAX`.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, Graph, WeightedEdge};
    ///
    /// let graph = Graph::new(
    ///     vec!['a', 'b', 'c'],
    ///     vec![
    ///         WeightedEdge::new('a', 'b', 1.0),
    ///         WeightedEdge::new('b', 'c', 1.0),
    ///         WeightedEdge::new('a', 'c', 1.0),
    ///     ],
    /// )?;
    /// // Prefer edges touching 'c'.
    /// let forest = graph.minimum_spanning_forest_by(|edge| {
    ///     if edge.other_vertex(&'c').is_some() { 0.0 } else { 1.0 }
    /// })?;
    /// assert_eq!(forest.total_weight(), 0.0);
    /// assert_eq!(graph.edges()[0].weight(), 1.0);
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    pub fn minimum_spanning_forest_by<F>(
        &self,
        weight: F,
    ) -> Result<MinimumSpanningForest<'_, E>, GraphError>
    where
        F: Fn(&E) -> f64,
    {
        let weights = self
            .edges()
            .iter()
            .enumerate()
            .map(|(position, edge)| {
                let value = weight(edge);
                if value.is_finite() {
                    Ok(value)
                } else {
                    Err(GraphError::NonFiniteWeight { edge: position })
                }
            })
            .collect::<Result<Vec<f64>, GraphError>>()?;
        if !weights.iter().map(|value| value.abs()).sum::<f64>().is_finite() {
            return Err(GraphError::WeightOverflow);
        }

        let mut order: Vec<usize> = (0..weights.len()).collect();
        order.sort_by(|&left, &right| weights[left].total_cmp(&weights[right]));
        self.kruskal(&order, |position| weights[position])
    }

    #[instrument(
        name = "graph.mst",
        err,
        skip_all,
        fields(
            vertices = self.num_vertices(),
            edges = self.num_edges(),
            accepted = field::Empty,
            components = field::Empty,
        ),
    )]
    fn kruskal(
        &self,
        order: &[usize],
        weight_of: impl Fn(usize) -> f64,
    ) -> Result<MinimumSpanningForest<'_, E>, GraphError> {
        let vertex_count = self.num_vertices();
        let mut components = DisjointSet::with_capacity(vertex_count);
        for vertex in 0..vertex_count {
            components.make_set(vertex)?;
        }

        let target = vertex_count.saturating_sub(1);
        let mut accepted = Vec::with_capacity(target);
        let mut total_weight = 0.0;
        for &position in order {
            if accepted.len() == target {
                break;
            }
            let (first, second) = self.endpoints_of(position);
            if components.try_union(&first, &second)?.is_some() {
                accepted.push(&self.edges()[position]);
                total_weight += weight_of(position);
            }
        }

        let span = Span::current();
        span.record("accepted", accepted.len());
        span.record("components", components.component_count());
        debug!(total_weight, "spanning forest computed");

        Ok(MinimumSpanningForest {
            edges: accepted,
            total_weight,
            component_count: components.component_count(),
        })
    }
}

#[cfg(test)]
mod property;
