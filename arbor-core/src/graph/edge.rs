//! Edge capability shared by every graph algorithm.

use std::cmp::Ordering;

/// An undirected, weighted edge between two vertices of type `V`.
///
/// Implementors supply the endpoints and a weight; the provided methods
/// derive "the other endpoint" lookup and the total order by weight used
/// when sorting edges.
pub trait Edge<V> {
    /// Returns the first endpoint.
    fn vertex1(&self) -> &V;

    /// Returns the second endpoint.
    fn vertex2(&self) -> &V;

    /// Returns the weight of the edge.
    fn weight(&self) -> f64;

    /// Returns the endpoint opposite `vertex`.
    ///
    /// Returns `None` when `vertex` is not an endpoint. A self-loop returns
    /// its single vertex.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, WeightedEdge};
    ///
    /// let edge = WeightedEdge::new('a', 'b', 2.5);
    /// assert_eq!(edge.other_vertex(&'a'), Some(&'b'));
    /// assert_eq!(edge.other_vertex(&'b'), Some(&'a'));
    /// assert_eq!(edge.other_vertex(&'z'), None);
    /// ```
    fn other_vertex(&self, vertex: &V) -> Option<&V>
    where
        V: PartialEq,
    {
        if self.vertex1() == vertex {
            Some(self.vertex2())
        } else if self.vertex2() == vertex {
            Some(self.vertex1())
        } else {
            None
        }
    }

    /// Orders two edges by weight using the IEEE 754 total order.
    fn cmp_by_weight(&self, other: &Self) -> Ordering
    where
        Self: Sized,
    {
        self.weight().total_cmp(&other.weight())
    }
}

/// A plain value edge carrying its endpoints and weight.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, WeightedEdge};
///
/// let edge = WeightedEdge::new("x", "y", 1.0);
/// assert_eq!(edge.vertex1(), &"x");
/// assert_eq!(edge.weight(), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedEdge<V> {
    vertex1: V,
    vertex2: V,
    weight: f64,
}

impl<V> WeightedEdge<V> {
    /// Creates an edge between `vertex1` and `vertex2`.
    #[must_use]
    pub const fn new(vertex1: V, vertex2: V, weight: f64) -> Self {
        Self {
            vertex1,
            vertex2,
            weight,
        }
    }
}

impl<V> Edge<V> for WeightedEdge<V> {
    #[rustfmt::skip]
    fn vertex1(&self) -> &V { &self.vertex1 }

    #[rustfmt::skip]
    fn vertex2(&self) -> &V { &self.vertex2 }

    #[rustfmt::skip]
    fn weight(&self) -> f64 { self.weight }
}
