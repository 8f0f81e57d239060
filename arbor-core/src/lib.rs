//! Arbor core library.
//!
//! A generic, immutable weighted-graph engine: a [`DisjointSet`] with union
//! by rank and path compression, a [`Graph`] validated at construction,
//! Kruskal minimum spanning trees, and Dijkstra shortest paths.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod graph;
mod mst;
mod shortest_path;
#[cfg(test)]
mod test_utils;

pub use crate::{
    disjoint_set::{ComponentId, DisjointSet},
    error::{DisjointSetError, DisjointSetErrorCode, ErrorKind, GraphError, GraphErrorCode},
    graph::{Edge, Graph, WeightedEdge},
    mst::MinimumSpanningForest,
    shortest_path::ShortestPath,
};
