//! JSON graph files accepted by the `mst` and `path` commands.
//!
//! ```json
//! {
//!   "vertices": ["a", "b", "c"],
//!   "edges": [{ "from": "a", "to": "b", "weight": 1.5 }]
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use arbor_core::{Edge, Graph, GraphError};
use serde::{Deserialize, Serialize};
use tracing::{Span, field, instrument};

use super::CliError;

/// A graph as stored on disk: named vertices and weighted edges between them.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    /// Vertex names in the order they are indexed.
    pub vertices: Vec<String>,
    /// Undirected edges in the order they are indexed.
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// One undirected edge of a [`GraphFile`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeRecord {
    /// First endpoint.
    pub from: String,
    /// Second endpoint.
    pub to: String,
    /// Non-negative weight.
    pub weight: f64,
}

impl Edge<String> for EdgeRecord {
    #[rustfmt::skip]
    fn vertex1(&self) -> &String { &self.from }

    #[rustfmt::skip]
    fn vertex2(&self) -> &String { &self.to }

    #[rustfmt::skip]
    fn weight(&self) -> f64 { self.weight }
}

impl GraphFile {
    /// Reads and parses a graph file.
    ///
    /// # Errors
    /// Returns [`CliError::Io`] when the file cannot be opened and
    /// [`CliError::Parse`] when its contents are not a valid graph document.
    #[instrument(name = "cli.load_graph", err, fields(vertices = field::Empty, edges = field::Empty))]
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let file = File::open(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: Self =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let span = Span::current();
        span.record("vertices", document.vertices.len());
        span.record("edges", document.edges.len());
        Ok(document)
    }

    /// Builds the in-memory graph, validating weights and endpoints.
    ///
    /// # Errors
    /// Returns the [`GraphError`] raised by [`Graph::new`].
    pub fn into_graph(self) -> Result<Graph<String, EdgeRecord>, GraphError> {
        Graph::new(self.vertices, self.edges)
    }
}
