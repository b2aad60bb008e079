use peak_core::errors::{ErrorInfo, PeakError};
use peak_core::provenance::SchemaVersion;
use peak_core::Vertex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::flags::{GraphConfig, GRAPH_SCHEMA_VERSION};
use crate::graph::UndirectedGraph;

/// Serialized form of an [`UndirectedGraph`]: its configuration, every
/// vertex (so isolated ones survive a round trip) and each edge once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeListDocument<V> {
    /// Graph configuration, including the schema version of the payload.
    pub config: GraphConfig,
    /// All vertices in ascending order.
    #[serde(default = "Vec::new")]
    pub vertices: Vec<V>,
    /// Undirected edges, each listed once.
    pub edges: Vec<(V, V)>,
}

impl<V: Vertex> EdgeListDocument<V> {
    /// Captures the structure of `graph`.
    pub fn from_graph(graph: &UndirectedGraph<V>) -> Self {
        Self {
            config: graph.config().clone(),
            vertices: graph.vertices().cloned().collect(),
            edges: graph
                .edges()
                .map(|(u, v)| (u.clone(), v.clone()))
                .collect(),
        }
    }

    /// Rebuilds the graph, re-validating every edge.
    pub fn into_graph(self) -> Result<UndirectedGraph<V>, PeakError> {
        check_schema(&self.config.schema_version)?;
        let mut graph = UndirectedGraph::new(self.config);
        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }
        for (u, v) in self.edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }
}

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes<V: Vertex + Serialize>(
    graph: &UndirectedGraph<V>,
) -> Result<Vec<u8>, PeakError> {
    bincode::serialize(&EdgeListDocument::from_graph(graph))
        .map_err(|err| PeakError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes<V: Vertex + DeserializeOwned>(
    bytes: &[u8],
) -> Result<UndirectedGraph<V>, PeakError> {
    let document: EdgeListDocument<V> = bincode::deserialize(bytes)
        .map_err(|err| PeakError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    document.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json<V: Vertex + Serialize>(
    graph: &UndirectedGraph<V>,
) -> Result<String, PeakError> {
    serde_json::to_string_pretty(&EdgeListDocument::from_graph(graph))
        .map_err(|err| PeakError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
pub fn graph_from_json<V: Vertex + DeserializeOwned>(
    json: &str,
) -> Result<UndirectedGraph<V>, PeakError> {
    let document: EdgeListDocument<V> = serde_json::from_str(json)
        .map_err(|err| PeakError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    document.into_graph()
}

fn check_schema(found: &SchemaVersion) -> Result<(), PeakError> {
    if GRAPH_SCHEMA_VERSION.is_compatible_with(found) {
        return Ok(());
    }
    Err(PeakError::Serde(
        ErrorInfo::new("schema-mismatch", "edge list schema is not supported")
            .with_context("found", found.to_string())
            .with_context(
                "expected-major",
                GRAPH_SCHEMA_VERSION.major.to_string(),
            ),
    ))
}
