use peak_core::provenance::SchemaVersion;
use serde::{Deserialize, Serialize};

/// Schema version written into serialized edge lists.
pub const GRAPH_SCHEMA_VERSION: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Behaviour of [`UndirectedGraph::add_edge`](crate::UndirectedGraph::add_edge) when both
/// endpoints coincide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelfLoopPolicy {
    /// Fail with a `self-loop` graph error.
    #[default]
    Reject,
    /// Record the endpoint as a vertex and drop the edge.
    Ignore,
}

/// Configuration options that control the behaviour of [`UndirectedGraph`](crate::UndirectedGraph).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Policy applied to self-loop edges.
    #[serde(default)]
    pub self_loops: SelfLoopPolicy,
    /// Schema version stored alongside serialized payloads.
    #[serde(default = "default_schema_version")]
    pub schema_version: SchemaVersion,
}

fn default_schema_version() -> SchemaVersion {
    GRAPH_SCHEMA_VERSION
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            self_loops: SelfLoopPolicy::Reject,
            schema_version: GRAPH_SCHEMA_VERSION,
        }
    }
}

impl GraphConfig {
    /// Returns a configuration that silently drops self-loops.
    pub fn ignoring_self_loops() -> Self {
        Self {
            self_loops: SelfLoopPolicy::Ignore,
            ..Self::default()
        }
    }
}
