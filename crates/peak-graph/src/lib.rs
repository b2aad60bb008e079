#![deny(missing_docs)]

//! Undirected adjacency graph with degeneracy ordering for the peak clique engine.
//!
//! The graph is filled once through [`UndirectedGraph::add_edge`] and treated
//! as read-only afterwards. Searches run against an [`IndexedAdjacency`] view
//! that maps every vertex to a dense index so that neighbor sets become
//! sorted integer slices.

mod flags;
mod generators;
mod graph;
mod hash;
mod indexed;
mod ordering;
mod serialization;

pub use flags::{GraphConfig, SelfLoopPolicy, GRAPH_SCHEMA_VERSION};
pub use generators::{gen_gnp, gen_planted_cliques};
pub use graph::UndirectedGraph;
pub use hash::canonical_hash;
pub use indexed::IndexedAdjacency;
pub use ordering::{degeneracy_peeling, degree_sort, Peeling};

/// Re-export serialization helpers for downstream crates.
pub use serialization::{
    graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json, EdgeListDocument,
};
