use std::collections::{BTreeMap, BTreeSet};

use peak_core::errors::{ErrorInfo, PeakError};
use peak_core::Vertex;

use crate::flags::{GraphConfig, SelfLoopPolicy};
use crate::indexed::IndexedAdjacency;
use crate::ordering::{degeneracy_peeling, degree_sort};

/// Undirected, irreflexive graph stored as an adjacency map.
///
/// Every edge is recorded in the neighbor sets of both endpoints, so the
/// relation is symmetric by construction. Iteration follows the vertex order,
/// which keeps every derived quantity deterministic.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V: Vertex> {
    config: GraphConfig,
    adjacency: BTreeMap<V, BTreeSet<V>>,
    edge_count: usize,
}

impl<V: Vertex> UndirectedGraph<V> {
    /// Creates an empty graph with the provided configuration.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            adjacency: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Builds a graph from an iterator of vertex pairs.
    pub fn from_edges<I>(config: GraphConfig, edges: I) -> Result<Self, PeakError>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new(config);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Returns the configuration used by this graph.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Registers a vertex without any incident edge.
    ///
    /// Returns `true` when the vertex was not present before.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, BTreeSet::new());
        true
    }

    /// Inserts the undirected edge `u - v`.
    ///
    /// Returns `true` when the edge is new and `false` when it was already
    /// recorded. Self-loops follow the configured [`SelfLoopPolicy`].
    pub fn add_edge(&mut self, u: V, v: V) -> Result<bool, PeakError> {
        if u == v {
            return match self.config.self_loops {
                SelfLoopPolicy::Reject => Err(PeakError::Graph(
                    ErrorInfo::new("self-loop", "self-loops are not permitted")
                        .with_context("vertex", format!("{u:?}"))
                        .with_hint("configure self_loops = ignore to drop them instead"),
                )),
                SelfLoopPolicy::Ignore => {
                    self.add_vertex(u);
                    Ok(false)
                }
            };
        }
        let inserted = self
            .adjacency
            .entry(u.clone())
            .or_default()
            .insert(v.clone());
        self.adjacency.entry(v).or_default().insert(u);
        if inserted {
            self.edge_count += 1;
        }
        Ok(inserted)
    }

    /// Returns the neighbor set of `vertex`.
    pub fn neighbors(&self, vertex: &V) -> Result<&BTreeSet<V>, PeakError> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| vertex_not_found(vertex))
    }

    /// Returns the number of neighbors of `vertex`.
    pub fn degree(&self, vertex: &V) -> Result<usize, PeakError> {
        Ok(self.neighbors(vertex)?.len())
    }

    /// Returns whether `vertex` has been added to the graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns whether the edge `u - v` is present.
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|neighbors| neighbors.contains(v))
    }

    /// Returns all vertices in ascending order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Returns every undirected edge once, as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.adjacency.iter().flat_map(|(u, neighbors)| {
            neighbors
                .range((std::ops::Bound::Excluded(u), std::ops::Bound::Unbounded))
                .map(move |v| (u, v))
        })
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns whether the graph holds no vertex.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns a dense, index based view of the adjacency relation.
    pub fn indexed(&self) -> IndexedAdjacency<'_, V> {
        IndexedAdjacency::new(self)
    }

    /// Returns the vertices in degeneracy order.
    ///
    /// Vertices are peeled one at a time, always taking a vertex of minimum
    /// degree among those not yet placed. Ties go to the smallest vertex.
    pub fn degeneracy_ordering(&self) -> Vec<V> {
        let adjacency = self.indexed();
        let peeling = degeneracy_peeling(&adjacency);
        adjacency.resolve(&peeling.order)
    }

    /// Returns the degeneracy of the graph (zero for an edgeless graph).
    pub fn degeneracy(&self) -> usize {
        degeneracy_peeling(&self.indexed()).degeneracy
    }

    /// Returns the vertices sorted once by ascending degree, ties on vertex order.
    pub fn degree_ordering(&self) -> Vec<V> {
        let adjacency = self.indexed();
        adjacency.resolve(&degree_sort(&adjacency))
    }
}

impl<V: Vertex> Default for UndirectedGraph<V> {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

fn vertex_not_found<V: Vertex>(vertex: &V) -> PeakError {
    PeakError::Graph(
        ErrorInfo::new("vertex-not-found", "vertex was never added to the graph")
            .with_context("vertex", format!("{vertex:?}")),
    )
}
