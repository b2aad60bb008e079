#![deny(missing_docs)]

//! Maximal clique enumeration for [`peak_graph::UndirectedGraph`].
//!
//! Implements Bron–Kerbosch without pivoting. The outer loop visits vertices
//! in degeneracy order, so the first recursion level only ever sees the
//! later neighbors of its root vertex. Two interchangeable strategies are
//! provided for the inner search: plain recursion and an explicit frame stack
//! for graphs whose cliques are deep enough to strain the native stack.

mod options;
mod search;
mod sets;
mod stack;
mod verify;

use std::collections::BTreeSet;
use std::ops::ControlFlow;

use peak_core::Vertex;
use peak_graph::UndirectedGraph;
use serde::{Deserialize, Serialize};

pub use options::{CancelFlag, EnumerationOptions, OrderingStrategy, SearchStrategy};
pub use verify::{is_clique, is_maximal, verify_cliques};

/// Set of pairwise adjacent vertices.
pub type Clique<V> = BTreeSet<V>;

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Number of maximal cliques reported.
    pub cliques: usize,
    /// Number of search frames entered, roots included.
    pub expansions: usize,
    /// Largest clique-in-progress size reached.
    pub max_depth: usize,
}

/// Summary returned by [`for_each_max_clique`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Search counters.
    pub stats: SearchStats,
    /// `false` when the search stopped early, either through the
    /// [`CancelFlag`] or because the sink returned [`ControlFlow::Break`].
    pub completed: bool,
}

/// Cliques collected by [`max_cliques_with`], together with search counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration<V> {
    /// Maximal cliques in discovery order.
    pub cliques: Vec<Clique<V>>,
    /// Search counters.
    pub stats: SearchStats,
    /// Whether the search ran to completion.
    pub completed: bool,
}

/// Returns every maximal clique of `graph` exactly once.
///
/// An empty graph yields no clique. An isolated vertex yields the singleton
/// clique containing it.
pub fn max_cliques<V: Vertex>(graph: &UndirectedGraph<V>) -> Vec<Clique<V>> {
    max_cliques_with(graph, &EnumerationOptions::default()).cliques
}

/// Collects the maximal cliques of `graph` using the provided options.
pub fn max_cliques_with<V: Vertex>(
    graph: &UndirectedGraph<V>,
    options: &EnumerationOptions,
) -> Enumeration<V> {
    let mut cliques = Vec::new();
    let outcome = for_each_max_clique(graph, options, |clique| {
        cliques.push(clique);
        ControlFlow::Continue(())
    });
    Enumeration {
        cliques,
        stats: outcome.stats,
        completed: outcome.completed,
    }
}

/// Streams each maximal clique of `graph` into `sink` as soon as it is found.
///
/// Returning [`ControlFlow::Break`] from the sink stops the search.
pub fn for_each_max_clique<V, F>(
    graph: &UndirectedGraph<V>,
    options: &EnumerationOptions,
    sink: F,
) -> SearchOutcome
where
    V: Vertex,
    F: FnMut(Clique<V>) -> ControlFlow<()>,
{
    search::run(graph, options, sink)
}
