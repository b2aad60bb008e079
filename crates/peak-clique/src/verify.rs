use std::collections::BTreeSet;

use peak_core::errors::{ErrorInfo, PeakError};
use peak_core::Vertex;
use peak_graph::UndirectedGraph;

use crate::Clique;

/// Returns whether every member of `members` is a vertex of `graph` and every
/// pair of distinct members is adjacent.
pub fn is_clique<V: Vertex>(graph: &UndirectedGraph<V>, members: &Clique<V>) -> bool {
    members.iter().all(|vertex| graph.contains_vertex(vertex))
        && members.iter().enumerate().all(|(position, u)| {
            members
                .iter()
                .skip(position + 1)
                .all(|v| graph.has_edge(u, v))
        })
}

/// Returns whether `clique` is a clique that no outside vertex can extend.
///
/// The empty set is maximal only in the empty graph.
pub fn is_maximal<V: Vertex>(graph: &UndirectedGraph<V>, clique: &Clique<V>) -> bool {
    if !is_clique(graph, clique) {
        return false;
    }
    let Some(first) = clique.iter().next() else {
        return graph.is_empty();
    };
    // Any extension has to be a neighbor of every member, the first one included.
    let Ok(neighbors) = graph.neighbors(first) else {
        return false;
    };
    !neighbors.iter().any(|candidate| {
        !clique.contains(candidate) && clique.iter().all(|member| graph.has_edge(member, candidate))
    })
}

/// Checks that `cliques` holds only maximal cliques of `graph`, each once.
///
/// Completeness is not checked.
pub fn verify_cliques<V: Vertex>(
    graph: &UndirectedGraph<V>,
    cliques: &[Clique<V>],
) -> Result<(), PeakError> {
    let mut seen: BTreeSet<&Clique<V>> = BTreeSet::new();
    for (index, clique) in cliques.iter().enumerate() {
        let failure = if !is_clique(graph, clique) {
            Some(("not-a-clique", "reported set is not a clique"))
        } else if !is_maximal(graph, clique) {
            Some(("not-maximal", "reported clique can be extended"))
        } else if !seen.insert(clique) {
            Some(("duplicate-clique", "clique reported more than once"))
        } else {
            None
        };
        if let Some((code, message)) = failure {
            return Err(PeakError::Graph(
                ErrorInfo::new(code, message)
                    .with_context("index", index.to_string())
                    .with_context("clique", format!("{clique:?}")),
            ));
        }
    }
    Ok(())
}
