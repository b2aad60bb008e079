use std::collections::BTreeSet;

use peak_core::Vertex;
use tracing::debug;

use crate::indexed::IndexedAdjacency;

/// Outcome of min-degree peeling over an [`IndexedAdjacency`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peeling {
    /// Vertex indices in the order they were removed.
    pub order: Vec<usize>,
    /// Largest remaining degree observed at removal time.
    pub degeneracy: usize,
}

/// Computes a degeneracy ordering by repeatedly removing a vertex of minimum
/// remaining degree.
///
/// Vertices are kept in buckets keyed by their remaining degree. Removing a
/// vertex lowers each remaining neighbor by exactly one, so the smallest
/// non-empty bucket can only move down by one step per removal and the scan
/// cursor never restarts from zero. Within a bucket the smallest index wins.
pub fn degeneracy_peeling<V: Vertex>(adjacency: &IndexedAdjacency<'_, V>) -> Peeling {
    let n = adjacency.len();
    let mut remaining: Vec<usize> = (0..n).map(|index| adjacency.degree(index)).collect();
    let max_degree = remaining.iter().copied().max().unwrap_or(0);
    let mut buckets: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); max_degree + 1];
    for (index, &degree) in remaining.iter().enumerate() {
        buckets[degree].insert(index);
    }

    let mut removed = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut degeneracy = 0;
    let mut cursor = 0;
    while order.len() < n {
        let Some(current) = (cursor..buckets.len()).find(|&degree| !buckets[degree].is_empty())
        else {
            break;
        };
        let Some(vertex) = buckets[current].pop_first() else {
            break;
        };
        removed[vertex] = true;
        degeneracy = degeneracy.max(current);
        order.push(vertex);

        for &neighbor in adjacency.neighbors(vertex) {
            if removed[neighbor] {
                continue;
            }
            let degree = remaining[neighbor];
            buckets[degree].remove(&neighbor);
            remaining[neighbor] = degree - 1;
            buckets[degree - 1].insert(neighbor);
        }
        cursor = current.saturating_sub(1);
    }

    debug!(vertices = n, degeneracy, "computed degeneracy ordering");
    Peeling { order, degeneracy }
}

/// Sorts vertex indices once by their full degree, smallest index first on ties.
pub fn degree_sort<V: Vertex>(adjacency: &IndexedAdjacency<'_, V>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..adjacency.len()).collect();
    order.sort_by_key(|&index| adjacency.degree(index));
    order
}
