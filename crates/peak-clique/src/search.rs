use std::ops::ControlFlow;

use peak_core::Vertex;
use peak_graph::{degeneracy_peeling, degree_sort, IndexedAdjacency, UndirectedGraph};
use tracing::{debug, instrument};

use crate::options::{CancelFlag, EnumerationOptions, OrderingStrategy, SearchStrategy};
use crate::sets::{insert_sorted, intersect, remove_sorted};
use crate::{Clique, SearchOutcome, SearchStats};

/// State shared by every frame of one enumeration call.
pub(crate) struct Search<'s, 'g, V: Vertex, F> {
    pub(crate) adjacency: &'s IndexedAdjacency<'g, V>,
    pub(crate) cancel: Option<&'s CancelFlag>,
    pub(crate) sink: F,
    pub(crate) stats: SearchStats,
}

#[instrument(skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub(crate) fn run<V, F>(
    graph: &UndirectedGraph<V>,
    options: &EnumerationOptions,
    sink: F,
) -> SearchOutcome
where
    V: Vertex,
    F: FnMut(Clique<V>) -> ControlFlow<()>,
{
    let adjacency = graph.indexed();
    let order = match options.ordering {
        OrderingStrategy::Degeneracy => degeneracy_peeling(&adjacency).order,
        OrderingStrategy::StaticDegree => degree_sort(&adjacency),
    };
    let mut rank = vec![0usize; order.len()];
    for (position, &vertex) in order.iter().enumerate() {
        rank[vertex] = position;
    }

    let mut search = Search {
        adjacency: &adjacency,
        cancel: options.cancel.as_ref(),
        sink,
        stats: SearchStats::default(),
    };

    // Vertices earlier in the order have already been fully explored as roots,
    // so they move from the candidate side to the excluded side.
    let mut flow = ControlFlow::Continue(());
    for &root in &order {
        flow = search.check_cancelled();
        if flow.is_break() {
            break;
        }
        let (candidates, excluded): (Vec<usize>, Vec<usize>) = adjacency
            .neighbors(root)
            .iter()
            .copied()
            .partition(|&neighbor| rank[neighbor] > rank[root]);
        flow = match options.strategy {
            SearchStrategy::Recursive => search.expand(&mut vec![root], candidates, excluded),
            SearchStrategy::ExplicitStack => search.expand_with_stack(root, candidates, excluded),
        };
        if flow.is_break() {
            break;
        }
    }

    let stats = search.stats;
    debug!(
        strategy = %options.strategy,
        ordering = %options.ordering,
        cliques = stats.cliques,
        expansions = stats.expansions,
        max_depth = stats.max_depth,
        completed = flow.is_continue(),
        "maximal clique search finished"
    );
    SearchOutcome {
        stats,
        completed: flow.is_continue(),
    }
}

impl<'s, 'g, V, F> Search<'s, 'g, V, F>
where
    V: Vertex,
    F: FnMut(Clique<V>) -> ControlFlow<()>,
{
    /// Recursive Bron–Kerbosch step over the frame `(clique, candidates, excluded)`.
    ///
    /// Each call owns its candidate and excluded sets. After a candidate has
    /// been explored it is threaded from one set to the other before the next
    /// sibling is tried.
    pub(crate) fn expand(
        &mut self,
        clique: &mut Vec<usize>,
        mut candidates: Vec<usize>,
        mut excluded: Vec<usize>,
    ) -> ControlFlow<()> {
        self.enter(clique.len());
        if candidates.is_empty() && excluded.is_empty() {
            return self.emit(clique);
        }

        let snapshot = candidates.clone();
        for vertex in snapshot {
            self.check_cancelled()?;
            let neighbors = self.adjacency.neighbors(vertex);
            let next_candidates = intersect(&candidates, neighbors);
            let next_excluded = intersect(&excluded, neighbors);

            clique.push(vertex);
            let flow = self.expand(clique, next_candidates, next_excluded);
            clique.pop();
            flow?;

            remove_sorted(&mut candidates, vertex);
            insert_sorted(&mut excluded, vertex);
        }
        ControlFlow::Continue(())
    }

    pub(crate) fn enter(&mut self, depth: usize) {
        self.stats.expansions += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
    }

    pub(crate) fn emit(&mut self, clique: &[usize]) -> ControlFlow<()> {
        self.stats.cliques += 1;
        let members: Clique<V> = clique
            .iter()
            .map(|&index| self.adjacency.vertex(index).clone())
            .collect();
        (self.sink)(members)
    }

    pub(crate) fn check_cancelled(&self) -> ControlFlow<()> {
        match self.cancel {
            Some(flag) if flag.is_cancelled() => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}
