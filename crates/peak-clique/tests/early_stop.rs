use std::ops::ControlFlow;

use peak_clique::{
    for_each_max_clique, max_cliques_with, CancelFlag, EnumerationOptions, SearchStrategy,
};
use peak_graph::{GraphConfig, UndirectedGraph};

/// Ten disjoint triangles, so the search has ten separate roots to visit.
fn triangles() -> UndirectedGraph<u32> {
    let mut edges = Vec::new();
    for block in 0..10u32 {
        let base = block * 3;
        edges.extend([(base, base + 1), (base + 1, base + 2), (base + 2, base)]);
    }
    UndirectedGraph::from_edges(GraphConfig::default(), edges).unwrap()
}

#[test]
fn pre_cancelled_flag_stops_before_any_work() {
    let flag = CancelFlag::new();
    flag.cancel();
    for strategy in [SearchStrategy::Recursive, SearchStrategy::ExplicitStack] {
        let options = EnumerationOptions::default()
            .with_strategy(strategy)
            .with_cancel(flag.clone());
        let result = max_cliques_with(&triangles(), &options);
        assert!(!result.completed);
        assert!(result.cliques.is_empty());
        assert_eq!(result.stats.expansions, 0);
    }
}

#[test]
fn sink_break_stops_after_first_clique() {
    for strategy in [SearchStrategy::Recursive, SearchStrategy::ExplicitStack] {
        let options = EnumerationOptions::default().with_strategy(strategy);
        let mut seen = Vec::new();
        let outcome = for_each_max_clique(&triangles(), &options, |clique| {
            seen.push(clique);
            ControlFlow::Break(())
        });
        assert!(!outcome.completed);
        assert_eq!(seen.len(), 1);
        assert_eq!(outcome.stats.cliques, 1);
    }
}

#[test]
fn cancel_during_search_is_observed() {
    for strategy in [SearchStrategy::Recursive, SearchStrategy::ExplicitStack] {
        let flag = CancelFlag::new();
        let options = EnumerationOptions::default()
            .with_strategy(strategy)
            .with_cancel(flag.clone());
        let mut seen = 0usize;
        let outcome = for_each_max_clique(&triangles(), &options, |_| {
            seen += 1;
            if seen == 3 {
                flag.cancel();
            }
            ControlFlow::Continue(())
        });
        assert!(!outcome.completed);
        assert_eq!(seen, 3);
    }
}

#[test]
fn uncancelled_flag_runs_to_completion() {
    let options = EnumerationOptions::default().with_cancel(CancelFlag::new());
    let result = max_cliques_with(&triangles(), &options);
    assert!(result.completed);
    assert_eq!(result.cliques.len(), 10);
}
