use peak_core::errors::PeakError;
use peak_graph::{GraphConfig, UndirectedGraph};

#[test]
fn add_edge_is_symmetric_and_idempotent() {
    let mut graph = UndirectedGraph::default();
    assert!(graph.add_edge("a", "b").unwrap());
    assert!(!graph.add_edge("a", "b").unwrap());
    assert!(!graph.add_edge("b", "a").unwrap());

    assert_eq!(graph.edge_count(), 1);
    assert!(graph.neighbors(&"a").unwrap().contains("b"));
    assert!(graph.neighbors(&"b").unwrap().contains("a"));
    assert!(graph.has_edge(&"b", &"a"));
    assert_eq!(graph.degree(&"a").unwrap(), 1);
}

#[test]
fn unknown_vertex_is_not_found() {
    let mut graph = UndirectedGraph::default();
    graph.add_edge(1u32, 2).unwrap();
    let err = graph.neighbors(&9).unwrap_err();
    match err {
        PeakError::Graph(info) => {
            assert_eq!(info.code, "vertex-not-found");
            assert_eq!(info.context.get("vertex"), Some(&"9".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(graph.degree(&9).is_err());
}

#[test]
fn self_loops_rejected_by_default() {
    let mut graph = UndirectedGraph::default();
    let err = graph.add_edge("x", "x").unwrap_err();
    assert!(matches!(err, PeakError::Graph(info) if info.code == "self-loop"));
    assert!(graph.is_empty());
}

#[test]
fn ignored_self_loop_keeps_vertex_isolated() {
    let mut graph = UndirectedGraph::new(GraphConfig::ignoring_self_loops());
    assert!(!graph.add_edge("x", "x").unwrap());
    assert!(graph.contains_vertex(&"x"));
    assert_eq!(graph.degree(&"x").unwrap(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn edges_are_listed_once_in_order() {
    let graph = UndirectedGraph::from_edges(
        GraphConfig::default(),
        [("c", "a"), ("b", "a"), ("c", "b"), ("a", "c")],
    )
    .unwrap();
    let edges: Vec<_> = graph.edges().map(|(u, v)| (*u, *v)).collect();
    assert_eq!(edges, vec![("a", "b"), ("a", "c"), ("b", "c")]);
    let vertices: Vec<_> = graph.vertices().copied().collect();
    assert_eq!(vertices, vec!["a", "b", "c"]);
}

#[test]
fn indexed_view_matches_graph() {
    let mut graph = UndirectedGraph::default();
    graph.add_edge("d", "a").unwrap();
    graph.add_edge("b", "d").unwrap();
    graph.add_vertex("c");

    let indexed = graph.indexed();
    assert_eq!(indexed.len(), 4);
    let d = indexed.index_of(&"d").unwrap();
    assert_eq!(*indexed.vertex(d), "d");
    assert_eq!(indexed.neighbors(d), &[0, 1]);
    assert_eq!(indexed.degree(indexed.index_of(&"c").unwrap()), 0);
    assert_eq!(indexed.index_of(&"z"), None);
}
