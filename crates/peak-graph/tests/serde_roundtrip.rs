use peak_core::errors::PeakError;
use peak_core::RngHandle;
use peak_graph::{
    canonical_hash, gen_gnp, graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json,
    GraphConfig, UndirectedGraph,
};
use serde::{Deserialize, Serialize};

#[test]
fn json_roundtrip_keeps_isolated_vertices() {
    let mut graph = UndirectedGraph::default();
    graph.add_edge("alice".to_string(), "bob".to_string()).unwrap();
    graph.add_vertex("carol".to_string());

    let json = graph_to_json(&graph).unwrap();
    let restored: UndirectedGraph<String> = graph_from_json(&json).unwrap();
    assert_eq!(restored.vertex_count(), 3);
    assert_eq!(restored.edge_count(), 1);
    assert!(restored.contains_vertex(&"carol".to_string()));
    assert_eq!(canonical_hash(&graph).unwrap(), canonical_hash(&restored).unwrap());
}

#[test]
fn bytes_roundtrip_preserves_hash() {
    let mut rng = RngHandle::from_seed(11);
    let graph = gen_gnp(30, 0.2, &mut rng).unwrap();
    let bytes = graph_to_bytes(&graph).unwrap();
    let restored: UndirectedGraph<u64> = graph_from_bytes(&bytes).unwrap();
    assert_eq!(canonical_hash(&graph).unwrap(), canonical_hash(&restored).unwrap());
}

#[test]
fn hash_ignores_insertion_order() {
    let forward =
        UndirectedGraph::from_edges(GraphConfig::default(), [(1u32, 2), (2, 3), (3, 4)]).unwrap();
    let backward =
        UndirectedGraph::from_edges(GraphConfig::default(), [(4u32, 3), (3, 2), (2, 1)]).unwrap();
    assert_eq!(canonical_hash(&forward).unwrap(), canonical_hash(&backward).unwrap());

    let other =
        UndirectedGraph::from_edges(GraphConfig::default(), [(1u32, 2), (2, 3), (1, 4)]).unwrap();
    assert_ne!(canonical_hash(&forward).unwrap(), canonical_hash(&other).unwrap());
}

#[test]
fn edge_lists_are_revalidated() {
    let json = r#"{
        "config": { "self_loops": "reject" },
        "edges": [["a", "b"], ["c", "c"]]
    }"#;
    let err = graph_from_json::<String>(json).unwrap_err();
    assert!(matches!(err, PeakError::Graph(info) if info.code == "self-loop"));
}

#[test]
fn incompatible_schema_rejected() {
    let json = r#"{
        "config": { "schema_version": { "major": 9, "minor": 0, "patch": 0 } },
        "edges": []
    }"#;
    let err = graph_from_json::<String>(json).unwrap_err();
    assert_eq!(err.code(), "schema-mismatch");
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = graph_from_json::<String>("{ not json").unwrap_err();
    assert!(matches!(err, PeakError::Serde(info) if info.code == "deserialize-json"));
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
enum Station {
    Depot(u32),
    Stop(String),
}

#[test]
fn vertices_without_default_roundtrip() {
    let graph = UndirectedGraph::from_edges(
        GraphConfig::default(),
        [(Station::Depot(1), Station::Stop("north".to_string()))],
    )
    .unwrap();
    let json = graph_to_json(&graph).unwrap();
    let restored: UndirectedGraph<Station> = graph_from_json(&json).unwrap();
    assert!(restored.has_edge(&Station::Depot(1), &Station::Stop("north".to_string())));

    let bytes = graph_to_bytes(&graph).unwrap();
    let restored: UndirectedGraph<Station> = graph_from_bytes(&bytes).unwrap();
    assert_eq!(restored.edge_count(), 1);
}

#[test]
fn missing_vertex_list_is_rebuilt_from_edges() {
    let json = r#"{ "config": {}, "edges": [[{ "Depot": 4 }, { "Stop": "pier" }]] }"#;
    let restored: UndirectedGraph<Station> = graph_from_json(json).unwrap();
    assert_eq!(restored.vertex_count(), 2);
    assert!(restored.contains_vertex(&Station::Depot(4)));
}
