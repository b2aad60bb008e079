use peak_core::{RunProvenance, SchemaVersion};

#[test]
fn schema_compatibility_follows_major_version() {
    let current = SchemaVersion::default();
    assert_eq!(current.to_string(), "1.0.0");
    assert!(current.is_compatible_with(&SchemaVersion::new(1, 4, 2)));
    assert!(!current.is_compatible_with(&SchemaVersion::new(2, 0, 0)));
}

#[test]
fn provenance_builder_collects_tools() {
    let provenance = RunProvenance::for_graph("abc123")
        .with_tool("peak-traffic", "0.1.0")
        .with_tool("peak-clique", "0.1.0");
    assert_eq!(provenance.graph_hash, "abc123");
    assert!(provenance.input_hash.is_empty());
    assert_eq!(provenance.tool_versions.len(), 2);
    assert_eq!(provenance.tool_versions["peak-clique"], "0.1.0");
}
