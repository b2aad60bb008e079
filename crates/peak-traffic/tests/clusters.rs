use std::io::Cursor;

use peak_clique::SearchStrategy;
use peak_graph::{GraphConfig, UndirectedGraph};
use peak_traffic::{filter_min_size, find_clusters, format_clusters, TrafficConfig};

const SAMPLE: &str = "\
Thu Dec 11 17:53:01 PST 2008\ta@facebook.com\tb@facebook.com
Thu Dec 11 17:53:02 PST 2008\tb@facebook.com\ta@facebook.com
Thu Dec 11 17:53:03 PST 2008\ta@facebook.com\tc@facebook.com
Thu Dec 11 17:53:04 PST 2008\tc@facebook.com\ta@facebook.com
Thu Dec 11 17:53:05 PST 2008\tb@facebook.com\tc@facebook.com
Thu Dec 11 17:53:06 PST 2008\tc@facebook.com\tb@facebook.com
Thu Dec 11 17:53:07 PST 2008\td@facebook.com\te@facebook.com
Thu Dec 11 17:53:08 PST 2008\te@facebook.com\td@facebook.com
Thu Dec 11 17:53:09 PST 2008\td@facebook.com\tf@facebook.com
Thu Dec 11 17:53:10 PST 2008\tf@facebook.com\td@facebook.com
Thu Dec 11 17:53:11 PST 2008\te@facebook.com\tf@facebook.com
Thu Dec 11 17:53:12 PST 2008\tf@facebook.com\te@facebook.com
Thu Dec 11 17:53:13 PST 2008\ta@facebook.com\td@facebook.com
Thu Dec 11 17:53:14 PST 2008\tg@facebook.com\ta@facebook.com
Thu Dec 11 17:53:15 PST 2008\ta@facebook.com\tg@facebook.com
";

#[test]
fn sample_log_yields_two_clusters() {
    let report = find_clusters(Cursor::new(SAMPLE), &TrafficConfig::default()).unwrap();
    assert_eq!(
        report.lines(),
        vec![
            "a@facebook.com, b@facebook.com, c@facebook.com".to_string(),
            "d@facebook.com, e@facebook.com, f@facebook.com".to_string(),
        ]
    );
    assert!(report.completed);
    assert_eq!(report.ingest.records, 15);
    assert_eq!(report.ingest.mutual_pairs, 7);
    // The pair a-g is a maximal clique of size two and is filtered out.
    assert_eq!(report.stats.cliques, 3);
    assert!(!report.provenance.graph_hash.is_empty());
    assert!(report.provenance.tool_versions.contains_key("peak-traffic"));
}

#[test]
fn lower_threshold_keeps_pairs() {
    let config = TrafficConfig {
        min_clique_size: 2,
        ..TrafficConfig::default()
    };
    let report = find_clusters(Cursor::new(SAMPLE), &config).unwrap();
    assert_eq!(report.clusters.len(), 3);
    assert_eq!(report.clusters[0], vec!["a@facebook.com", "b@facebook.com", "c@facebook.com"]);
    assert_eq!(report.clusters[1], vec!["a@facebook.com", "g@facebook.com"]);
}

#[test]
fn strategy_does_not_change_result() {
    let mut config = TrafficConfig::default();
    let recursive = find_clusters(Cursor::new(SAMPLE), &config).unwrap();
    config.search.strategy = SearchStrategy::ExplicitStack;
    let stacked = find_clusters(Cursor::new(SAMPLE), &config).unwrap();
    assert_eq!(recursive.clusters, stacked.clusters);
}

#[test]
fn zero_threshold_is_rejected() {
    let config = TrafficConfig {
        min_clique_size: 0,
        ..TrafficConfig::default()
    };
    let err = find_clusters(Cursor::new(SAMPLE), &config).unwrap_err();
    assert_eq!(err.code(), "invalid-config");
}

#[test]
fn formatting_sorts_members_and_lines() {
    let graph = UndirectedGraph::from_edges(
        GraphConfig::default(),
        [
            ("zed".to_string(), "amy".to_string()),
            ("amy".to_string(), "kim".to_string()),
            ("kim".to_string(), "zed".to_string()),
            ("bob".to_string(), "cal".to_string()),
        ],
    )
    .unwrap();
    let cliques = peak_clique::max_cliques(&graph);
    assert_eq!(
        format_clusters(&cliques),
        vec!["amy, kim, zed".to_string(), "bob, cal".to_string()]
    );
    assert_eq!(
        format_clusters(&filter_min_size(cliques, 3)),
        vec!["amy, kim, zed".to_string()]
    );
}

#[test]
fn report_serializes_to_json() {
    let report = find_clusters(Cursor::new(SAMPLE), &TrafficConfig::default()).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let restored: peak_traffic::ClusterReport = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, report);
}
