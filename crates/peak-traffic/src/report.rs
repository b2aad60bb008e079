//! Size filtering and presentation of clusters.

use peak_clique::{Clique, SearchStats};
use peak_core::provenance::RunProvenance;
use serde::{Deserialize, Serialize};

use crate::pairs::MutualPairs;

/// Keeps the cliques with at least `min_size` members.
pub fn filter_min_size<V>(cliques: Vec<Clique<V>>, min_size: usize) -> Vec<Clique<V>> {
    cliques
        .into_iter()
        .filter(|clique| clique.len() >= min_size)
        .collect()
}

/// Renders each cluster as its members joined with `", "` and returns the
/// lines in ascending order.
pub fn format_clusters(cliques: &[Clique<String>]) -> Vec<String> {
    let mut lines: Vec<String> = cliques.iter().map(format_cluster).collect();
    lines.sort();
    lines
}

fn format_cluster(clique: &Clique<String>) -> String {
    clique
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Ingestion counters carried in a [`ClusterReport`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestSummary {
    /// Parsed message records.
    pub records: usize,
    /// Distinct mutual pairs (graph edges).
    pub mutual_pairs: usize,
    /// Messages whose sender and recipient coincide.
    pub self_messages: usize,
    /// Malformed lines skipped in lenient mode.
    pub skipped: usize,
}

impl IngestSummary {
    /// Snapshots the counters of `pairs`.
    pub fn from_pairs(pairs: &MutualPairs) -> Self {
        Self {
            records: pairs.records(),
            mutual_pairs: pairs.len(),
            self_messages: pairs.self_messages(),
            skipped: pairs.skipped(),
        }
    }
}

/// Result of a cluster search, serializable to JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterReport {
    /// Clusters in the same order as [`ClusterReport::lines`], members sorted.
    pub clusters: Vec<Vec<String>>,
    /// Minimum cluster size applied.
    pub min_clique_size: usize,
    /// Enumeration counters (over all maximal cliques, before filtering).
    pub stats: SearchStats,
    /// Whether the enumeration ran to completion.
    pub completed: bool,
    /// Ingestion counters.
    pub ingest: IngestSummary,
    /// Input and graph hashes.
    pub provenance: RunProvenance,
}

impl ClusterReport {
    /// Assembles a report; clusters are ordered by their formatted line.
    pub fn new(
        clusters: &[Clique<String>],
        min_clique_size: usize,
        stats: SearchStats,
        completed: bool,
        ingest: IngestSummary,
        provenance: RunProvenance,
    ) -> Self {
        let mut keyed: Vec<(String, Vec<String>)> = clusters
            .iter()
            .map(|clique| (format_cluster(clique), clique.iter().cloned().collect()))
            .collect();
        keyed.sort();
        Self {
            clusters: keyed.into_iter().map(|(_, members)| members).collect(),
            min_clique_size,
            stats,
            completed,
            ingest,
            provenance,
        }
    }

    /// Returns the formatted cluster lines.
    pub fn lines(&self) -> Vec<String> {
        self.clusters
            .iter()
            .map(|members| members.join(", "))
            .collect()
    }
}
