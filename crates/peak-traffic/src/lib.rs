#![deny(missing_docs)]

//! Message-log front end for the peak clique engine.
//!
//! Turns `timestamp / sender / recipient` records into an undirected graph in
//! which two addresses are adjacent when each has written to the other, then
//! reports the maximal cliques ("clusters") above a minimum size.

pub mod config;
pub mod ingest;
pub mod pairs;
pub mod record;
pub mod report;

use std::io::BufRead;

use peak_clique::max_cliques_with;
use peak_core::errors::PeakError;
use peak_core::provenance::RunProvenance;
use peak_graph::canonical_hash;
use tracing::{info, instrument};

pub use config::{IngestConfig, SearchConfig, TrafficConfig};
pub use ingest::{build_graph, ingest_path, ingest_reader};
pub use pairs::MutualPairs;
pub use record::{parse_record, MessageRecord};
pub use report::{filter_min_size, format_clusters, ClusterReport, IngestSummary};

/// Runs the whole pipeline on a message log: ingestion, graph construction,
/// maximal clique enumeration and size filtering.
#[instrument(skip_all, fields(min_clique_size = config.min_clique_size))]
pub fn find_clusters<R: BufRead>(
    reader: R,
    config: &TrafficConfig,
) -> Result<ClusterReport, PeakError> {
    config.validate()?;
    let pairs = ingest_reader(reader, &config.ingest)?;
    let graph = build_graph(&pairs)?;
    let enumeration = max_cliques_with(&graph, &config.search.to_options());
    let total = enumeration.cliques.len();
    let clusters = filter_min_size(enumeration.cliques, config.min_clique_size);
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        maximal_cliques = total,
        clusters = clusters.len(),
        "cluster search finished"
    );

    let provenance = RunProvenance::for_graph(canonical_hash(&graph)?)
        .with_tool(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    Ok(ClusterReport::new(
        &clusters,
        config.min_clique_size,
        enumeration.stats,
        enumeration.completed,
        IngestSummary::from_pairs(&pairs),
        provenance,
    ))
}
