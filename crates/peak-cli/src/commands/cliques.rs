use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use peak_clique::{
    max_cliques_with, verify_cliques, EnumerationOptions, OrderingStrategy, SearchStats,
    SearchStrategy,
};
use peak_graph::{canonical_hash, graph_from_json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::write_json;

#[derive(Args, Debug)]
pub struct CliquesArgs {
    /// JSON edge list as written by `peak generate`.
    #[arg(long)]
    pub graph: PathBuf,
    /// Inner search strategy (`recursive` or `explicit-stack`).
    #[arg(long, default_value_t = SearchStrategy::Recursive)]
    pub strategy: SearchStrategy,
    /// Outer loop ordering (`degeneracy` or `static-degree`).
    #[arg(long, default_value_t = OrderingStrategy::Degeneracy)]
    pub ordering: OrderingStrategy,
    /// Re-check every reported clique for validity, maximality and uniqueness.
    #[arg(long)]
    pub verify: bool,
    /// Output path for the JSON report; stdout when absent.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Vertex label of an edge list: numeric ids from `peak generate` or names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexLabel {
    /// Integer identifier.
    Id(u64),
    /// Free-form name.
    Name(String),
}

#[derive(Debug, Serialize)]
struct CliqueReport {
    graph_hash: String,
    vertices: usize,
    edges: usize,
    degeneracy: usize,
    strategy: SearchStrategy,
    ordering: OrderingStrategy,
    stats: SearchStats,
    completed: bool,
    cliques: Vec<Vec<VertexLabel>>,
}

pub fn run(args: &CliquesArgs) -> Result<(), Box<dyn Error>> {
    let json = fs::read_to_string(&args.graph)?;
    let graph = graph_from_json::<VertexLabel>(&json)?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded edge list"
    );

    let options = EnumerationOptions::default()
        .with_strategy(args.strategy)
        .with_ordering(args.ordering);
    let enumeration = max_cliques_with(&graph, &options);
    if args.verify {
        verify_cliques(&graph, &enumeration.cliques)?;
        info!(cliques = enumeration.cliques.len(), "verified cliques");
    }

    let mut cliques: Vec<Vec<VertexLabel>> = enumeration
        .cliques
        .into_iter()
        .map(|clique| clique.into_iter().collect())
        .collect();
    cliques.sort();

    let report = CliqueReport {
        graph_hash: canonical_hash(&graph)?,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        degeneracy: graph.degeneracy(),
        strategy: args.strategy,
        ordering: args.ordering,
        stats: enumeration.stats,
        completed: enumeration.completed,
        cliques,
    };
    match &args.out {
        Some(path) => write_json(path, &report)?,
        None => {
            let stdout = std::io::stdout();
            writeln!(stdout.lock(), "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    Ok(())
}
