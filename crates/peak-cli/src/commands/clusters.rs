use std::error::Error;
use std::fs;
use std::io::{Cursor, Write};
use std::path::PathBuf;

use clap::Args;
use peak_clique::{OrderingStrategy, SearchStrategy};
use peak_traffic::{find_clusters, TrafficConfig};
use sha2::{Digest, Sha256};
use tracing::info;

#[derive(Args, Debug)]
pub struct ClustersArgs {
    /// Tab separated `timestamp sender recipient` message log.
    #[arg(long)]
    pub input: PathBuf,
    /// Optional YAML configuration; flags below override it.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Smallest cluster size to print.
    #[arg(long)]
    pub min_size: Option<usize>,
    /// Inner search strategy (`recursive` or `explicit-stack`).
    #[arg(long)]
    pub strategy: Option<SearchStrategy>,
    /// Outer loop ordering (`degeneracy` or `static-degree`).
    #[arg(long)]
    pub ordering: Option<OrderingStrategy>,
    /// Fail on the first malformed line.
    #[arg(long)]
    pub strict: bool,
    /// Print the full JSON report instead of one line per cluster.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &ClustersArgs) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => TrafficConfig::load(path)?,
        None => TrafficConfig::default(),
    };
    if let Some(min_size) = args.min_size {
        config.min_clique_size = min_size;
    }
    if let Some(strategy) = args.strategy {
        config.search.strategy = strategy;
    }
    if let Some(ordering) = args.ordering {
        config.search.ordering = ordering;
    }
    config.ingest.strict |= args.strict;

    let bytes = fs::read(&args.input)?;
    let input_hash = format!("{:x}", Sha256::digest(&bytes));
    info!(input = %args.input.display(), bytes = bytes.len(), "reading message log");

    let mut report = find_clusters(Cursor::new(bytes), &config)?;
    report.provenance.input_hash = input_hash;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        for line in report.lines() {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
