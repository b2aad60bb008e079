use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use peak_core::RngHandle;
use peak_graph::{gen_gnp, gen_planted_cliques, graph_to_json};
use tracing::info;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of vertices.
    #[arg(long)]
    pub vertices: usize,
    /// Independent edge probability.
    #[arg(long, default_value_t = 0.01)]
    pub probability: f64,
    /// Complete subgraphs to plant, by size (repeatable).
    #[arg(long = "plant", value_name = "SIZE")]
    pub planted: Vec<usize>,
    /// Seed for the deterministic RNG.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Output path for the JSON edge list.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let mut rng = RngHandle::from_seed(args.seed);
    let graph = if args.planted.is_empty() {
        gen_gnp(args.vertices, args.probability, &mut rng)?
    } else {
        gen_planted_cliques(args.vertices, &args.planted, args.probability, &mut rng)?
    };
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        seed = args.seed,
        "generated graph"
    );
    if let Some(parent) = args.out.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&args.out, graph_to_json(&graph)?)?;
    Ok(())
}
