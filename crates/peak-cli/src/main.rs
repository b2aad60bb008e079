use std::error::Error;
use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand};
use commands::{
    cliques::{self, CliquesArgs},
    clusters::{self, ClustersArgs},
    generate::{self, GenerateArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

const VERBOSE_FILTER: &str =
    "warn,peak=debug,peak_graph=debug,peak_clique=debug,peak_traffic=debug";

#[derive(Parser, Debug)]
#[command(name = "peak", about = "Maximal clique search over mutual message traffic")]
struct Cli {
    /// Log search and ingestion details to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the clusters (maximal cliques) found in a message log.
    Clusters(ClustersArgs),
    /// Enumerate every maximal clique of a serialized edge list.
    Cliques(CliquesArgs),
    /// Write a random G(n, p) edge list.
    Generate(GenerateArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Clusters(args) => clusters::run(&args),
        Command::Cliques(args) => cliques::run(&args),
        Command::Generate(args) => generate::run(&args),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn write_json<P: AsRef<Path>, T: serde::Serialize>(
    path: P,
    value: &T,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
