use peak_core::errors::{ErrorInfo, PeakError};
use peak_core::rng::RngHandle;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::flags::GraphConfig;
use crate::graph::UndirectedGraph;

/// Generates an Erdős–Rényi `G(n, p)` graph on vertices `0..n`.
///
/// Every vertex is present even when it ends up isolated.
pub fn gen_gnp(
    n_vertices: usize,
    probability: f64,
    rng: &mut RngHandle,
) -> Result<UndirectedGraph<u64>, PeakError> {
    check_probability(probability)?;
    let mut graph = UndirectedGraph::new(GraphConfig::default());
    for vertex in 0..n_vertices as u64 {
        graph.add_vertex(vertex);
    }
    for u in 0..n_vertices as u64 {
        for v in (u + 1)..n_vertices as u64 {
            if rng.gen_bool(probability) {
                graph.add_edge(u, v)?;
            }
        }
    }
    Ok(graph)
}

/// Generates a `G(n, p)` background graph and plants one complete subgraph
/// per entry of `clique_sizes` on a random vertex subset.
pub fn gen_planted_cliques(
    n_vertices: usize,
    clique_sizes: &[usize],
    probability: f64,
    rng: &mut RngHandle,
) -> Result<UndirectedGraph<u64>, PeakError> {
    if let Some(&size) = clique_sizes.iter().find(|&&size| size > n_vertices) {
        return Err(PeakError::Graph(
            ErrorInfo::new("clique-too-large", "planted clique exceeds vertex count")
                .with_context("size", size.to_string())
                .with_context("vertices", n_vertices.to_string()),
        ));
    }
    let mut graph = gen_gnp(n_vertices, probability, rng)?;
    let vertices: Vec<u64> = (0..n_vertices as u64).collect();
    for &size in clique_sizes {
        let members = sample_subset(&vertices, size, rng);
        for (offset, &u) in members.iter().enumerate() {
            for &v in &members[offset + 1..] {
                graph.add_edge(u, v)?;
            }
        }
    }
    Ok(graph)
}

fn sample_subset(vertices: &[u64], count: usize, rng: &mut RngHandle) -> Vec<u64> {
    let mut buffer = vertices.to_vec();
    buffer.shuffle(rng);
    buffer.truncate(count.min(buffer.len()));
    buffer.sort_unstable();
    buffer
}

fn check_probability(probability: f64) -> Result<(), PeakError> {
    if (0.0..=1.0).contains(&probability) {
        return Ok(());
    }
    Err(PeakError::Graph(
        ErrorInfo::new("invalid-probability", "edge probability must lie in [0, 1]")
            .with_context("probability", probability.to_string()),
    ))
}
