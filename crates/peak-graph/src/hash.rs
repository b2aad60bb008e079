use peak_core::errors::{ErrorInfo, PeakError};
use peak_core::Vertex;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::flags::{GraphConfig, SelfLoopPolicy};
use crate::graph::UndirectedGraph;

/// Computes the canonical structural hash for the provided graph.
///
/// Two graphs with the same configuration, vertex set and edge set hash to
/// the same value regardless of the order in which edges were inserted.
pub fn canonical_hash<V: Vertex + Serialize>(
    graph: &UndirectedGraph<V>,
) -> Result<String, PeakError> {
    let mut hasher = Sha256::new();
    encode_config(graph.config(), &mut hasher);

    let adjacency = graph.indexed();
    hasher.update((adjacency.len() as u64).to_le_bytes());
    for vertex in graph.vertices() {
        let bytes = bincode::serialize(vertex)
            .map_err(|err| PeakError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))?;
        update_bytes(&bytes, &mut hasher);
    }

    hasher.update((graph.edge_count() as u64).to_le_bytes());
    for u in 0..adjacency.len() {
        for &v in adjacency.neighbors(u).iter().filter(|&&v| v > u) {
            hasher.update((u as u64).to_le_bytes());
            hasher.update((v as u64).to_le_bytes());
        }
    }

    Ok(format!("{:x}", hasher.finalize()))
}

fn encode_config(config: &GraphConfig, hasher: &mut Sha256) {
    match config.self_loops {
        SelfLoopPolicy::Reject => hasher.update(b"self-loops:reject"),
        SelfLoopPolicy::Ignore => hasher.update(b"self-loops:ignore"),
    }
    hasher.update(config.schema_version.major.to_le_bytes());
    hasher.update(config.schema_version.minor.to_le_bytes());
    hasher.update(config.schema_version.patch.to_le_bytes());
}

fn update_bytes(bytes: &[u8], hasher: &mut Sha256) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}
