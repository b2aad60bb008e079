#![deny(missing_docs)]
#![doc = "Core data types shared by the peak clique engine crates."]

use std::fmt::Debug;

pub mod errors;
pub mod provenance;
pub mod rng;

pub use errors::{ErrorInfo, PeakError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::RngHandle;

/// Identifier of a vertex in an undirected graph.
///
/// Vertices are opaque: the engine only relies on equality and on the total
/// order, which is also used to break ties deterministically wherever two
/// vertices are otherwise indistinguishable (for example equal degrees during
/// degeneracy peeling).
pub trait Vertex: Clone + Ord + Debug {}

impl<T> Vertex for T where T: Clone + Ord + Debug {}
