//! Schema versions for edge lists and provenance for cluster reports.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// `major.minor.patch` version stamped on serialized edge lists.
///
/// Readers accept any payload with the same major version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Bumped when older readers can no longer load the payload.
    pub major: u32,
    /// Bumped when fields are added with defaults.
    pub minor: u32,
    /// Bumped for fixes that leave the layout untouched.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a schema version.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns whether a payload written with `other` can be read by `self`.
    pub fn is_compatible_with(&self, other: &SchemaVersion) -> bool {
        self.major == other.major
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Where a cluster report came from: the bytes read, the graph they produced
/// and the crates that did the work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunProvenance {
    /// SHA-256 of the raw message log, empty when the caller did not hash it.
    pub input_hash: String,
    /// Canonical hash of the mutual-pair graph.
    pub graph_hash: String,
    /// Crate name to version.
    pub tool_versions: BTreeMap<String, String>,
}

impl RunProvenance {
    /// Starts a record for the graph with the given canonical hash.
    pub fn for_graph(graph_hash: impl Into<String>) -> Self {
        Self {
            graph_hash: graph_hash.into(),
            ..Self::default()
        }
    }

    /// Records the version of one crate involved in the run.
    pub fn with_tool(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.tool_versions.insert(name.into(), version.into());
        self
    }
}
