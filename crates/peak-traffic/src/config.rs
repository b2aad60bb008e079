//! YAML-configurable parameters of a cluster search.

use std::fs;
use std::path::Path;

use peak_clique::{EnumerationOptions, OrderingStrategy, SearchStrategy};
use peak_core::errors::{ErrorInfo, PeakError};
use serde::{Deserialize, Serialize};

/// Parameters governing a cluster search run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficConfig {
    /// Smallest clique size reported as a cluster.
    #[serde(default = "default_min_clique_size")]
    pub min_clique_size: usize,
    /// Log parsing behaviour.
    #[serde(default)]
    pub ingest: IngestConfig,
    /// Enumeration behaviour.
    #[serde(default)]
    pub search: SearchConfig,
}

fn default_min_clique_size() -> usize {
    3
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            min_clique_size: default_min_clique_size(),
            ingest: IngestConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl TrafficConfig {
    /// Parses a configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PeakError> {
        let config: TrafficConfig = serde_yaml::from_str(yaml)
            .map_err(|err| PeakError::Config(ErrorInfo::new("invalid-config", err.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    pub fn load(path: &Path) -> Result<Self, PeakError> {
        let yaml = fs::read_to_string(path).map_err(|err| {
            PeakError::Config(
                ErrorInfo::new("io", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), PeakError> {
        if self.min_clique_size == 0 {
            return Err(PeakError::Config(
                ErrorInfo::new("invalid-config", "min_clique_size must be at least 1")
                    .with_context("field", "min_clique_size")
                    .with_hint("use 1 to keep every maximal clique"),
            ));
        }
        Ok(())
    }
}

/// Log parsing options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Column separator.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Fail on the first malformed line instead of skipping it.
    #[serde(default)]
    pub strict: bool,
}

fn default_delimiter() -> char {
    '\t'
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            strict: false,
        }
    }
}

/// Enumeration options expressible in configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Inner search strategy.
    #[serde(default)]
    pub strategy: SearchStrategy,
    /// Outer loop ordering.
    #[serde(default)]
    pub ordering: OrderingStrategy,
}

impl SearchConfig {
    /// Converts the configuration into enumeration options.
    pub fn to_options(&self) -> EnumerationOptions {
        EnumerationOptions::default()
            .with_strategy(self.strategy)
            .with_ordering(self.ordering)
    }
}
