use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use peak_core::errors::{ErrorInfo, PeakError};
use serde::{Deserialize, Serialize};

/// How the search below each root vertex is driven.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// One native call per search frame.
    #[default]
    Recursive,
    /// Heap allocated frame stack; call depth stays constant.
    ExplicitStack,
}

/// Order in which the outer loop visits root vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderingStrategy {
    /// Min-degree peeling order.
    #[default]
    Degeneracy,
    /// Single sort by full degree.
    StaticDegree,
}

impl SearchStrategy {
    fn as_str(&self) -> &'static str {
        match self {
            SearchStrategy::Recursive => "recursive",
            SearchStrategy::ExplicitStack => "explicit-stack",
        }
    }
}

impl OrderingStrategy {
    fn as_str(&self) -> &'static str {
        match self {
            OrderingStrategy::Degeneracy => "degeneracy",
            OrderingStrategy::StaticDegree => "static-degree",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OrderingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchStrategy {
    type Err = PeakError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "recursive" => Ok(SearchStrategy::Recursive),
            "explicit-stack" => Ok(SearchStrategy::ExplicitStack),
            other => Err(unknown_value("strategy", other, "recursive, explicit-stack")),
        }
    }
}

impl FromStr for OrderingStrategy {
    type Err = PeakError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "degeneracy" => Ok(OrderingStrategy::Degeneracy),
            "static-degree" => Ok(OrderingStrategy::StaticDegree),
            other => Err(unknown_value("ordering", other, "degeneracy, static-degree")),
        }
    }
}

fn unknown_value(field: &str, value: &str, accepted: &str) -> PeakError {
    PeakError::Config(
        ErrorInfo::new("invalid-config", format!("unknown {field} `{value}`"))
            .with_context("field", field)
            .with_hint(format!("expected one of: {accepted}")),
    )
}

/// Shared flag used to stop a running enumeration from another thread.
///
/// The search polls it before each root vertex and before each candidate.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Creates a flag in the non-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Options accepted by the enumeration entry points.
#[derive(Debug, Clone, Default)]
pub struct EnumerationOptions {
    /// Inner search strategy.
    pub strategy: SearchStrategy,
    /// Outer loop ordering.
    pub ordering: OrderingStrategy,
    /// Optional cancellation flag.
    pub cancel: Option<CancelFlag>,
}

impl EnumerationOptions {
    /// Sets the inner search strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the outer loop ordering.
    pub fn with_ordering(mut self, ordering: OrderingStrategy) -> Self {
        self.ordering = ordering;
        self
    }

    /// Attaches a cancellation flag.
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = Some(cancel);
        self
    }
}
