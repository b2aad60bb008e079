//! Structured error types shared across peak crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload shared by every [`PeakError`] family.
///
/// `code` is the kebab-case identifier callers match on (`vertex-not-found`,
/// `malformed-line`, ...). It stays stable across releases while `message`
/// may be reworded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Kebab-case error code.
    pub code: String,
    /// Description of what went wrong.
    pub message: String,
    /// Offending vertex, log line, config field and so on, keyed by name.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Suggested correction, shown after the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a payload with no context and no hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds or replaces one context entry.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Records the 1-based input line the error refers to.
    pub fn at_line(self, line: usize) -> Self {
        self.with_context("line", line.to_string())
    }

    /// Attaches a suggested correction.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the peak engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum PeakError {
    /// Graph construction and lookup errors.
    #[error("graph: {0}")]
    Graph(ErrorInfo),
    /// Message log ingestion errors.
    #[error("ingest: {0}")]
    Ingest(ErrorInfo),
    /// Configuration loading and validation errors.
    #[error("config: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde: {0}")]
    Serde(ErrorInfo),
}

/// Renders as `[code] message (key=value, ...); hint: ...`.
impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        let mut entries = self.context.iter();
        if let Some((key, value)) = entries.next() {
            write!(f, " ({key}={value}")?;
            for (key, value) in entries {
                write!(f, ", {key}={value}")?;
            }
            f.write_str(")")?;
        }
        match &self.hint {
            Some(hint) => write!(f, "; hint: {hint}"),
            None => Ok(()),
        }
    }
}

impl PeakError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            PeakError::Graph(info)
            | PeakError::Ingest(info)
            | PeakError::Config(info)
            | PeakError::Serde(info) => info,
        }
    }

    /// Returns the stable error code of the payload.
    pub fn code(&self) -> &str {
        &self.info().code
    }
}
