//! Parsing of single message log lines.

use peak_core::errors::ErrorInfo;
use serde::{Deserialize, Serialize};

/// One directed message between two addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Free-form timestamp column, kept verbatim.
    pub timestamp: String,
    /// Address that sent the message.
    pub sender: String,
    /// Address that received the message.
    pub recipient: String,
}

/// Parses `timestamp<delim>sender<delim>recipient`.
///
/// Trailing whitespace is stripped first and each field is trimmed. Blank
/// lines yield `Ok(None)`. Columns beyond the third are ignored.
pub fn parse_record(line: &str, delimiter: char) -> Result<Option<MessageRecord>, ErrorInfo> {
    let line = line.trim_end();
    if line.trim().is_empty() {
        return Ok(None);
    }
    let mut fields = line.split(delimiter).map(str::trim);
    let (Some(timestamp), Some(sender), Some(recipient)) =
        (fields.next(), fields.next(), fields.next())
    else {
        return Err(ErrorInfo::new(
            "malformed-line",
            "expected timestamp, sender and recipient columns",
        )
        .with_context("delimiter", format!("{delimiter:?}")));
    };
    if sender.is_empty() || recipient.is_empty() {
        return Err(ErrorInfo::new("malformed-line", "sender and recipient must not be empty"));
    }
    Ok(Some(MessageRecord {
        timestamp: timestamp.to_string(),
        sender: sender.to_string(),
        recipient: recipient.to_string(),
    }))
}
