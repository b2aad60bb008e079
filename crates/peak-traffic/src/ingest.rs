//! Streaming ingestion of message logs.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use peak_core::errors::{ErrorInfo, PeakError};
use peak_graph::{GraphConfig, UndirectedGraph};
use tracing::{debug, instrument, warn};

use crate::config::IngestConfig;
use crate::pairs::MutualPairs;
use crate::record::parse_record;

/// Reads every line of `reader` and reduces the messages to mutual pairs.
///
/// Lines are read as raw bytes, so a line that is not valid UTF-8 counts as
/// malformed rather than as a read failure. In strict mode the first
/// malformed line aborts ingestion with an `Ingest/malformed-line` error
/// carrying the 1-based line number; otherwise the line is logged and
/// skipped. Only genuine read failures surface as `Ingest/io`.
#[instrument(skip_all, fields(strict = config.strict))]
pub fn ingest_reader<R: BufRead>(
    reader: R,
    config: &IngestConfig,
) -> Result<MutualPairs, PeakError> {
    let mut pairs = MutualPairs::new();
    for (index, chunk) in reader.split(b'\n').enumerate() {
        let line_number = index + 1;
        let bytes = chunk.map_err(|err| {
            PeakError::Ingest(ErrorInfo::new("io", err.to_string()).at_line(line_number))
        })?;
        let parsed = match String::from_utf8(bytes) {
            Ok(line) => parse_record(&line, config.delimiter),
            Err(err) => Err(ErrorInfo::new(
                "malformed-line",
                format!("line is not valid UTF-8: {}", err.utf8_error()),
            )),
        };
        match parsed {
            Ok(Some(record)) => {
                pairs.observe(&record.sender, &record.recipient);
            }
            Ok(None) => {}
            Err(info) if config.strict => {
                return Err(PeakError::Ingest(info.at_line(line_number)));
            }
            Err(info) => {
                warn!(line = line_number, reason = %info.message, "skipping malformed record");
                pairs.note_skipped();
            }
        }
    }
    debug!(
        records = pairs.records(),
        mutual_pairs = pairs.len(),
        self_messages = pairs.self_messages(),
        skipped = pairs.skipped(),
        "ingested message log"
    );
    Ok(pairs)
}

/// Opens `path` and ingests it with [`ingest_reader`].
pub fn ingest_path(path: &Path, config: &IngestConfig) -> Result<MutualPairs, PeakError> {
    let file = File::open(path).map_err(|err| {
        PeakError::Ingest(
            ErrorInfo::new("io", err.to_string()).with_context("path", path.display().to_string()),
        )
    })?;
    ingest_reader(BufReader::new(file), config)
}

/// Builds the undirected graph whose edges are the mutual pairs.
pub fn build_graph(pairs: &MutualPairs) -> Result<UndirectedGraph<String>, PeakError> {
    UndirectedGraph::from_edges(
        GraphConfig::default(),
        pairs
            .pairs()
            .map(|(u, v)| (u.to_string(), v.to_string())),
    )
}
