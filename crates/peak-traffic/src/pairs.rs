//! Reduction of directed messages to mutual (undirected) pairs.

use std::collections::{BTreeMap, BTreeSet};

/// Accumulates directed messages and keeps the address pairs that have
/// written to each other in both directions.
#[derive(Debug, Clone, Default)]
pub struct MutualPairs {
    outgoing: BTreeMap<String, BTreeSet<String>>,
    mutual: BTreeSet<(String, String)>,
    records: usize,
    self_messages: usize,
    skipped: usize,
}

impl MutualPairs {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one message from `sender` to `recipient`.
    ///
    /// Returns `true` when this message completes a pair not seen before.
    /// Messages addressed to oneself are counted and otherwise ignored.
    pub fn observe(&mut self, sender: &str, recipient: &str) -> bool {
        self.records += 1;
        if sender == recipient {
            self.self_messages += 1;
            return false;
        }
        let answered = self
            .outgoing
            .get(recipient)
            .is_some_and(|targets| targets.contains(sender));
        self.outgoing
            .entry(sender.to_string())
            .or_default()
            .insert(recipient.to_string());
        if !answered {
            return false;
        }
        let pair = if sender < recipient {
            (sender.to_string(), recipient.to_string())
        } else {
            (recipient.to_string(), sender.to_string())
        };
        self.mutual.insert(pair)
    }

    /// Counts a line that could not be parsed.
    pub(crate) fn note_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Returns every mutual pair once, smaller address first.
    pub fn pairs(&self) -> impl ExactSizeIterator<Item = (&str, &str)> + '_ {
        self.mutual.iter().map(|(u, v)| (u.as_str(), v.as_str()))
    }

    /// Returns the number of mutual pairs.
    pub fn len(&self) -> usize {
        self.mutual.len()
    }

    /// Returns whether no mutual pair was found.
    pub fn is_empty(&self) -> bool {
        self.mutual.is_empty()
    }

    /// Returns the number of messages observed.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Returns the number of self-addressed messages.
    pub fn self_messages(&self) -> usize {
        self.self_messages
    }

    /// Returns the number of malformed lines skipped during ingestion.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
