use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Placeholder identifier substituted for a missing sender field.
pub const UNKNOWN_SENDER: &str = "unknown_sender";

/// Placeholder identifier substituted for a missing recipients field.
pub const UNKNOWN_RECIPIENTS: &str = "unknown_recipients";

/// One normalized email message read from the metadata export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRecord {
    /// UTC timestamp of the message, at second granularity.
    pub timestamp: DateTime<Utc>,
    /// Opaque message identifier; preserved but not used by aggregation.
    pub message_id: String,
    /// Normalized sender identifier.
    pub sender: String,
    /// Distinct recipient identifiers for this message. Never empty.
    pub recipients: BTreeSet<String>,
}

/// Append-only, in-memory collection of records for one run.
///
/// Owned by the caller of the ingestion stage and passed by reference into
/// every downstream aggregation.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<EmailRecord>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, preserving input row order.
    pub fn push(&mut self, record: EmailRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[EmailRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Aggregate sent/received counts for one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSummary {
    /// Person identifier (may be a sentinel placeholder).
    pub person: String,
    /// Number of records where this person is the sender.
    pub sent: u64,
    /// Number of records where this person appears among the recipients.
    /// Each record contributes at most 1, recipients being deduplicated.
    pub received: u64,
}

/// One (record, person) interaction used for timeline analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEvent {
    /// The record's timestamp.
    pub time: DateTime<Utc>,
    /// Whether the subject person sent the record.
    pub sent: bool,
    /// Whether the subject person was among the record's recipients.
    pub received: bool,
    /// The record's sender, present exactly when `received` is true.
    pub counterpart: Option<String>,
}
