use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

use crate::error::{ActivityError, Result};
use crate::models::EmailRecord;

// ── RawRow ────────────────────────────────────────────────────────────────────

/// The four retained fields of one CSV data row.
///
/// Produced at the ingestion boundary, which has already substituted the
/// sentinel identifiers for missing sender/recipients values and discarded
/// the trailing `topic` and `mode` columns.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub timestamp: String,
    pub message_identifier: String,
    pub sender: String,
    pub recipients: String,
}

// ── TimestampProcessor ────────────────────────────────────────────────────────

/// Converts epoch-millisecond strings into UTC timestamps.
pub struct TimestampProcessor;

impl TimestampProcessor {
    /// Parse `value` as integer epoch milliseconds, truncated to whole
    /// seconds. The division truncates: `1999` ms maps to second `1`.
    ///
    /// `row` is the 1-based data-row number carried into the error.
    pub fn parse(value: &str, row: usize) -> Result<DateTime<Utc>> {
        let parse_error = || ActivityError::TimestampParse {
            row,
            value: value.to_string(),
        };

        let millis: i64 = value.trim().parse().map_err(|_| parse_error())?;
        DateTime::from_timestamp(millis / 1000, 0).ok_or_else(parse_error)
    }
}

// ── RecordNormalizer ──────────────────────────────────────────────────────────

/// Turns one raw row into a normalized [`EmailRecord`].
pub struct RecordNormalizer;

impl RecordNormalizer {
    /// Normalize `row`; `row_number` is 1-based and only used in errors.
    ///
    /// The sender is trimmed. Recipients are split on `'|'`, each piece
    /// trimmed, and collapsed into a set so that duplicates within one
    /// message count once. Pure transform: the caller owns the corpus and
    /// appends the returned record itself.
    pub fn normalize(row: &RawRow, row_number: usize) -> Result<EmailRecord> {
        let timestamp = TimestampProcessor::parse(&row.timestamp, row_number)?;

        let recipients: BTreeSet<String> = row
            .recipients
            .split('|')
            .map(|piece| piece.trim().to_string())
            .collect();

        Ok(EmailRecord {
            timestamp,
            message_id: row.message_identifier.clone(),
            sender: row.sender.trim().to_string(),
            recipients,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
