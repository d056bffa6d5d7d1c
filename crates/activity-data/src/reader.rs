//! CSV ingestion for the mail-activity report tool.
//!
//! Reads the six-column email metadata export, substitutes sentinel
//! identifiers for missing sender/recipients fields at this boundary, and
//! feeds each row through the record normalizer into a [`Corpus`].

use std::path::Path;

use activity_core::error::{ActivityError, Result};
use activity_core::models::{Corpus, UNKNOWN_RECIPIENTS, UNKNOWN_SENDER};
use activity_core::normalizer::{RawRow, RecordNormalizer};
use tracing::{debug, info};

/// Number of columns in the fixed input schema:
/// timestamp, message id, sender, recipients, topic, mode.
pub const EXPECTED_COLUMNS: usize = 6;

// ── Public API ────────────────────────────────────────────────────────────────

/// Read and normalize the entire export at `path` into a [`Corpus`].
///
/// The header row is consumed and discarded: columns are positional and
/// never validated by name. Any data row with the wrong column count or an
/// unparseable timestamp aborts the whole run; there is no row-level
/// skip-and-continue.
pub fn read_corpus(path: &Path) -> Result<Corpus> {
    if !path.is_file() {
        return Err(ActivityError::InputNotFound(path.to_path_buf()));
    }

    info!("Reading email metadata from {}", path.display());

    // flexible(true) so that column-count enforcement is ours, with row
    // context in the error, rather than the csv crate's.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut corpus = Corpus::new();
    for (index, result) in reader.records().enumerate() {
        let row_number = index + 1;
        let record = result?;

        if record.len() != EXPECTED_COLUMNS {
            return Err(ActivityError::SchemaMismatch {
                row: row_number,
                expected: EXPECTED_COLUMNS,
                found: record.len(),
            });
        }

        let raw = to_raw_row(&record);
        corpus.push(RecordNormalizer::normalize(&raw, row_number)?);
    }

    debug!("Normalized {} records", corpus.len());
    Ok(corpus)
}

// ── Ingestion boundary ────────────────────────────────────────────────────────

/// Extract the four retained fields of a row, substituting the sentinel
/// identifiers for empty sender/recipients values. The trailing `topic` and
/// `mode` columns are discarded here.
///
/// Substitution happens only at this boundary so the normalizer itself stays
/// free of null-handling branches.
fn to_raw_row(record: &csv::StringRecord) -> RawRow {
    let field = |index: usize| record.get(index).unwrap_or_default();

    let sender = field(2);
    let recipients = field(3);

    RawRow {
        timestamp: field(0).to_string(),
        message_identifier: field(1).to_string(),
        sender: if sender.is_empty() {
            UNKNOWN_SENDER.to_string()
        } else {
            sender.to_string()
        },
        recipients: if recipients.is_empty() {
            UNKNOWN_RECIPIENTS.to_string()
        } else {
            recipients.to_string()
        },
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
