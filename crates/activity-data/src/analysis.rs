//! Top-level report pipeline.
//!
//! Mirrors the batch flow of the tool: rank every identifier, select the
//! most prolific senders, and build each one's two monthly series, returning
//! an [`ActivityReport`] ready for the render layer.

use activity_core::models::{Corpus, PersonSummary};
use chrono::Utc;
use tracing::info;

use crate::aggregator::ActivityAggregator;
use crate::report::{sent_per_month, unique_senders_per_month, PersonSeries};
use crate::timeline::person_timeline;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the report.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ReportMetadata {
    /// ISO-8601 timestamp when this report was generated.
    pub generated_at: String,
    /// Total number of records in the corpus.
    pub records_processed: usize,
    /// Number of distinct identifiers ranked.
    pub persons_ranked: usize,
    /// Identifiers selected for the monthly charts, in rank order.
    pub top_senders: Vec<String>,
    /// Wall-clock seconds spent aggregating and bucketing.
    pub aggregate_time_seconds: f64,
}

/// The complete output of [`analyze_corpus`].
#[derive(Debug, Clone)]
pub struct ActivityReport {
    /// Ranked per-person summary table.
    pub summaries: Vec<PersonSummary>,
    /// Emails-sent-per-month, one series per selected person.
    pub sent_series: Vec<PersonSeries>,
    /// Unique-senders-per-month, one series per selected person.
    pub unique_sender_series: Vec<PersonSeries>,
    /// Metadata about this run.
    pub metadata: ReportMetadata,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full aggregation pipeline over `corpus`.
///
/// 1. Rank every identifier by emails sent.
/// 2. Select the `top_n` most prolific senders.
/// 3. Build each selected person's timeline and both monthly series.
///
/// Derived values are recomputed from the corpus on every call; the corpus
/// itself is read-only here.
pub fn analyze_corpus(corpus: &Corpus, top_n: usize) -> ActivityReport {
    let start = std::time::Instant::now();

    let summaries = ActivityAggregator::summarize(corpus);
    let top = ActivityAggregator::top_senders(&summaries, top_n);
    info!(
        "Ranked {} persons across {} records; charting top {}",
        summaries.len(),
        corpus.len(),
        top.len()
    );

    let mut sent_series = Vec::with_capacity(top.len());
    let mut unique_sender_series = Vec::with_capacity(top.len());
    for person in &top {
        let events = person_timeline(corpus, person);
        sent_series.push(PersonSeries {
            label: person.clone(),
            points: sent_per_month(&events),
        });
        unique_sender_series.push(PersonSeries {
            label: person.clone(),
            points: unique_senders_per_month(&events),
        });
    }

    let metadata = ReportMetadata {
        generated_at: Utc::now().to_rfc3339(),
        records_processed: corpus.len(),
        persons_ranked: summaries.len(),
        top_senders: top,
        aggregate_time_seconds: start.elapsed().as_secs_f64(),
    };

    ActivityReport {
        summaries,
        sent_series,
        unique_sender_series,
        metadata,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
