//! Monthly time-bucketing of activity events.
//!
//! Bucket keys are `"%Y-%m"` strings held in a `BTreeMap`, so series come
//! out ascending by month. Only months present in the event sequence get a
//! bucket: gaps in a person's timeline are gaps in the output series, never
//! explicit zeros. A month that does have events but none of the counted
//! kind still gets its bucket, with a zero value.

use std::collections::{BTreeMap, BTreeSet};

use activity_core::models::ActivityEvent;
use chrono::{DateTime, Utc};

// ── PersonSeries ──────────────────────────────────────────────────────────────

/// One labeled monthly series, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonSeries {
    /// Person identifier used as the series label.
    pub label: String,
    /// `(month key, count)` pairs, ascending by month.
    pub points: Vec<(String, u64)>,
}

/// Calendar-month grouping key, e.g. `"2001-09"`.
pub fn month_key(time: DateTime<Utc>) -> String {
    time.format("%Y-%m").to_string()
}

// ── Series builders ───────────────────────────────────────────────────────────

/// Number of emails sent per month present in `events`.
pub fn sent_per_month(events: &[ActivityEvent]) -> Vec<(String, u64)> {
    let mut buckets: BTreeMap<String, u64> = BTreeMap::new();
    for event in events {
        let bucket = buckets.entry(month_key(event.time)).or_default();
        if event.sent {
            *bucket += 1;
        }
    }
    buckets.into_iter().collect()
}

/// Number of distinct counterpart senders per month present in `events`.
///
/// Events where the person was not a recipient carry no counterpart and
/// contribute nothing to the distinct count.
pub fn unique_senders_per_month(events: &[ActivityEvent]) -> Vec<(String, u64)> {
    let mut buckets: BTreeMap<String, BTreeSet<&str>> = BTreeMap::new();
    for event in events {
        let senders = buckets.entry(month_key(event.time)).or_default();
        if let Some(counterpart) = &event.counterpart {
            senders.insert(counterpart.as_str());
        }
    }
    buckets
        .into_iter()
        .map(|(month, senders)| (month, senders.len() as u64))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
