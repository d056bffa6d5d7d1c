//! Per-person sent/received counts and the ranked summary table.

use std::collections::BTreeMap;

use activity_core::models::{Corpus, PersonSummary};

// ── ActivityAggregator ────────────────────────────────────────────────────────

/// Stateless helper that derives the ranked person summary table.
pub struct ActivityAggregator;

impl ActivityAggregator {
    /// Count sent/received per identifier across the whole corpus.
    ///
    /// Each record contributes 1 to its sender's `sent` and 1 to `received`
    /// for every distinct recipient (recipients were deduplicated at
    /// normalization). The person set is the union of all senders and all
    /// recipients ever observed.
    ///
    /// Output is sorted by `sent` descending; ties break by identifier
    /// ascending, so the ranking is deterministic for identical input.
    pub fn summarize(corpus: &Corpus) -> Vec<PersonSummary> {
        #[derive(Default)]
        struct Counts {
            sent: u64,
            received: u64,
        }

        let mut counts: BTreeMap<&str, Counts> = BTreeMap::new();
        for record in corpus.records() {
            counts.entry(record.sender.as_str()).or_default().sent += 1;
            for recipient in &record.recipients {
                counts.entry(recipient.as_str()).or_default().received += 1;
            }
        }

        let mut summaries: Vec<PersonSummary> = counts
            .into_iter()
            .map(|(person, c)| PersonSummary {
                person: person.to_string(),
                sent: c.sent,
                received: c.received,
            })
            .collect();

        // BTreeMap iteration is identifier-ascending; the stable sort keeps
        // that as the tie-break within equal `sent` counts.
        summaries.sort_by(|a, b| b.sent.cmp(&a.sent));
        summaries
    }

    /// The first `n` identifiers of the ranked table.
    pub fn top_senders(summaries: &[PersonSummary], n: usize) -> Vec<String> {
        summaries.iter().take(n).map(|s| s.person.clone()).collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use activity_core::models::EmailRecord;
    use chrono::DateTime;

    fn corpus_of(rows: &[(i64, &str, &[&str])]) -> Corpus {
        let mut corpus = Corpus::new();
        for (ts, sender, recipients) in rows {
            corpus.push(EmailRecord {
                timestamp: DateTime::from_timestamp(*ts, 0).unwrap(),
                message_id: format!("<{ts}>"),
                sender: sender.to_string(),
                recipients: recipients.iter().map(|r| r.to_string()).collect(),
            });
        }
        corpus
    }

    fn find<'a>(summaries: &'a [PersonSummary], person: &str) -> &'a PersonSummary {
        summaries
            .iter()
            .find(|s| s.person == person)
            .unwrap_or_else(|| panic!("no summary for {person}"))
    }

    #[test]
    fn test_summarize_two_row_scenario() {
        // Row1 (ts=1000000, A -> B|C), Row2 (ts=1000000000, B -> A).
        let corpus = corpus_of(&[(1000, "A", &["B", "C"]), (1_000_000, "B", &["A"])]);
        let summaries = ActivityAggregator::summarize(&corpus);

        assert_eq!(summaries.len(), 3);
        assert_eq!(find(&summaries, "A").sent, 1);
        assert_eq!(find(&summaries, "A").received, 1);
        assert_eq!(find(&summaries, "B").sent, 1);
        assert_eq!(find(&summaries, "B").received, 1);
        assert_eq!(find(&summaries, "C").sent, 0);
        assert_eq!(find(&summaries, "C").received, 1);

        // A and B tie above C; the tie breaks alphabetically.
        let ranked: Vec<&str> = summaries.iter().map(|s| s.person.as_str()).collect();
        assert_eq!(ranked, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_summarize_receive_only_and_send_only_persons() {
        let corpus = corpus_of(&[(0, "sender-only", &["receiver-only"])]);
        let summaries = ActivityAggregator::summarize(&corpus);

        assert_eq!(find(&summaries, "sender-only").received, 0);
        assert_eq!(find(&summaries, "receiver-only").sent, 0);
    }

    #[test]
    fn test_summarize_deduplicated_recipients_count_once() {
        // "a|a|b" collapses to {a, b} at normalization; received for a is 1.
        let corpus = corpus_of(&[(0, "x", &["a", "a", "b"])]);
        let summaries = ActivityAggregator::summarize(&corpus);

        assert_eq!(find(&summaries, "a").received, 1);
        assert_eq!(find(&summaries, "b").received, 1);
    }

    #[test]
    fn test_summarize_sum_invariants() {
        let corpus = corpus_of(&[
            (0, "a", &["b", "c"]),
            (1, "b", &["a"]),
            (2, "a", &["b"]),
            (3, "c", &["a", "b", "d"]),
        ]);
        let summaries = ActivityAggregator::summarize(&corpus);

        let total_sent: u64 = summaries.iter().map(|s| s.sent).sum();
        let total_received: u64 = summaries.iter().map(|s| s.received).sum();
        let total_recipients: u64 = corpus
            .records()
            .iter()
            .map(|r| r.recipients.len() as u64)
            .sum();

        assert_eq!(total_sent, corpus.len() as u64);
        assert_eq!(total_received, total_recipients);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let corpus = corpus_of(&[(0, "a", &["b"]), (1, "b", &["a", "c"]), (2, "a", &["c"])]);
        let first = ActivityAggregator::summarize(&corpus);
        let second = ActivityAggregator::summarize(&corpus);
        assert_eq!(first, second);
    }

    #[test]
    fn test_summarize_orders_by_sent_descending() {
        let corpus = corpus_of(&[
            (0, "busy", &["quiet"]),
            (1, "busy", &["quiet"]),
            (2, "busy", &["quiet"]),
            (3, "quiet", &["busy"]),
        ]);
        let summaries = ActivityAggregator::summarize(&corpus);

        let ranked: Vec<&str> = summaries.iter().map(|s| s.person.as_str()).collect();
        assert_eq!(ranked, vec!["busy", "quiet"]);
    }

    #[test]
    fn test_summarize_empty_corpus() {
        let summaries = ActivityAggregator::summarize(&Corpus::new());
        assert!(summaries.is_empty());
    }

    #[test]
    fn test_top_senders_takes_ranked_prefix() {
        let corpus = corpus_of(&[
            (0, "a", &["z"]),
            (1, "a", &["z"]),
            (2, "b", &["z"]),
            (3, "c", &["z"]),
        ]);
        let summaries = ActivityAggregator::summarize(&corpus);

        assert_eq!(
            ActivityAggregator::top_senders(&summaries, 2),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_top_senders_shorter_than_requested() {
        let corpus = corpus_of(&[(0, "only", &["other"])]);
        let summaries = ActivityAggregator::summarize(&corpus);

        let top = ActivityAggregator::top_senders(&summaries, 5);
        assert_eq!(top.len(), 2); // "only" and "other", nothing invented
    }
}
