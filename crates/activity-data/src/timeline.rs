//! Per-person chronological activity timelines.

use activity_core::models::{ActivityEvent, Corpus};

/// One event per record in which `person` is the sender or a recipient.
///
/// Sender and recipient membership are checked independently on the same
/// record, so a self-sent message yields exactly one event with both flags
/// set and the person as their own counterpart. Records matching neither
/// are excluded entirely, not emitted as zero-valued events. Events keep
/// corpus (input) order and are chronologically orderable by `time`.
pub fn person_timeline(corpus: &Corpus, person: &str) -> Vec<ActivityEvent> {
    let mut events = Vec::new();
    for record in corpus.records() {
        let sent = record.sender == person;
        let received = record.recipients.contains(person);
        if !sent && !received {
            continue;
        }

        events.push(ActivityEvent {
            time: record.timestamp,
            sent,
            received,
            // The counterpart is who sent the record to this person.
            counterpart: received.then(|| record.sender.clone()),
        });
    }
    events
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

    #[test]
    fn test_timeline_sent_event() {
        let corpus = corpus_of(&[(10, "alice", &["bob"])]);
        let events = person_timeline(&corpus, "alice");

        assert_eq!(events.len(), 1);
        assert!(events[0].sent);
        assert!(!events[0].received);
        assert_eq!(events[0].counterpart, None);
        assert_eq!(events[0].time.timestamp(), 10);
    }

    #[test]
    fn test_timeline_received_event_carries_counterpart() {
        let corpus = corpus_of(&[(10, "alice", &["bob"])]);
        let events = person_timeline(&corpus, "bob");

        assert_eq!(events.len(), 1);
        assert!(!events[0].sent);
        assert!(events[0].received);
        assert_eq!(events[0].counterpart.as_deref(), Some("alice"));
    }

    #[test]
    fn test_timeline_excludes_unrelated_records() {
        let corpus = corpus_of(&[(10, "alice", &["bob"]), (20, "carol", &["dave"])]);
        let events = person_timeline(&corpus, "bob");
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_timeline_self_send_yields_single_event() {
        let corpus = corpus_of(&[(10, "x", &["x"])]);
        let events = person_timeline(&corpus, "x");

        assert_eq!(events.len(), 1);
        assert!(events[0].sent);
        assert!(events[0].received);
        assert_eq!(events[0].counterpart.as_deref(), Some("x"));
    }

    #[test]
    fn test_timeline_preserves_corpus_order() {
        let corpus = corpus_of(&[
            (30, "alice", &["bob"]),
            (10, "bob", &["alice"]),
            (20, "alice", &["carol"]),
        ]);
        let events = person_timeline(&corpus, "alice");

        let times: Vec<i64> = events.iter().map(|e| e.time.timestamp()).collect();
        assert_eq!(times, vec![30, 10, 20]);
    }

    #[test]
    fn test_timeline_unknown_person_is_empty() {
        let corpus = corpus_of(&[(10, "alice", &["bob"])]);
        assert!(person_timeline(&corpus, "nobody").is_empty());
    }
}
