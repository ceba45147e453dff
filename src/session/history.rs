// Bounded history of completed analyses, newest first.
//
// Capacity is fixed at 10. Inserting an 11th entry evicts the oldest —
// strict FIFO by age, not LRU: entries are never re-touched after creation.
// Only successful submissions append; clearing the session leaves history
// alone.

use std::collections::VecDeque;

use serde::Serialize;

use crate::analysis::models::AnalysisResult;

/// Maximum number of retained analyses.
pub const HISTORY_CAPACITY: usize = 10;

/// One completed analysis. Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    /// The message as it was sent for analysis.
    pub message: String,
    pub result: AnalysisResult,
    /// Capture time, RFC 3339.
    pub timestamp: String,
}

/// Recency-ordered record of the last `HISTORY_CAPACITY` analyses.
#[derive(Debug, Clone, Default, Serialize)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    /// Push a new entry to the front, evicting the oldest beyond capacity.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Newest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The most recently recorded entry.
    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Entry at `index`, 0 being the newest.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> HistoryEntry {
        HistoryEntry {
            message: message.to_string(),
            result: AnalysisResult::new(0.5, "scam".to_string(), vec![], None),
            timestamp: "2026-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn newest_entry_is_first() {
        let mut history = History::default();
        history.record(entry("first"));
        history.record(entry("second"));

        assert_eq!(history.newest().unwrap().message, "second");
        assert_eq!(history.get(1).unwrap().message, "first");
    }

    #[test]
    fn length_never_exceeds_capacity() {
        let mut history = History::default();
        for i in 0..25 {
            history.record(entry(&format!("msg-{i}")));
            assert!(history.len() <= HISTORY_CAPACITY);
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
    }

    #[test]
    fn overflow_evicts_the_oldest() {
        let mut history = History::default();
        for i in 1..=(HISTORY_CAPACITY + 1) {
            history.record(entry(&format!("msg-{i}")));
        }

        // msg-1 was the oldest and is gone; msg-2 is now the tail
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert!(history.iter().all(|e| e.message != "msg-1"));
        assert_eq!(
            history.get(HISTORY_CAPACITY - 1).unwrap().message,
            "msg-2"
        );
    }

    #[test]
    fn iteration_is_newest_first() {
        let mut history = History::default();
        for i in 1..=3 {
            history.record(entry(&format!("msg-{i}")));
        }

        let messages: Vec<&str> = history.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["msg-3", "msg-2", "msg-1"]);
    }
}
