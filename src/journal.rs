//! Bounded journal of recent gesture events.
//!
//! Keeps the last [`JOURNAL_ENTRIES`] gestures with their timestamps so the
//! firmware can dump recent input activity on demand (over the debug link,
//! or on a diagnostics screen). Oldest entries are dropped first.

use heapless::Deque;

use crate::state::GestureEvent;

/// Maximum number of journal entries to keep.
pub const JOURNAL_ENTRIES: usize = 16;

/// One journaled gesture.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GestureRecord {
    /// Poll timestamp (wrapping milliseconds) that produced the gesture.
    pub at_ms: u32,
    /// The gesture itself.
    pub event: GestureEvent,
}

/// Circular journal of the most recent gestures.
pub struct GestureJournal {
    entries: Deque<GestureRecord, JOURNAL_ENTRIES>,
}

impl GestureJournal {
    /// Create an empty journal.
    pub const fn new() -> Self {
        Self {
            entries: Deque::new(),
        }
    }

    /// Append a gesture, dropping the oldest entry if the journal is full.
    pub fn record(&mut self, at_ms: u32, event: GestureEvent) {
        let record = GestureRecord { at_ms, event };
        if self.entries.push_back(record).is_err() {
            self.entries.pop_front();
            // Cannot fail: a slot was just freed.
            let _ = self.entries.push_back(record);
        }
    }

    /// Number of journaled gestures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been journaled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent gesture, if any.
    pub fn latest(&self) -> Option<&GestureRecord> {
        self.entries.back()
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &GestureRecord> {
        self.entries.iter()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for GestureJournal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PressKind;

    #[test]
    fn test_empty_journal() {
        let journal = GestureJournal::new();
        assert!(journal.is_empty());
        assert_eq!(journal.len(), 0);
        assert!(journal.latest().is_none());
    }

    #[test]
    fn test_record_and_latest() {
        let mut journal = GestureJournal::new();
        journal.record(100, GestureEvent::Pressed(PressKind::Press));
        journal.record(600, GestureEvent::Released { held_ms: 500 });

        assert_eq!(journal.len(), 2);
        assert_eq!(
            journal.latest(),
            Some(&GestureRecord {
                at_ms: 600,
                event: GestureEvent::Released { held_ms: 500 },
            })
        );
    }

    #[test]
    fn test_overflow_drops_oldest() {
        let mut journal = GestureJournal::new();
        for i in 0..(JOURNAL_ENTRIES as u32 + 4) {
            journal.record(i * 10, GestureEvent::Pressed(PressKind::RepeatSlow));
        }
        assert_eq!(journal.len(), JOURNAL_ENTRIES);
        // The four oldest entries are gone.
        assert_eq!(journal.iter().next().unwrap().at_ms, 40);
        assert_eq!(journal.latest().unwrap().at_ms, (JOURNAL_ENTRIES as u32 + 3) * 10);
    }

    #[test]
    fn test_clear() {
        let mut journal = GestureJournal::new();
        journal.record(1, GestureEvent::Pressed(PressKind::Press));
        journal.clear();
        assert!(journal.is_empty());
    }
}
