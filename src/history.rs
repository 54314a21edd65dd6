//! Bounded history of recent activation patterns.
//!
//! The classifier records every pattern it is shown, tagged with its
//! learning iteration, so a caller can later attach a label that only
//! becomes known N steps after the pattern arrived.

use std::collections::VecDeque;

use crate::pattern::Pattern;

/// One recorded pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub iteration: i64,
    pub pattern: Pattern,
}

/// Fixed-capacity FIFO of (iteration, pattern) entries.
#[derive(Clone, Debug)]
pub struct PatternHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl PatternHistory {
    /// Create an empty history.
    ///
    /// # Panics
    /// If `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "PatternHistory capacity must be at least 1");
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest once full.
    pub fn push(&mut self, iteration: i64, pattern: Pattern) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry { iteration, pattern });
    }

    /// Pattern recorded at `iteration`, if still retained.
    ///
    /// When a caller repeated a record number, the newest entry wins.
    pub fn get(&self, iteration: i64) -> Option<&Pattern> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.iteration == iteration)
            .map(|entry| &entry.pattern)
    }

    /// Most recently recorded entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
