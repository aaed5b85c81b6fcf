//! The bounded log history.

use std::collections::VecDeque;

use crate::entry::LogEntry;

/// Default number of retained entries.
pub const DEFAULT_CAPACITY: usize = 50;

/// A capacity-bounded, most-recent-first history of log entries.
///
/// Pushing beyond capacity silently evicts the oldest entry; every
/// operation is total. The buffer is an ordinary owned value: the host's
/// run loop constructs one and hands out references to whatever appends
/// or renders.
#[derive(Clone, Debug)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LogBuffer {
    /// Create a buffer with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a buffer retaining at most `capacity` entries.
    ///
    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Commit an entry as the most recent line.
    ///
    /// When the buffer is full the oldest entry is evicted first.
    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
            log::trace!("log buffer full, dropped oldest entry");
        }
        self.entries.push_front(entry);
    }

    /// Commit one unstyled line.
    pub fn log_plain(&mut self, text: impl Into<String>) {
        self.push(LogEntry::plain(text));
    }

    /// Parse `input` as markup and commit the result as one line.
    ///
    /// A rejected markup string commits an empty entry, so the failure
    /// shows up as a blank line rather than raw markup.
    pub fn log_markup(&mut self, input: &str) {
        self.push(LogEntry::markup(input));
    }

    /// Number of retained entries. Never exceeds the capacity.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been logged yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The maximum number of retained entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get an entry by index; `0` is the most recent.
    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    /// Iterate entries, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_recent_entry_is_first() {
        let mut buffer = LogBuffer::new();
        buffer.log_plain("first");
        buffer.log_plain("second");
        assert_eq!(buffer.get(0).unwrap().plain_text(), "second");
        assert_eq!(buffer.get(1).unwrap().plain_text(), "first");
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut buffer = LogBuffer::with_capacity(0);
        buffer.log_plain("a");
        buffer.log_plain("b");
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.get(0).unwrap().plain_text(), "b");
    }
}
