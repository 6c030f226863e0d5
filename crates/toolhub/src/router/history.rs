//! Session history, modelled on the browser's `history` object.

use crate::router::AppState;

/// One history entry: the hash shown in the address bar and the state
/// snapshot pushed with it.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub hash: String,
    /// `None` for the entry the session was opened with.
    pub state: Option<AppState>,
}

/// A linear stack of entries with a cursor.
///
/// Pushing while not at the newest entry discards everything after the
/// cursor, exactly like `history.pushState`.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl History {
    /// Start a session at `initial_hash`, with no state snapshot.
    pub fn new(initial_hash: impl Into<String>) -> Self {
        History {
            entries: vec![HistoryEntry {
                hash: initial_hash.into(),
                state: None,
            }],
            index: 0,
        }
    }

    pub fn push(&mut self, hash: impl Into<String>, state: AppState) {
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry {
            hash: hash.into(),
            state: Some(state),
        });
        self.index = self.entries.len() - 1;
    }

    /// Step back one entry, returning it, or `None` at the oldest entry.
    pub fn back(&mut self) -> Option<&HistoryEntry> {
        if !self.can_go_back() {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index)
    }

    /// Step forward one entry, returning it, or `None` at the newest entry.
    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        if !self.can_go_forward() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index)
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Index of the current entry in [`History::entries`].
    pub fn position(&self) -> usize {
        self.index
    }
}
