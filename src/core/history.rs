//! Linear, cursor-based history of visited states.
//!
//! The history is a sequence of entries plus a cursor. Moving the cursor back and
//! forward never alters the entries; recording a new state while the cursor is
//! behind the tail discards everything after the cursor first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A state the machine was driven to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The state entered
    pub state: String,
    /// Event that caused the move, `None` for the initial entry and direct changes
    pub event: Option<String>,
    /// When the state was entered
    pub entered_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn new(state: String, event: Option<String>) -> Self {
        Self {
            state,
            event,
            entered_at: Utc::now(),
        }
    }
}

/// Ordered history of states with an undo/redo cursor.
///
/// The history is never empty and the cursor always points at an entry.
///
/// # Example
///
/// ```rust
/// use statetrail::StateHistory;
///
/// let mut history = StateHistory::new("a");
/// history.record("b", None);
/// history.record("c", Some("next".to_string()));
///
/// assert_eq!(history.current(), "c");
/// assert!(history.back());
/// assert_eq!(history.current(), "b");
///
/// // Recording after going back drops the redo branch
/// history.record("d", None);
/// assert_eq!(history.path(), vec!["a", "b", "d"]);
/// assert!(!history.forward());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct StateHistory {
    entries: Vec<HistoryEntry>,
    position: usize,
}

#[derive(Deserialize)]
struct RawHistory {
    entries: Vec<HistoryEntry>,
    position: usize,
}

impl TryFrom<RawHistory> for StateHistory {
    type Error = String;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let (len, position) = (raw.entries.len(), raw.position);
        Self::from_parts(raw.entries, position)
            .ok_or_else(|| format!("history position {position} out of range for {len} entries"))
    }
}

impl StateHistory {
    /// Create a history holding only `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![HistoryEntry::new(initial.into(), None)],
            position: 0,
        }
    }

    /// Rebuild a history from raw parts.
    ///
    /// Returns `None` if `entries` is empty or `position` is out of range.
    pub fn from_parts(entries: Vec<HistoryEntry>, position: usize) -> Option<Self> {
        if position < entries.len() {
            Some(Self { entries, position })
        } else {
            None
        }
    }

    /// Name of the state under the cursor.
    pub fn current(&self) -> &str {
        &self.current_entry().state
    }

    /// Entry under the cursor.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.entries[self.position]
    }

    /// Index of the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of recorded entries, including any redo branch.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a history holds at least its first entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All recorded entries in chronological order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// State names of all recorded entries.
    pub fn path(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.state.as_str()).collect()
    }

    /// Number of entries ahead of the cursor.
    pub fn redo_len(&self) -> usize {
        self.entries.len() - self.position - 1
    }

    /// Record a move to `state`, dropping any entries after the cursor.
    pub fn record(&mut self, state: impl Into<String>, event: Option<String>) {
        self.entries.truncate(self.position + 1);
        self.entries.push(HistoryEntry::new(state.into(), event));
        self.position = self.entries.len() - 1;
    }

    /// Whether the cursor can move back.
    pub fn can_back(&self) -> bool {
        self.position > 0
    }

    /// Whether the cursor can move forward.
    pub fn can_forward(&self) -> bool {
        self.position + 1 < self.entries.len()
    }

    /// Move the cursor back one entry. Returns `false` at the oldest entry.
    pub fn back(&mut self) -> bool {
        if !self.can_back() {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Move the cursor forward one entry. Returns `false` at the tail.
    pub fn forward(&mut self) -> bool {
        if !self.can_forward() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Move the cursor to the first entry, keeping every entry.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Drop every entry and start over from `initial`.
    pub fn clear(&mut self, initial: impl Into<String>) {
        *self = Self::new(initial);
    }
}
