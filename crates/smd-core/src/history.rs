//! Linear undo/redo history for a single text value.
//!
//! Standard editor semantics: a new edit made while undone discards the redo
//! branch. Navigation (`undo`/`redo`) is a separate path from recording
//! (`set`), so moving through history can never be recorded as an edit.

/// Default cap on recorded entries. Oldest entries are evicted beyond this.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Bounded linear undo/redo log of a single text value.
///
/// Holds every recorded value in order plus a pointer to the active entry.
/// Invariants: the log is never empty (it is seeded at construction), the
/// pointer always references a valid entry, and after a recorded edit the
/// pointer sits on the tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditHistory {
    entries: Vec<String>,
    pointer: usize,
    limit: usize,
}

impl EditHistory {
    /// Create a history seeded with `seed`, capped at [`DEFAULT_HISTORY_LIMIT`].
    pub fn new(seed: &str) -> Self {
        Self::with_limit(seed, DEFAULT_HISTORY_LIMIT)
    }

    /// Create a history seeded with `seed`, keeping at most `limit` entries.
    ///
    /// `limit` is clamped to at least 2 so that one undo step survives any
    /// recorded edit.
    pub fn with_limit(seed: &str, limit: usize) -> Self {
        Self {
            entries: vec![seed.to_string()],
            pointer: 0,
            limit: limit.max(2),
        }
    }

    /// The currently active value.
    pub fn current(&self) -> &str {
        &self.entries[self.pointer]
    }

    /// Number of recorded entries (including the active one).
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Record a new value as an edit.
    ///
    /// Equal to the current value: no-op, nothing is recorded. Otherwise any
    /// redo branch past the pointer is discarded, the value is appended and
    /// becomes current. Exceeding the cap evicts the oldest entries.
    pub fn set(&mut self, value: &str) {
        if value == self.current() {
            return;
        }
        // New edit after undo: everything past the pointer is dead.
        self.entries.truncate(self.pointer + 1);
        self.entries.push(value.to_string());
        self.pointer = self.entries.len() - 1;
        self.enforce_limit();
    }

    /// Step back one entry. Returns false (and changes nothing) when already
    /// at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if self.pointer == 0 {
            return false;
        }
        self.pointer -= 1;
        true
    }

    /// Step forward one entry. Returns false (and changes nothing) when
    /// already at the newest entry.
    pub fn redo(&mut self) -> bool {
        if self.pointer + 1 >= self.entries.len() {
            return false;
        }
        self.pointer += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    pub fn can_redo(&self) -> bool {
        self.pointer + 1 < self.entries.len()
    }

    fn enforce_limit(&mut self) {
        // Only called right after an append, so the pointer is on the tail
        // and stays valid after the front is drained.
        if self.entries.len() > self.limit {
            let overflow = self.entries.len() - self.limit;
            self.entries.drain(..overflow);
            self.pointer -= overflow;
        }
    }
}
