//! # Location
//!
//! The address bar the navigation store reads from and writes to.
//!
//! In a browser this would be `window.location.hash` plus the history
//! stack. [`MemoryHistory`] is the in-process version: it keeps the entry
//! list, moves a cursor on back/forward, and queues one change
//! notification per entry change, the way `hashchange` fires after the
//! hash is written.
//!
//! ```text
//! entries:  #home   #products?category=NEET   #cart
//!                                               ▲
//!                                             cursor
//! back()    → cursor moves left, change queued
//! set(...)  → forward entries dropped, new entry pushed, change queued
//! ```

use chrono::{DateTime, Utc};
use log::debug;

/// Read/write access to the current location fragment.
pub trait Location {
    /// Current fragment, including the leading `#` when one is set.
    fn fragment(&self) -> String;

    /// Replace the current fragment. Implementations that keep history
    /// push a new entry.
    fn set_fragment(&mut self, fragment: &str);
}

/// One visited location.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub fragment: String,
    pub visited_at: DateTime<Utc>,
}

/// In-memory browser history with `hashchange`-style notifications.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    pending_changes: usize,
    limit: Option<usize>,
}

impl MemoryHistory {
    /// Starts with a single entry at `initial`.
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![HistoryEntry {
                fragment: normalize(initial),
                visited_at: Utc::now(),
            }],
            cursor: 0,
            pending_changes: 0,
            limit: None,
        }
    }

    /// Caps the number of kept entries; the oldest are evicted first.
    /// A limit of zero is treated as one.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit.max(1));
        self.enforce_limit();
        self
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Step one entry back. Returns `false` when already at the oldest entry.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.go(self.cursor - 1)
    }

    /// Step one entry forward. Returns `false` at the newest entry.
    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.go(self.cursor + 1)
    }

    /// Jump to an entry by index without altering the entry list.
    pub fn go(&mut self, index: usize) -> bool {
        if index >= self.entries.len() || index == self.cursor {
            return false;
        }
        let previous = self.current_fragment().to_string();
        self.cursor = index;
        debug!("History moved to entry {} ({})", index, self.current_fragment());
        if previous != self.current_fragment() {
            self.pending_changes += 1;
        }
        true
    }

    /// Number of change notifications not yet delivered.
    pub fn pending_changes(&self) -> usize {
        self.pending_changes
    }

    /// Consume one pending change notification, if any.
    pub fn take_change(&mut self) -> bool {
        if self.pending_changes == 0 {
            return false;
        }
        self.pending_changes -= 1;
        true
    }

    fn current_fragment(&self) -> &str {
        &self.entries[self.cursor].fragment
    }

    fn enforce_limit(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        if self.entries.len() > limit {
            let excess = self.entries.len() - limit;
            self.entries.drain(..excess);
            self.cursor = self.cursor.saturating_sub(excess);
        }
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("")
    }
}

impl Location for MemoryHistory {
    fn fragment(&self) -> String {
        self.current_fragment().to_string()
    }

    fn set_fragment(&mut self, fragment: &str) {
        let fragment = normalize(fragment);
        // An identical hash produces no entry and no notification.
        if fragment == self.current_fragment() {
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry {
            fragment,
            visited_at: Utc::now(),
        });
        self.cursor = self.entries.len() - 1;
        self.enforce_limit();
        self.pending_changes += 1;
    }
}

/// Store fragments with exactly one leading `#`, or empty.
fn normalize(fragment: &str) -> String {
    let bare = fragment.strip_prefix('#').unwrap_or(fragment);
    if bare.is_empty() {
        String::new()
    } else {
        format!("#{}", bare)
    }
}
