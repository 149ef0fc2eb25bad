//! The history store.
//!
//! Owns the ordered collection of [`ClipboardEntry`] and the single "active"
//! marker, and is the only place history mutation rules live.
//!
//! ## Invariants
//!
//! - At most one entry per distinct fingerprint exists at any time.
//! - Entries are kept in insertion-recency order: the most recently
//!   observed-or-re-observed entry is last; display iteration reverses.
//!
//! The store itself is plain single-threaded state. Callers that share it
//! across tasks wrap it in a mutex; all mutation goes through the methods
//! here, never through the underlying collection.

use tracing::debug;

use crate::clipboard::{ClipboardEntry, Fingerprint};
use crate::ids::EntryId;

/// Deduplicating, order-preserving collection of clipboard history entries.
#[derive(Debug, Default)]
pub struct HistoryStore {
    /// Oldest first; the most recent entry is last.
    entries: Vec<ClipboardEntry>,

    /// Fingerprint of the entry currently mirroring live clipboard content.
    active: Option<Fingerprint>,

    /// Maximum number of entries to retain; `None` means unlimited.
    max_entries: Option<usize>,
}

impl HistoryStore {
    /// Create an empty, unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that evicts its oldest entry once `max_entries`
    /// would be exceeded by a new fingerprint.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            max_entries: (max_entries > 0).then_some(max_entries),
            ..Self::default()
        }
    }

    /// Insert-or-promote.
    ///
    /// If an entry with the same fingerprint already exists it is promoted
    /// to the most-recent position; its id, first-seen timestamp, and
    /// payload are preserved and the incoming entry is discarded. Otherwise
    /// the entry is appended as the new most-recent item.
    ///
    /// Returns the id that owns the fingerprint after the call.
    pub fn upsert(&mut self, entry: ClipboardEntry) -> EntryId {
        if let Some(pos) = self
            .entries
            .iter()
            .position(|e| e.fingerprint == entry.fingerprint)
        {
            let existing = self.entries.remove(pos);
            let id = existing.id.clone();
            debug!(id = %id, kind = %existing.kind(), "promoted existing history entry");
            self.entries.push(existing);
            return id;
        }

        if let Some(max) = self.max_entries {
            while self.entries.len() >= max {
                let evicted = self.entries.remove(0);
                debug!(id = %evicted.id, "evicted oldest history entry at capacity");
            }
        }

        let id = entry.id.clone();
        debug!(id = %id, kind = %entry.kind(), "inserted new history entry");
        self.entries.push(entry);
        id
    }

    /// Delete the entry with the given id. Silently does nothing when the
    /// id is not present.
    pub fn remove(&mut self, id: &EntryId) {
        let before = self.entries.len();
        self.entries.retain(|e| &e.id != id);
        if self.entries.len() < before {
            debug!(id = %id, "removed history entry");
        }
    }

    /// Delete all entries. The active marker is left untouched; only
    /// dispatch or an explicit [`set_active`](Self::set_active) reassigns it.
    pub fn clear(&mut self) {
        debug!(count = self.entries.len(), "cleared history");
        self.entries.clear();
    }

    /// Mark which fingerprint, if any, currently mirrors the live clipboard.
    pub fn set_active(&mut self, fingerprint: Option<Fingerprint>) {
        self.active = fingerprint;
    }

    pub fn active(&self) -> Option<&Fingerprint> {
        self.active.as_ref()
    }

    /// Owned view of the history, most recent first.
    pub fn snapshot(&self) -> Vec<ClipboardEntry> {
        self.entries.iter().rev().cloned().collect()
    }

    pub fn get(&self, id: &EntryId) -> Option<&ClipboardEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn contains_fingerprint(&self, fingerprint: &Fingerprint) -> bool {
        self.entries.iter().any(|e| &e.fingerprint == fingerprint)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
