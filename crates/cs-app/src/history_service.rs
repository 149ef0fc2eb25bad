//! History service - the single mutation boundary around the history store.
//!
//! ## Responsibility
//!
//! The service owns the [`HistoryStore`] behind a mutex and exposes the
//! contract consumed by two kinds of callers:
//!
//! - The clipboard watcher, which dispatches freshly observed content
//! - The presentation layer, which reads snapshots and triggers
//!   user-initiated actions (copy-back, remove, clear, ingest)
//!
//! Timer callbacks and user actions may run on separate tasks, so every
//! mutation is serialized through the store lock; reads return an owned,
//! consistent snapshot rather than a view into state mid-mutation. The raw
//! store is never reachable from outside this module.
//!
//! ```text
//! ClipboardPoller ──dispatch──▶ ┌────────────────┐
//!                               │ HistoryService │ ──▶ HistoryStore
//! Presentation ──snapshot/act──▶└────────────────┘
//!                      │
//!                      └──copy_to_clipboard──▶ SystemClipboardPort
//! ```

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use cs_core::clipboard::{classify, ClipboardEntry, EntryPayload, Fingerprint, RawContent};
use cs_core::config::AppConfig;
use cs_core::history::HistoryStore;
use cs_core::ids::EntryId;
use cs_core::ports::SystemClipboardPort;

/// Error type for user-initiated history actions.
#[derive(Debug, thiserror::Error)]
pub enum HistoryServiceError {
    #[error("no history entry with id {0}")]
    EntryNotFound(EntryId),

    #[error("clipboard write failed: {0}")]
    ClipboardWrite(#[source] anyhow::Error),
}

/// Shared facade over the history store and the clipboard port.
pub struct HistoryService {
    store: Mutex<HistoryStore>,
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl HistoryService {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>, config: &AppConfig) -> Self {
        let store = match config.entry_cap() {
            Some(max) => HistoryStore::with_max_entries(max),
            None => HistoryStore::new(),
        };
        Self {
            store: Mutex::new(store),
            clipboard,
        }
    }

    /// Watcher dispatch path: classify, insert-or-promote, and mark the
    /// dispatched fingerprint as the one mirroring the live clipboard.
    pub(crate) async fn dispatch(&self, raw: RawContent) -> EntryId {
        let entry = classify(raw);
        let fingerprint = entry.fingerprint.clone();
        let kind = entry.kind();

        let mut store = self.store.lock().await;
        let id = store.upsert(entry);
        store.set_active(Some(fingerprint));
        info!(id = %id, kind = %kind, total = store.len(), "dispatched clipboard change");
        id
    }

    /// Ingestion entry point for externally-sourced content (e.g.
    /// drag-and-drop). Runs the same classify → upsert path as the watcher
    /// but leaves the active marker alone: ingested content is not on the
    /// clipboard.
    pub async fn ingest(&self, raw: RawContent) -> EntryId {
        let entry = classify(raw);
        let kind = entry.kind();

        let mut store = self.store.lock().await;
        let id = store.upsert(entry);
        debug!(id = %id, kind = %kind, "ingested external content");
        id
    }

    /// Ordered view of the history, most recent first.
    pub async fn snapshot(&self) -> Vec<ClipboardEntry> {
        self.store.lock().await.snapshot()
    }

    /// Fingerprint of the entry believed to currently match live clipboard
    /// content, if any.
    pub async fn active_fingerprint(&self) -> Option<Fingerprint> {
        self.store.lock().await.active().cloned()
    }

    /// Explicitly reassign or clear the active marker. Dispatch overwrites
    /// it on the next observed change; it is never auto-expired.
    pub async fn set_active(&self, fingerprint: Option<Fingerprint>) {
        self.store.lock().await.set_active(fingerprint);
    }

    /// Delete one entry. A missing id is a no-op, not an error.
    pub async fn remove(&self, id: &EntryId) {
        self.store.lock().await.remove(id);
    }

    /// Delete all entries.
    pub async fn clear(&self) {
        self.store.lock().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    /// Copy a history entry back onto the system clipboard.
    ///
    /// The resulting platform change-count bump is observed by the watcher
    /// like any other write, which is what re-promotes the entry and marks
    /// it active.
    pub async fn copy_to_clipboard(&self, id: &EntryId) -> Result<(), HistoryServiceError> {
        // Clone the payload out so the store lock is not held across the
        // platform write.
        let payload = {
            let store = self.store.lock().await;
            store
                .get(id)
                .map(|entry| entry.payload.clone())
                .ok_or_else(|| HistoryServiceError::EntryNotFound(id.clone()))?
        };

        let result = match &payload {
            EntryPayload::Text { text } => self.clipboard.write_text(text),
            EntryPayload::Link { url } => self.clipboard.write_text(url),
            EntryPayload::Image { bytes } => self.clipboard.write_image_bytes(bytes),
        };
        result.map_err(HistoryServiceError::ClipboardWrite)?;

        info!(id = %id, kind = %payload.kind(), "copied history entry back to clipboard");
        Ok(())
    }

    /// Look up an entry's payload, for actions that serialize it elsewhere
    /// (export).
    pub(crate) async fn payload_of(&self, id: &EntryId) -> Option<EntryPayload> {
        self.store.lock().await.get(id).map(|e| e.payload.clone())
    }
}
