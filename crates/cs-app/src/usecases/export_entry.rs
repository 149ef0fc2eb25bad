//! Use case for exporting a history entry to a file.
//!
//! A pass-through byte write: UTF-8 bytes for text and links, the raw
//! encoded bytes for images. No file format is defined beyond that.

use std::path::Path;
use std::sync::Arc;

use cs_core::clipboard::EntryPayload;
use cs_core::ids::EntryId;

use crate::history_service::HistoryService;

/// Error type for export failures.
#[derive(Debug, thiserror::Error)]
pub enum ExportEntryError {
    #[error("no history entry with id {0}")]
    EntryNotFound(EntryId),

    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

/// Use case for saving an entry's payload to disk.
pub struct ExportEntryToFile {
    service: Arc<HistoryService>,
}

impl ExportEntryToFile {
    pub fn new(service: Arc<HistoryService>) -> Self {
        Self { service }
    }

    /// Write the entry's payload bytes to `path`, replacing any existing
    /// file.
    pub async fn execute(&self, id: &EntryId, path: &Path) -> Result<(), ExportEntryError> {
        let payload = self
            .service
            .payload_of(id)
            .await
            .ok_or_else(|| ExportEntryError::EntryNotFound(id.clone()))?;

        let bytes = match &payload {
            EntryPayload::Text { text } => text.as_bytes(),
            EntryPayload::Link { url } => url.as_bytes(),
            EntryPayload::Image { bytes } => bytes.as_slice(),
        };

        tokio::fs::write(path, bytes).await?;
        tracing::info!(id = %id, kind = %payload.kind(), path = %path.display(), "exported history entry");
        Ok(())
    }
}
