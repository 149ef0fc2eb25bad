//! Raw clipboard content as handed over by adapters.

use serde::{Deserialize, Serialize};

/// Content read from the system clipboard (or an external ingestion source
/// such as drag-and-drop) before classification.
///
/// Adapters decide only *which representation* they read; link detection,
/// fingerprinting, and identity happen downstream in
/// [`classify`](crate::clipboard::classify).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawContent {
    /// UTF-8 text
    Text { text: String },

    /// Raw encoded image bytes (png, tiff, jpeg, ...)
    ImageBytes { bytes: Vec<u8> },
}

impl RawContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn image(bytes: Vec<u8>) -> Self {
        Self::ImageBytes { bytes }
    }

    /// Size of the payload as currently held in memory.
    pub fn data_len(&self) -> usize {
        match self {
            RawContent::Text { text } => text.len(),
            RawContent::ImageBytes { bytes } => bytes.len(),
        }
    }
}
