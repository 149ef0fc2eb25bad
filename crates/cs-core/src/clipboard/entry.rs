//! History entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::clipboard::Fingerprint;
use crate::ids::EntryId;

/// Entry content kind, used for logging labels and presentation filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Text,
    Link,
    Image,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Text => "text",
            EntryKind::Link => "link",
            EntryKind::Image => "image",
        }
    }
}

impl Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Entry payload: one variant per content kind, matched exhaustively
/// wherever behavior differs (copy-back serialization, export, display).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryPayload {
    /// UTF-8 text
    Text { text: String },

    /// A string that is, in its entirety, a well-formed absolute URL.
    Link { url: String },

    /// Raw encoded image bytes. Decoding to something renderable is the
    /// presentation layer's concern; malformed bytes are still a valid entry.
    Image { bytes: Vec<u8> },
}

impl EntryPayload {
    pub fn kind(&self) -> EntryKind {
        match self {
            EntryPayload::Text { .. } => EntryKind::Text,
            EntryPayload::Link { .. } => EntryKind::Link,
            EntryPayload::Image { .. } => EntryKind::Image,
        }
    }

    /// Fingerprint of this payload: the content string for text and links,
    /// a content hash for image bytes.
    pub fn fingerprint(&self) -> Fingerprint {
        match self {
            EntryPayload::Text { text } => Fingerprint::of_text(text),
            EntryPayload::Link { url } => Fingerprint::of_link(url),
            EntryPayload::Image { bytes } => Fingerprint::of_bytes(bytes),
        }
    }

    /// Size of the payload in bytes.
    pub fn size(&self) -> usize {
        match self {
            EntryPayload::Text { text } => text.len(),
            EntryPayload::Link { url } => url.len(),
            EntryPayload::Image { bytes } => bytes.len(),
        }
    }
}

/// A single item of clipboard history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClipboardEntry {
    /// Process-unique identifier, assigned at creation and never reused.
    pub id: EntryId,

    /// Timestamp of first observation. Retained across promotions.
    pub created_at: DateTime<Utc>,

    /// Content identity used for deduplication.
    pub fingerprint: Fingerprint,

    pub payload: EntryPayload,
}

impl ClipboardEntry {
    /// Create a fresh entry for a payload, deriving its fingerprint and
    /// assigning a new id and first-seen timestamp.
    pub fn new(payload: EntryPayload) -> Self {
        Self {
            id: EntryId::new(),
            created_at: Utc::now(),
            fingerprint: payload.fingerprint(),
            payload,
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.payload.kind()
    }
}

impl Display for ClipboardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ClipboardEntry[id={}, kind={}, size={}, time={}]",
            self.id,
            self.kind(),
            self.payload.size(),
            self.created_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
