//! Content fingerprinting.
//!
//! A [`Fingerprint`] is the stable identity of a piece of clipboard content
//! and the sole criterion for "is this the same clipboard item", never
//! object identity, never timestamps.
//!
//! Textual content fingerprints as the content string itself: deduplication
//! of text requires an exact character match, and the string is its own
//! cheapest stable digest. Binary content fingerprints as the SHA-256 of the
//! raw bytes, so byte-identical payloads always collide and, with
//! overwhelming probability, nothing else does.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Stable identity value for clipboard content, used for deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint of plain text: the text itself.
    pub fn of_text(text: &str) -> Self {
        Self(text.to_string())
    }

    /// Fingerprint of a link: the URL string itself.
    pub fn of_link(url: &str) -> Self {
        Self(url.to_string())
    }

    /// Fingerprint of a binary payload: lowercase hex SHA-256 of the bytes.
    ///
    /// Defined for every input, including the empty slice.
    pub fn of_bytes(bytes: &[u8]) -> Self {
        let digest = Sha256::digest(bytes);
        Self(hex::encode(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
