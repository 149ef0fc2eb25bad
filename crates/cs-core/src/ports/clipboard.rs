//! Clipboard port - abstracts platform clipboard access
//!
//! This port defines the interface for clipboard operations including
//! reading, writing, and cheap change detection, allowing the watcher and
//! the copy-back action to be exercised against a fake implementation
//! instead of the real platform clipboard.

use anyhow::Result;

/// Platform clipboard contract.
///
/// Reads are synchronous, local, best-effort: an absent representation is
/// `Ok(None)`, not an error. The change count lets callers detect new
/// content without reading (and hashing) the payload on every poll.
pub trait SystemClipboardPort: Send + Sync {
    /// Monotonically non-decreasing counter, bumped by the platform on
    /// every clipboard write, including writes made by this application's
    /// own copy-back action.
    fn change_count(&self) -> u64;

    /// Current textual content, if the clipboard holds a text
    /// representation.
    fn read_text(&self) -> Result<Option<String>>;

    /// Current image content as encoded bytes, if the clipboard holds an
    /// image representation.
    fn read_image_bytes(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the clipboard content with text.
    fn write_text(&self, text: &str) -> Result<()>;

    /// Replace the clipboard content with image bytes.
    fn write_image_bytes(&self, bytes: &[u8]) -> Result<()>;
}
