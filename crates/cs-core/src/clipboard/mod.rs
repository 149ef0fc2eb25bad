//! Clipboard domain models.
mod classify;
mod content;
mod entry;
mod fingerprint;


pub use classify::classify;
pub use content::RawContent;
pub use entry::{ClipboardEntry, EntryKind, EntryPayload};
pub use fingerprint::Fingerprint;
