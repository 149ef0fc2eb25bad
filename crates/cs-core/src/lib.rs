//! # cs-core
//!
//! Core domain models and business logic for ClipStash.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod clipboard;
pub mod config;
pub mod history;
pub mod ids;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{classify, ClipboardEntry, EntryKind, EntryPayload, Fingerprint, RawContent};
pub use config::AppConfig;
pub use history::HistoryStore;
pub use ids::EntryId;
