//! In-process adapters for ports.

pub mod in_memory;

pub use in_memory::InMemoryClipboard;
