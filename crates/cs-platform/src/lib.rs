//! # cs-platform
//!
//! Platform adapters for ClipStash.
//!
//! This crate contains the implementations of
//! [`SystemClipboardPort`](cs_core::ports::SystemClipboardPort) that
//! interact with the operating system, plus an in-memory clipboard for
//! tests and headless runs.

pub mod adapters;
pub mod clipboard;

pub use adapters::InMemoryClipboard;
pub use clipboard::SystemClipboard;
