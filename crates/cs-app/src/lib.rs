//! # cs-app
//!
//! Application layer for ClipStash: the clipboard watcher and the history
//! service that presentation layers talk to.
//!
//! Nothing in this crate touches the platform clipboard directly: all
//! clipboard access goes through the injected
//! [`SystemClipboardPort`](cs_core::ports::SystemClipboardPort).

pub mod history_service;
pub mod usecases;

pub use history_service::{HistoryService, HistoryServiceError};
pub use usecases::poll_clipboard::{ClipboardPoller, ClipboardWatcher, PollKind};
