//! Clipboard watcher - the poll-detect-dispatch loop.
//!
//! ## Responsibility
//!
//! The watcher is responsible for:
//!
//! - Periodically reading the platform change count via `SystemClipboardPort`
//! - Detecting new clipboard content without reading payloads on every tick
//! - Classifying new content and dispatching it to the history service
//!
//! The watcher **does not**:
//!
//! - Decide history semantics (dedup, ordering, eviction belong to the store)
//! - Render or persist anything
//! - Modify clipboard content beyond observing it
//!
//! ## Structure
//!
//! Two pollers run as independent interval tasks, one for the text/link
//! stream and one for the image stream. Each owns only its private
//! change-count baseline; nothing else is shared between them. Both may
//! fire for the same underlying clipboard change when it exposes both
//! representations; the store's dedup-by-fingerprint absorbs the collision
//! only if the fingerprints coincide, otherwise both entries are recorded,
//! which is intended: one copy action can legitimately produce a text entry
//! and an image entry.
//!
//! ## Change detection
//!
//! A tick compares the platform change count against the poller's baseline.
//! The baseline advances **unconditionally** once a difference is seen,
//! even when the representation turned out to be absent or unreadable, so
//! the same external change never re-triggers. A consequence worth knowing:
//! several clipboard writes landing between two ticks of the same poller
//! are coalesced and only the latest is observed. Polling is not a
//! delivery-guaranteed channel.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use cs_core::clipboard::RawContent;
use cs_core::config::AppConfig;
use cs_core::ports::SystemClipboardPort;

use crate::history_service::HistoryService;

/// Which clipboard representation a poller observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollKind {
    Text,
    Image,
}

impl PollKind {
    fn as_str(&self) -> &'static str {
        match self {
            PollKind::Text => "text",
            PollKind::Image => "image",
        }
    }
}

/// One polling stream over the clipboard port.
pub struct ClipboardPoller {
    kind: PollKind,
    clipboard: Arc<dyn SystemClipboardPort>,
    service: Arc<HistoryService>,
    last_change_count: u64,
}

impl ClipboardPoller {
    /// Create a poller whose baseline is the platform's current change
    /// count: content already on the clipboard at startup is recorded only
    /// after the next write.
    pub fn new(
        kind: PollKind,
        clipboard: Arc<dyn SystemClipboardPort>,
        service: Arc<HistoryService>,
    ) -> Self {
        let last_change_count = clipboard.change_count();
        Self {
            kind,
            clipboard,
            service,
            last_change_count,
        }
    }

    /// Check the clipboard once.
    ///
    /// Idempotent and side-effect free while the platform change count has
    /// not moved.
    pub async fn poll_once(&mut self) -> Result<()> {
        let current = self.clipboard.change_count();
        if current == self.last_change_count {
            return Ok(());
        }

        // Advance before reading: an absent or unreadable representation
        // must not re-trigger on the same external change.
        self.last_change_count = current;

        let raw = match self.kind {
            PollKind::Text => self.clipboard.read_text()?.map(RawContent::text),
            PollKind::Image => self.clipboard.read_image_bytes()?.map(RawContent::image),
        };

        match raw {
            Some(raw) => {
                let id = self.service.dispatch(raw).await;
                debug!(
                    stream = self.kind.as_str(),
                    change_count = current,
                    id = %id,
                    "dispatched clipboard content"
                );
            }
            None => {
                debug!(
                    stream = self.kind.as_str(),
                    change_count = current,
                    "clipboard change carried no representation for this stream"
                );
            }
        }

        Ok(())
    }

    /// Poll forever at the given interval. Read failures are logged and
    /// skipped; the next tick retries naturally.
    pub async fn run(mut self, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            if let Err(err) = self.poll_once().await {
                warn!(stream = self.kind.as_str(), error = %err, "clipboard poll failed");
            }
        }
    }
}

/// Drives both polling streams for the lifetime of the process.
pub struct ClipboardWatcher {
    text_task: JoinHandle<()>,
    image_task: JoinHandle<()>,
}

impl ClipboardWatcher {
    /// Spawn the text and image pollers on the current tokio runtime.
    pub fn spawn(
        clipboard: Arc<dyn SystemClipboardPort>,
        service: Arc<HistoryService>,
        config: &AppConfig,
    ) -> Self {
        let text = ClipboardPoller::new(PollKind::Text, clipboard.clone(), service.clone());
        let image = ClipboardPoller::new(PollKind::Image, clipboard, service);

        Self {
            text_task: tokio::spawn(text.run(config.text_poll_interval())),
            image_task: tokio::spawn(image.run(config.image_poll_interval())),
        }
    }

    /// Stop both pollers. Only meant for process shutdown; the engine
    /// defines no finer-grained cancellation contract.
    pub fn abort(&self) {
        self.text_task.abort();
        self.image_task.abort();
    }
}

impl Drop for ClipboardWatcher {
    fn drop(&mut self) {
        self.abort();
    }
}
