//! In-memory clipboard implementation.
//!
//! A faithful stand-in for the platform clipboard: one slot per
//! representation and an atomic change counter bumped on every write,
//! including copy-back writes made through the port. Used by tests and
//! headless runs so the engine can be exercised without a display server.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use anyhow::Result;

use cs_core::ports::SystemClipboardPort;

/// In-memory [`SystemClipboardPort`] implementation.
#[derive(Default)]
pub struct InMemoryClipboard {
    text: Mutex<Option<String>>,
    image: Mutex<Option<Vec<u8>>>,
    change_count: AtomicU64,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate one platform write that exposes both a text and an image
    /// representation of the same user action, with a single change-count bump.
    pub fn write_text_and_image(&self, text: &str, bytes: &[u8]) {
        *self.text.lock().unwrap() = Some(text.to_string());
        *self.image.lock().unwrap() = Some(bytes.to_vec());
        self.change_count.fetch_add(1, Ordering::SeqCst);
    }
}

impl SystemClipboardPort for InMemoryClipboard {
    fn change_count(&self) -> u64 {
        self.change_count.load(Ordering::SeqCst)
    }

    fn read_text(&self) -> Result<Option<String>> {
        Ok(self.text.lock().unwrap().clone())
    }

    fn read_image_bytes(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.image.lock().unwrap().clone())
    }

    fn write_text(&self, text: &str) -> Result<()> {
        // A write replaces the clipboard contents entirely.
        *self.text.lock().unwrap() = Some(text.to_string());
        *self.image.lock().unwrap() = None;
        self.change_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn write_image_bytes(&self, bytes: &[u8]) -> Result<()> {
        *self.image.lock().unwrap() = Some(bytes.to_vec());
        *self.text.lock().unwrap() = None;
        self.change_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
