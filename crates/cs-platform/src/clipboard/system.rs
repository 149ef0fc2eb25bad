//! Real system clipboard adapter, backed by clipboard-rs.
//!
//! The port contract wants a platform change counter; clipboard-rs exposes
//! change *notifications* instead, so the adapter registers a watcher
//! handler on a dedicated thread and turns every notification into a bump
//! of an atomic counter. The engine then polls that counter exactly as it
//! would poll a native one (e.g. `NSPasteboard.changeCount`). The watch
//! thread runs for the lifetime of the process, matching the engine's
//! no-cancellation contract.
//!
//! Images are normalized to PNG bytes on read, so one copied image has one
//! stable byte representation (and therefore one fingerprint) regardless
//! of the platform's native format.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use clipboard_rs::common::RustImage;
use clipboard_rs::{
    Clipboard, ClipboardContext, ClipboardHandler, ClipboardWatcher, ClipboardWatcherContext,
    ContentFormat, RustImageData,
};

use cs_core::ports::SystemClipboardPort;

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

/// Bumps the shared change counter on every platform clipboard change,
/// including writes made by this process.
struct ChangeCountHandler {
    change_count: Arc<AtomicU64>,
}

impl ClipboardHandler for ChangeCountHandler {
    fn on_clipboard_change(&mut self) {
        let count = self.change_count.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("system clipboard changed, count={}", count);
    }
}

/// System clipboard implementation of [`SystemClipboardPort`].
pub struct SystemClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
    change_count: Arc<AtomicU64>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!("Failed to create clipboard context: {}", e))?;

        let change_count = Arc::new(AtomicU64::new(0));

        let mut watcher = ClipboardWatcherContext::new()
            .map_err(|e| anyhow!("Failed to create clipboard watcher: {}", e))?;
        watcher.add_handler(ChangeCountHandler {
            change_count: change_count.clone(),
        });

        std::thread::spawn(move || {
            log::info!("clipboard watch thread started");
            watcher.start_watch();
            log::info!("clipboard watch thread stopped");
        });

        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
            change_count,
        })
    }

    fn read_text_inner(ctx: &mut ClipboardContext) -> Result<Option<String>> {
        if !ctx.has(ContentFormat::Text) {
            return Ok(None);
        }
        map_clipboard_err(ctx.get_text()).map(Some)
    }

    fn read_image_inner(ctx: &mut ClipboardContext) -> Result<Option<Vec<u8>>> {
        if !ctx.has(ContentFormat::Image) {
            return Ok(None);
        }
        let image = map_clipboard_err(ctx.get_image())?;
        let png = map_clipboard_err(image.to_png())?;
        Ok(Some(png.get_bytes().to_vec()))
    }

    fn write_text_inner(ctx: &mut ClipboardContext, text: &str) -> Result<()> {
        map_clipboard_err(ctx.set_text(text.to_string()))
    }

    fn write_image_inner(ctx: &mut ClipboardContext, image: RustImageData) -> Result<()> {
        map_clipboard_err(ctx.set_image(image))
    }
}

impl SystemClipboardPort for SystemClipboard {
    fn change_count(&self) -> u64 {
        self.change_count.load(Ordering::SeqCst)
    }

    fn read_text(&self) -> Result<Option<String>> {
        let mut ctx = self.inner.lock().unwrap();
        Self::read_text_inner(&mut ctx)
    }

    fn read_image_bytes(&self) -> Result<Option<Vec<u8>>> {
        let mut ctx = self.inner.lock().unwrap();
        Self::read_image_inner(&mut ctx)
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let mut ctx = self.inner.lock().unwrap();
        Self::write_text_inner(&mut ctx, text)
    }

    fn write_image_bytes(&self, bytes: &[u8]) -> Result<()> {
        let image = RustImageData::from_bytes(bytes).map_err(|e| anyhow!(e))?;
        let mut ctx = self.inner.lock().unwrap();
        Self::write_image_inner(&mut ctx, image)
    }
}
