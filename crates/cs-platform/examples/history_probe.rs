//! Manual probe: watch the real clipboard and print the classified history.
//!
//! Run with `cargo run -p cs-platform --example history_probe`, then copy
//! text, links, and images; stop with Ctrl+C.

use std::time::Duration;

use anyhow::Result;
use cs_core::clipboard::{classify, RawContent};
use cs_core::history::HistoryStore;
use cs_core::ports::SystemClipboardPort;
use cs_platform::SystemClipboard;

fn main() -> Result<()> {
    let clipboard = SystemClipboard::new()?;
    let mut store = HistoryStore::new();
    let mut last_count = clipboard.change_count();

    println!("history_probe: started");
    println!("- copy text, links, or images to populate the history");
    println!("- stop: Ctrl+C");

    loop {
        std::thread::sleep(Duration::from_millis(500));

        let count = clipboard.change_count();
        if count == last_count {
            continue;
        }
        last_count = count;

        let raw = match clipboard.read_text() {
            Ok(Some(text)) => Some(RawContent::text(text)),
            Ok(None) => match clipboard.read_image_bytes() {
                Ok(bytes) => bytes.map(RawContent::image),
                Err(err) => {
                    eprintln!("image read error: {err}");
                    None
                }
            },
            Err(err) => {
                eprintln!("text read error: {err}");
                None
            }
        };

        let Some(raw) = raw else { continue };
        store.upsert(classify(raw));

        println!("\nchange #{count}: {} entries, most recent first", store.len());
        for entry in store.snapshot() {
            println!("- {entry}");
        }
    }
}
