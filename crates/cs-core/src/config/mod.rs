//! Application configuration.
//!
//! Pure data: TOML → DTO mapping and defaults, no validation and no policy.
//! Poll intervals are tuning knobs, not correctness requirements: text
//! polls faster than images because image dispatch pays for hashing large
//! payloads.

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_text_poll_interval_ms() -> u64 {
    500
}

fn default_image_poll_interval_ms() -> u64 {
    1000
}

/// Engine configuration DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Poll interval of the text/link stream, in milliseconds.
    #[serde(default = "default_text_poll_interval_ms")]
    pub text_poll_interval_ms: u64,

    /// Poll interval of the image stream, in milliseconds.
    #[serde(default = "default_image_poll_interval_ms")]
    pub image_poll_interval_ms: u64,

    /// Maximum number of history entries to retain; 0 means unlimited.
    #[serde(default)]
    pub max_entries: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            text_poll_interval_ms: default_text_poll_interval_ms(),
            image_poll_interval_ms: default_image_poll_interval_ms(),
            max_entries: 0,
        }
    }
}

impl AppConfig {
    /// Parse a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn text_poll_interval(&self) -> Duration {
        Duration::from_millis(self.text_poll_interval_ms)
    }

    pub fn image_poll_interval(&self) -> Duration {
        Duration::from_millis(self.image_poll_interval_ms)
    }

    /// The capacity cap as the store understands it.
    pub fn entry_cap(&self) -> Option<usize> {
        (self.max_entries > 0).then_some(self.max_entries)
    }
}
