//! Configuration file handling for saving and loading calctui settings.
//!
//! Settings are stored as JSON. Every field has a default, so a partial file
//! (or an empty object) is a valid configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

/// Accepted range for the input poll interval, in milliseconds
pub const POLL_INTERVAL_RANGE: RangeInclusive<u64> = 10..=1000;

/// Application settings that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How long the event loop waits for input before redrawing
    pub poll_interval_ms: u64,
    /// Draw the clickable keypad below the display
    pub show_keypad: bool,
    /// Capture mouse clicks on the keypad
    pub mouse_support: bool,
    /// Treat `,` as a decimal point (for numeric keypads with a comma key)
    pub comma_decimal: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 50,
            show_keypad: true,
            mouse_support: true,
            comma_decimal: true,
        }
    }
}

impl AppConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !POLL_INTERVAL_RANGE.contains(&self.poll_interval_ms) {
            anyhow::bail!(
                "poll_interval_ms must be between {} and {} (got {})",
                POLL_INTERVAL_RANGE.start(),
                POLL_INTERVAL_RANGE.end(),
                self.poll_interval_ms
            );
        }

        if self.mouse_support && !self.show_keypad {
            anyhow::bail!("mouse_support requires show_keypad (there is nothing to click)");
        }

        Ok(())
    }
}
