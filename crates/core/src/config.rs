//! Runtime configuration for the interactive layer.
//!
//! Loaded from an optional `harvest.toml` in the working directory; every
//! field has a default matching the page's built-in behavior, so the file
//! (and any individual key) may be absent. `HARVEST_API_URL` overrides the
//! configured API base so a dev server can be pointed at without editing
//! the file.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

/// Tuning for one search pipeline: how long to wait out a typing burst and
/// how short a query is too short to bother with.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchTuning {
    /// Debounce window in milliseconds.
    pub debounce_ms: u64,
    /// Queries whose trimmed length is at or below this never trigger a lookup.
    pub min_query_len: usize,
}

impl Default for SearchTuning {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_query_len: 2,
        }
    }
}

impl SearchTuning {
    /// Debounce window as a [`Duration`].
    pub fn wait(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// True when a trimmed query is long enough to search.
    pub fn searchable(&self, trimmed: &str) -> bool {
        trimmed.chars().count() > self.min_query_len
    }
}

/// Top-level application configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchTuning,
    /// How long a notification stays on screen, in milliseconds.
    pub notify_ttl_ms: u64,
    /// Base URL of the Harvest Calendar web API. `None` runs fully offline
    /// against the built-in dataset.
    pub api_base: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search: SearchTuning::default(),
            notify_ttl_ms: 5_000,
            api_base: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from `<root>/harvest.toml` when present, falling
    /// back to defaults. A malformed file is logged and ignored rather than
    /// aborting startup.
    pub fn load(root: &Path) -> Self {
        let path = root.join("harvest.toml");
        let mut config = match std::fs::read_to_string(&path) {
            Ok(raw) => Self::from_toml(&raw).unwrap_or_else(|e| {
                tracing::warn!("ignoring malformed {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        if let Ok(url) = std::env::var("HARVEST_API_URL") {
            if !url.trim().is_empty() {
                config.api_base = Some(url.trim().to_string());
            }
        }
        config
    }

    fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Notification lifetime as a [`Duration`].
    pub fn notify_ttl(&self) -> Duration {
        Duration::from_millis(self.notify_ttl_ms)
    }
}
