//! Configuration for the dnswatch subnet watcher.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level watch configuration.
///
/// Loaded from the `dnswatch.toml` `[watch]` section or
/// `DNSWATCH_WATCH__` environment variables; CLI flags override.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    /// Directory holding the per-subnet baseline files.
    #[serde(default = "default_settings_dir")]
    pub settings_dir: PathBuf,

    /// Per-address reverse lookup timeout in seconds.
    #[serde(default = "default_lookup_timeout")]
    pub lookup_timeout_secs: u64,

    /// Maximum reverse lookups in flight during a sweep.
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight_lookups: usize,
}

fn default_settings_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".dnswatch")
}

fn default_lookup_timeout() -> u64 {
    5
}

fn default_max_in_flight() -> usize {
    16
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            settings_dir: default_settings_dir(),
            lookup_timeout_secs: default_lookup_timeout(),
            max_in_flight_lookups: default_max_in_flight(),
        }
    }
}
