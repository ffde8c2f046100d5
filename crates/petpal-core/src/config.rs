//! Configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every section and
//! field has a default, so an empty or missing file is a valid config.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default CDN prefix for sticker images.
pub const DEFAULT_STICKER_BASE_URL: &str =
    "https://cdn.jsdelivr.net/gh/twitter/twemoji@14.0.2/assets/svg/";

/// Default artificial latency before a simulated reply lands.
pub const DEFAULT_LATENCY_MS: u64 = 800;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RootConfig {
    #[serde(default)]
    pub simulator: SimulatorSettings,
    #[serde(default)]
    pub roster: RosterSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Response simulator settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SimulatorSettings {
    /// Artificial reply latency in milliseconds
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Prefix joined with a sticker file name to form its URL
    #[serde(default = "default_sticker_base_url")]
    pub sticker_base_url: String,
    /// Fixed seed for reproducible replies; entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SimulatorSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            sticker_base_url: default_sticker_base_url(),
            seed: None,
        }
    }
}

/// Initial roster settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RosterSettings {
    /// Start with the sample pets and their sample conversation
    #[serde(default = "default_true")]
    pub seed_demo_pets: bool,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            seed_demo_pets: true,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_latency_ms() -> u64 {
    DEFAULT_LATENCY_MS
}

fn default_sticker_base_url() -> String {
    DEFAULT_STICKER_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config, RootConfig::default());
        assert_eq!(config.simulator.latency(), Duration::from_millis(800));
        assert!(config.roster.seed_demo_pets);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: RootConfig = toml::from_str(
            r#"
            [simulator]
            latency_ms = 0
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(config.simulator.latency_ms, 0);
        assert_eq!(config.simulator.seed, Some(42));
        assert_eq!(config.simulator.sticker_base_url, DEFAULT_STICKER_BASE_URL);
    }
}
