use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

pub const SERVICE_ENV: &str = "SAMPLE_BRIDGE_SERVICE";
pub const LOG_ENV: &str = "SAMPLE_BRIDGE_LOG";

const DEFAULT_SERVICE: &str = "Sample";
const DEFAULT_LOG_FILTER: &str = "info";

/// Host-side settings for the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Service name web content uses to reach the sample plugin.
    pub service: String,
    /// Default `env_logger` filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            service: DEFAULT_SERVICE.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl BridgeConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Failed to parse bridge config")
    }

    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Some(service) = resolve_env(SERVICE_ENV) {
            self.service = service;
        }
        if let Some(filter) = resolve_env(LOG_ENV) {
            self.log_filter = filter;
        }
        self
    }
}

fn resolve_env(key: &str) -> Option<String> {
    let raw = std::env::var(key).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        warn!("[config] {key} is empty; keeping configured value");
        return None;
    }
    Some(trimmed.to_string())
}
