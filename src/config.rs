//! Client configuration: API base URL and HTTP timeouts.
//!
//! Values come from built-in defaults, optionally a JSON file, then
//! environment variables:
//! ```json
//! {
//!   "base_url": "https://api.usaspending.gov/api/v2",
//!   "timeout_secs": 30,
//!   "connect_timeout_secs": 10
//! }
//! ```

use crate::error::{MetricsError, Result};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.usaspending.gov/api/v2";

pub const ENV_BASE_URL: &str = "USASPENDING_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "USASPENDING_TIMEOUT_SECS";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "USASPENDING_CONNECT_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl ClientConfig {
    /// Loads the config from a JSON file at `path`. Missing fields keep their defaults.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MetricsError::Config(format!("cannot read '{path}': {e}")))?;
        serde_json::from_str(&content)
            .map_err(|e| MetricsError::Config(format!("cannot parse '{path}': {e}")))
    }

    /// Defaults overridden by the `USASPENDING_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, which maps a variable name to its value.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = parse_secs(ENV_TIMEOUT_SECS, &secs)?;
        }
        if let Some(secs) = lookup(ENV_CONNECT_TIMEOUT_SECS) {
            self.connect_timeout_secs = parse_secs(ENV_CONNECT_TIMEOUT_SECS, &secs)?;
        }
        Ok(self)
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

fn parse_secs(name: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| MetricsError::Config(format!("{name} must be a whole number of seconds, got '{value}'")))
}
