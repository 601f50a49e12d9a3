//! Provider endpoint configuration

use std::time::Duration;

use crate::{
    error::{Result, ScoreplayError},
    API_KEY_ENV_VAR, API_URL_ENV_VAR, API_VERSION_ENV_VAR, TIMEOUT_ENV_VAR,
};

/// Public TheSportsDB endpoint.
pub const DEFAULT_API_URL: &str = "https://www.thesportsdb.com/api";
pub const DEFAULT_API_VERSION: &str = "v1";
/// TheSportsDB's free test key.
pub const DEFAULT_API_KEY: &str = "3";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how to reach TheSportsDB
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_version: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read settings from `THESPORTSDB_*` environment variables, falling
    /// back to the public endpoint and test key for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = match env_value(API_URL_ENV_VAR) {
            Some(url) => Self::new(url),
            None => Self::default(),
        };

        if let Some(version) = env_value(API_VERSION_ENV_VAR) {
            config.api_version = version;
        }
        if let Some(key) = env_value(API_KEY_ENV_VAR) {
            config.api_key = key;
        }
        if let Some(raw) = env_value(TIMEOUT_ENV_VAR) {
            let secs: u64 = raw.parse().map_err(|e| ScoreplayError::InvalidConfig {
                name: TIMEOUT_ENV_VAR.to_string(),
                message: format!("expected whole seconds, got {raw:?} ({e})"),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// `{base}/{version}/json/{key}/{endpoint}`
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}/json/{}/{}",
            self.base_url, self.api_version, self.api_key, endpoint
        )
    }
}

/// Unset and blank variables are treated the same
fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
