//! Configuration structures
//!
//! Every field has a default so that partial config files deserialize. The
//! API key is the only value without a usable default and is checked by
//! [`AppConfig::validate`].

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_RETRYABLE_STATUSES, DEFAULT_SITE_ID,
    DEFAULT_START_DATE, MISSING_API_KEY_MESSAGE,
};
use crate::errors::{OutageSyncError, Result};
use crate::types::parse_timestamp;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub retry: RetryConfig,
    pub run: RunSettings,
}

/// Remote API connection settings
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), api_key: None }
    }
}

// Keeps the key out of debug output and logs.
impl std::fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Immediate-retry policy for transient HTTP statuses.
///
/// A request is resent while its status is in `retryable_statuses` and fewer
/// than `max_retries` retries have been made, so at most `max_retries + 1`
/// requests are issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            retryable_statuses: DEFAULT_RETRYABLE_STATUSES.to_vec(),
        }
    }
}

impl RetryConfig {
    /// Whether a response with `status` should be resent.
    pub fn is_retryable(&self, status: u16) -> bool {
        self.retryable_statuses.contains(&status)
    }
}

/// Parameters of a single sync run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    pub site_id: String,
    /// Inclusive ISO 8601 lower bound on outage `begin`
    pub start_date: String,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self { site_id: DEFAULT_SITE_ID.to_string(), start_date: DEFAULT_START_DATE.to_string() }
    }
}

impl AppConfig {
    /// The configured API key.
    ///
    /// # Errors
    /// Returns `OutageSyncError::Config` if no non-empty key is set.
    pub fn api_key(&self) -> Result<&str> {
        match self.api.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(OutageSyncError::Config(MISSING_API_KEY_MESSAGE.to_string())),
        }
    }

    /// Check every value needed for a run.
    ///
    /// # Errors
    /// Returns `OutageSyncError::Config` describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        self.api_key()?;

        url::Url::parse(&self.api.base_url).map_err(|e| {
            OutageSyncError::Config(format!("Invalid base URL '{}': {}", self.api.base_url, e))
        })?;

        parse_timestamp(&self.run.start_date)
            .map_err(|e| OutageSyncError::Config(format!("Invalid start date: {e}")))?;

        if self.run.site_id.trim().is_empty() {
            return Err(OutageSyncError::Config("Site id must not be empty".to_string()));
        }

        if let Some(status) =
            self.retry.retryable_statuses.iter().find(|s| !(100..=599).contains(*s))
        {
            return Err(OutageSyncError::Config(format!("Invalid retryable status: {status}")));
        }

        Ok(())
    }
}
