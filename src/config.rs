//! Client configuration and API key loading.

use std::fmt;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

use crate::error::{DriveError, Result};

/// Base URL for Google Drive API v3.
pub const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "DRIVE_API_KEY";

/// Google API key used for link-shared folders.
///
/// Always trimmed and non-empty. `Debug` never prints the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` when the key is blank.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Read the key from `DRIVE_API_KEY`. Unset or blank gives `None`.
    pub fn from_env() -> Option<Self> {
        std::env::var(API_KEY_ENV).ok().and_then(Self::new)
    }

    /// Read the key from the first non-blank line of a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        content
            .lines()
            .find_map(Self::new)
            .ok_or(DriveError::MissingApiKey)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Settings for [`DriveFolderClient`](crate::client::DriveFolderClient).
///
/// The defaults match plain, unbounded behaviour: no cap on concurrent
/// content fetches and no request timeout.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: Option<ApiKey>,
    pub api_base: String,
    pub concurrency_limit: Option<NonZeroUsize>,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DRIVE_API_BASE.to_string(),
            concurrency_limit: None,
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Default settings with the key taken from `DRIVE_API_KEY`.
    pub fn from_env() -> Self {
        Self::default().with_api_key(ApiKey::from_env())
    }

    pub fn with_api_key(mut self, api_key: Option<ApiKey>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Point the client at another API root, e.g. a mock server.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_concurrency_limit(mut self, limit: Option<NonZeroUsize>) -> Self {
        self.concurrency_limit = limit;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.api_base.is_empty() {
            return Err(DriveError::InvalidConfig("API base URL is empty".to_string()));
        }
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(DriveError::InvalidConfig("timeout must be non-zero".to_string()));
        }
        Ok(())
    }
}
