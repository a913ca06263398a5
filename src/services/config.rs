//! API Client Configuration

use crate::constants::{API_BASE_URL_ENV, DEFAULT_API_BASE_URL, REQUEST_TIMEOUT_MS};
use std::time::Duration;

/// Connection settings for the literature API
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Timeout applied to every request
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Create a config for an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout: Duration::from_millis(REQUEST_TIMEOUT_MS),
        }
    }

    /// Resolve the base URL from `REPO_SAGA_API_BASE_URL`
    pub fn from_env() -> Self {
        let value = std::env::var(API_BASE_URL_ENV).ok();
        let config = Self::from_override(value.as_deref());
        tracing::info!(base_url = %config.base_url, "API base URL resolved");
        config
    }

    /// Use `value` when present and non-empty, the local default otherwise
    pub fn from_override(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Absolute URL for an endpoint path such as `/generate`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
