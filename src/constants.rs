//! Client Constants
//!
//! Centralized constants for locale handling and the literature API.

/// Application identifiers used to resolve platform directories
pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "repo-saga";
pub const APP_NAME: &str = "repo-saga";

/// Preference file stored in the configuration directory
pub const PREFERENCES_FILE: &str = "repo-saga.toml";

/// Preference key holding the active language code
pub const LOCALE_STORAGE_KEY: &str = "lang";

/// Language used when no preference is stored
pub const DEFAULT_LOCALE: &str = "en";

/// Environment variable overriding the API base URL
pub const API_BASE_URL_ENV: &str = "REPO_SAGA_API_BASE_URL";

/// Local development endpoint
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Request timeout; generation runs for a long time on the server
pub const REQUEST_TIMEOUT_MS: u64 = 120_000;

/// Log file prefix for the rolling appender
pub const LOG_FILE_PREFIX: &str = "repo-saga.log";
