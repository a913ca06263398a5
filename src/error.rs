//! Error types for the Repo Saga client
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;
use std::fmt::Display;

/// Main error type for the crate
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (preference files, directories)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// Transport or server error from the literature API.
    ///
    /// Covers connection failures, timeouts, non-success status codes and
    /// undecodable bodies. The wrapped `reqwest::Error` is kept intact.
    #[snafu(display("{operation} request failed: {source}"))]
    Request {
        operation: &'static str,
        source: reqwest::Error,
    },
}

impl Error {
    /// HTTP status of a failed API request, if the server answered
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Error::Request { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Whether an API request ran out of time
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Request { source, .. } if source.is_timeout())
    }

    /// Whether an API request failed to reach the server
    pub fn is_connect(&self) -> bool {
        matches!(self, Error::Request { source, .. } if source.is_connect())
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Log-then-forward for fallible results.
///
/// The error is reported once at error level and handed back unchanged.
pub trait LogErr {
    fn log_err(self, context: &str) -> Self;
}

impl<T, E: Display> LogErr for std::result::Result<T, E> {
    fn log_err(self, context: &str) -> Self {
        self.inspect_err(|e| tracing::error!(error = %e, context, "Operation failed"))
    }
}
