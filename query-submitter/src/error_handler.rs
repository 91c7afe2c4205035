//! Unified error handling for `query-submitter`.
//!
//! This module exposes a single top-level error type [`SubmitError`] for the whole
//! library and groups configuration problems in [`ConfigError`]. Failed HTTP
//! exchanges carry an [`HttpError`] with the status, URL and a short body snippet.
//!
//! All messages include the prefix `[Query Submitter]` to simplify attribution in logs.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, SubmitError>;

/// Maximum number of characters kept from an error response body.
pub const SNIPPET_MAX_CHARS: usize = 240;

/* ------------------------------------------------------------------------- */
/* Top-level error                                                           */
/* ------------------------------------------------------------------------- */

/// Top-level error for the `query-submitter` crate.
///
/// An empty response body is not an error: it is the "no results" sentinel and
/// is rendered by [`crate::render::render_response`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Configuration/validation errors (startup).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The endpoint is empty or does not use http/https.
    #[error("[Query Submitter] invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Underlying HTTP transport error, including timeouts.
    #[error("[Query Submitter] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),

    /// The server answered with anything other than `200 OK`.
    #[error("[Query Submitter] {0}")]
    HttpStatus(HttpError),
}

impl SubmitError {
    /// HTTP status of the failed exchange, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SubmitError::HttpStatus(e) => Some(e.status),
            SubmitError::HttpTransport(e) => e.status(),
            _ => None,
        }
    }
}

/// Details of a non-200 response.
#[derive(Debug, Clone)]
pub struct HttpError {
    /// HTTP status code returned by the server.
    pub status: StatusCode,
    /// Request URL.
    pub url: String,
    /// Leading part of the response body (see [`make_snippet`]).
    pub snippet: String,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} from {}: {}", self.status, self.url, self.snippet)
    }
}

/* ------------------------------------------------------------------------- */
/* Config errors                                                             */
/* ------------------------------------------------------------------------- */

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A number failed to parse (ports, timeouts).
    #[error("[Query Submitter] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `QUERY_PORT`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected u16`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g., invalid URL).
    #[error("[Query Submitter] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g., `QUERY_URL`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },

    /// An enumerated setting had an unknown value.
    #[error("[Query Submitter] unsupported value for {var}: {value}")]
    UnsupportedValue {
        /// Variable name (e.g., `QUERY_REVISION`).
        var: &'static str,
        /// The rejected value.
        value: String,
    },
}

/* ------------------------------------------------------------------------- */
/* Helpers                                                                   */
/* ------------------------------------------------------------------------- */

/// Trims a response body to at most [`SNIPPET_MAX_CHARS`] characters.
pub fn make_snippet(text: &str) -> String {
    text.trim().chars().take(SNIPPET_MAX_CHARS).collect()
}

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`SubmitError::Config`] with [`ConfigError::InvalidFormat`] when
/// the string does not start with a valid HTTP scheme.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}
