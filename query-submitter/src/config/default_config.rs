//! Submitter config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `QUERY_URL` or `QUERY_PORT` = search server endpoint
//!   (default `http://localhost:3000`)
//! - `QUERY_REVISION`            = `plain`, `highlight` or `spinner` (default `spinner`)
//! - `QUERY_TIMEOUT_SECS`        = optional request timeout (u64)
//! - `QUERY_ORDERING`            = `latest` or `last-resolved` (default `latest`)

use crate::{
    config::submitter_config::{DEFAULT_ENDPOINT, SubmitterConfig},
    error_handler::{ConfigError, Result, validate_http_endpoint},
};

/// Builds a [`SubmitterConfig`] from the process environment.
///
/// # Errors
/// See [`config_from_lookup`].
pub fn config_from_env() -> Result<SubmitterConfig> {
    config_from_lookup(|name| std::env::var(name).ok())
}

/// Builds a [`SubmitterConfig`] from an arbitrary variable lookup.
///
/// Unset and blank values are treated the same.
///
/// # Errors
///
/// - [`ConfigError::InvalidFormat`] if `QUERY_URL` has no http/https scheme
/// - [`ConfigError::InvalidNumber`] if `QUERY_PORT` or `QUERY_TIMEOUT_SECS` is invalid
/// - [`ConfigError::UnsupportedValue`] for an unknown revision or ordering
pub fn config_from_lookup<F>(lookup: F) -> Result<SubmitterConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let endpoint = endpoint(&get)?;

    let mut cfg = SubmitterConfig::new(endpoint, Default::default());

    if let Some(rev) = get("QUERY_REVISION") {
        cfg.revision = rev.parse()?;
    }
    if let Some(ordering) = get("QUERY_ORDERING") {
        cfg.ordering = ordering.parse()?;
    }
    if let Some(timeout) = get("QUERY_TIMEOUT_SECS") {
        let secs = timeout
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidNumber {
                var: "QUERY_TIMEOUT_SECS",
                reason: "expected u64",
            })?;
        cfg.timeout_secs = Some(secs);
    }

    Ok(cfg)
}

/// Resolves the endpoint.
///
/// Precedence:
/// 1. `QUERY_URL` if present and non-empty
/// 2. `QUERY_PORT` → `http://localhost:{port}`
/// 3. [`DEFAULT_ENDPOINT`]
fn endpoint<G>(get: &G) -> Result<String>
where
    G: Fn(&str) -> Option<String>,
{
    if let Some(url) = get("QUERY_URL") {
        let url = url.trim().to_string();
        validate_http_endpoint("QUERY_URL", &url)?;
        return Ok(url);
    }
    if let Some(port) = get("QUERY_PORT") {
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidNumber {
                var: "QUERY_PORT",
                reason: "expected u16 (1..=65535)",
            })?;
        return Ok(format!("http://localhost:{port}"));
    }
    Ok(DEFAULT_ENDPOINT.to_string())
}
