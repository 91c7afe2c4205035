//! Reachability probe for the search server.
//!
//! The server answers `GET /` with its home page, so a `200 OK` there means the
//! endpoint is up. [`HealthService::check`] never fails (errors map to
//! `ok = false`); [`HealthService::try_probe`] returns a strict `Result`.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error_handler::{HttpError, Result, SubmitError, make_snippet};

/// A serializable health snapshot for one endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Probed endpoint base URL.
    pub endpoint: String,
    /// Overall health flag.
    pub ok: bool,
    /// HTTP status of the probe, when the server answered.
    pub status: Option<u16>,
    /// Measured latency in milliseconds.
    pub latency_ms: u128,
    /// Short human-readable message with details.
    pub message: String,
}

impl HealthStatus {
    fn fail(
        endpoint: &str,
        status: Option<u16>,
        latency_ms: u128,
        message: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            ok: false,
            status,
            latency_ms,
            message: message.into(),
        }
    }
}

/// Health checker reusing a single HTTP client.
pub struct HealthService {
    client: reqwest::Client,
}

impl HealthService {
    /// Creates a health service with an optional client timeout (default 10 seconds).
    ///
    /// # Errors
    /// Returns [`SubmitError::HttpTransport`] if the HTTP client cannot be built.
    pub fn new(timeout_secs: Option<u64>) -> Result<Self> {
        let timeout = Duration::from_secs(timeout_secs.unwrap_or(10));
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        debug!(timeout_secs = timeout.as_secs(), "HealthService initialized");
        Ok(Self { client })
    }

    /// Probes `endpoint`, converting every failure into `ok = false`.
    pub async fn check(&self, endpoint: &str) -> HealthStatus {
        let endpoint = endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            warn!(%endpoint, "invalid endpoint (empty or missing http/https)");
            return HealthStatus::fail(endpoint, None, 0, "endpoint is empty or missing http/https");
        }

        let start = Instant::now();
        match self.try_probe(endpoint).await {
            Ok(status) => {
                info!(
                    endpoint = %status.endpoint,
                    latency_ms = status.latency_ms,
                    "health probe completed"
                );
                status
            }
            Err(err) => {
                let status = HealthStatus::fail(
                    endpoint,
                    err.status().map(|s| s.as_u16()),
                    start.elapsed().as_millis(),
                    err.to_string(),
                );
                warn!(
                    endpoint = %status.endpoint,
                    latency_ms = status.latency_ms,
                    message = %status.message,
                    "health probe failed"
                );
                status
            }
        }
    }

    /// Strict probe: `GET {endpoint}/` must answer `2xx`.
    ///
    /// # Errors
    /// - [`SubmitError::HttpStatus`] for non-2xx responses
    /// - [`SubmitError::HttpTransport`] for network failures
    pub async fn try_probe(&self, endpoint: &str) -> Result<HealthStatus> {
        let url = format!("{}/", endpoint.trim_end_matches('/'));

        let start = Instant::now();
        debug!("GET {}", url);

        let resp = self.client.get(&url).send().await?;
        let latency = start.elapsed().as_millis();

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(SubmitError::HttpStatus(HttpError {
                status,
                url,
                snippet: make_snippet(&text),
            }));
        }

        Ok(HealthStatus {
            endpoint: endpoint.to_string(),
            ok: true,
            status: Some(status.as_u16()),
            latency_ms: latency,
            message: "search server is reachable".to_string(),
        })
    }
}
