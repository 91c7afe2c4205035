//! The query submitter: loading state, form POST, and rendering.
//!
//! One [`QuerySubmitter`] talks to one search server:
//! - `POST {endpoint}/` with a form-urlencoded body (`user_input`, optional `subject`)
//!
//! A submission writes the revision's loading indicator into the given
//! [`OutputTarget`], waits for the response and, on `200 OK`, replaces the
//! indicator with the rendered body. Any failure leaves the output untouched
//! and is returned to the caller.
//!
//! # Examples
//!
//! ```no_run
//! use query_submitter::config::revision::Revision;
//! use query_submitter::config::submitter_config::SubmitterConfig;
//! use query_submitter::form::QueryForm;
//! use query_submitter::output::MemoryOutput;
//! use query_submitter::submitter::QuerySubmitter;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = SubmitterConfig::new("http://localhost:3000", Revision::Highlight);
//! let submitter = QuerySubmitter::new(cfg)?;
//!
//! let output = MemoryOutput::default();
//! let form = QueryForm::new("photosynthesis").with_subject("biology");
//! submitter.submit(&form, &output).await?;
//! println!("{}", output.content());
//! # Ok(()) }
//! ```

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{Duration, Instant},
};

use reqwest::{StatusCode, header};
use tracing::{debug, error, info, instrument, warn};

use crate::{
    config::{response_ordering::ResponseOrdering, submitter_config::SubmitterConfig},
    error_handler::{HttpError, Result, SubmitError, make_snippet},
    form::{FORM_CONTENT_TYPE, QueryForm},
    output::{OutputContent, OutputTarget},
    render::render_response,
};

/// Result of a submission that reached the server and got `200 OK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The rendered text was written to the output.
    Rendered(String),
    /// A newer submission exists; the response was dropped without writing.
    Stale {
        /// Generation of the dropped submission.
        generation: u64,
        /// Newest generation at the time the response arrived.
        latest: u64,
    },
}

/// Thin client for the search server.
///
/// Reuses one HTTP client and numbers every submission so that, under
/// [`ResponseOrdering::LatestSubmissionWins`], a response that arrives after a
/// newer submission started cannot overwrite it.
#[derive(Debug)]
pub struct QuerySubmitter {
    client: reqwest::Client,
    cfg: SubmitterConfig,
    url: String,
    generation: AtomicU64,
}

impl QuerySubmitter {
    /// Creates a new [`QuerySubmitter`] from the given config.
    ///
    /// # Errors
    /// - [`SubmitError::InvalidEndpoint`] if `cfg.endpoint` is empty or not http/https
    /// - [`SubmitError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: SubmitterConfig) -> Result<Self> {
        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(SubmitError::InvalidEndpoint(cfg.endpoint));
        }

        let mut builder = reqwest::Client::builder().gzip(true);
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let url = format!("{}/", endpoint.trim_end_matches('/'));

        info!(
            url = %url,
            revision = %cfg.revision,
            ordering = %cfg.ordering,
            timeout_secs = ?cfg.timeout_secs,
            "QuerySubmitter initialized"
        );

        Ok(Self {
            client,
            cfg,
            url,
            generation: AtomicU64::new(0),
        })
    }

    /// Full URL the form is posted to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Generation of the newest submission (0 before the first one).
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Exact request body sent for `form` under this submitter's revision.
    pub fn request_body(&self, form: &QueryForm) -> String {
        form.encode(self.cfg.revision.sends_subject())
    }

    /// Posts `form` once and returns the response body.
    ///
    /// # Errors
    /// - [`SubmitError::HttpStatus`] for any status other than `200 OK`
    /// - [`SubmitError::HttpTransport`] for network failures and timeouts
    #[instrument(skip_all, fields(revision = %self.cfg.revision))]
    pub async fn send(&self, form: &QueryForm) -> Result<String> {
        let started = Instant::now();
        let body = self.request_body(form);

        debug!(
            question_len = form.question.len(),
            has_subject = form.subject.is_some(),
            "POST {}", self.url
        );

        let resp = self
            .client
            .post(&self.url)
            .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                url = %self.url,
                %snippet,
                latency_ms = started.elapsed().as_millis(),
                "search server returned non-200 status"
            );

            return Err(SubmitError::HttpStatus(HttpError {
                status,
                url: self.url.clone(),
                snippet,
            }));
        }

        let text = resp.text().await?;

        info!(
            body_len = text.len(),
            latency_ms = started.elapsed().as_millis(),
            "query answered"
        );

        Ok(text)
    }

    /// Runs one full cycle: loading indicator, request, render.
    ///
    /// On failure the output keeps whatever it showed (loading indicator or
    /// earlier content) and the error is returned.
    ///
    /// # Errors
    /// Same as [`QuerySubmitter::send`].
    #[instrument(
        skip_all,
        fields(revision = %self.cfg.revision, generation = tracing::field::Empty)
    )]
    pub async fn submit(
        &self,
        form: &QueryForm,
        output: &dyn OutputTarget,
    ) -> Result<SubmitOutcome> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::Span::current().record("generation", generation);

        if let Some(indicator) = self.cfg.revision.loading_indicator() {
            output.replace(OutputContent::Loading(indicator));
        }

        let body = match self.send(form).await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "submission failed; output left unchanged");
                return Err(e);
            }
        };

        if self.is_stale(generation) {
            let latest = self.current_generation();
            warn!(generation, latest, "discarding response of superseded submission");
            return Ok(SubmitOutcome::Stale { generation, latest });
        }

        if body.is_empty() {
            debug!("empty response body: no matches");
        }

        let rendered = render_response(self.cfg.revision, &form.question, &body);
        output.replace(OutputContent::Rendered(rendered.clone()));

        Ok(SubmitOutcome::Rendered(rendered))
    }

    fn is_stale(&self, generation: u64) -> bool {
        match self.cfg.ordering {
            ResponseOrdering::LastResolvedWins => false,
            ResponseOrdering::LatestSubmissionWins => generation < self.current_generation(),
        }
    }
}
