use crate::config::{response_ordering::ResponseOrdering, revision::Revision};

/// Default base URL of the past-paper search server.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000";

/// Configuration for a [`crate::submitter::QuerySubmitter`].
///
/// # Fields
///
/// - `endpoint`: Base URL of the search server; requests go to `{endpoint}/`.
/// - `revision`: Which submitter revision to reproduce.
/// - `timeout_secs`: Optional request timeout. `None` waits indefinitely.
/// - `ordering`: What happens when overlapping submissions resolve out of order.
///
/// # Examples
///
/// ```
/// use query_submitter::config::revision::Revision;
/// use query_submitter::config::submitter_config::SubmitterConfig;
///
/// let cfg = SubmitterConfig::new("http://localhost:3000", Revision::Highlight);
/// assert_eq!(cfg.timeout_secs, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitterConfig {
    /// Search server base URL.
    pub endpoint: String,

    /// Submitter revision (subject, loading state, rendering).
    pub revision: Revision,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,

    /// Stale-response policy.
    pub ordering: ResponseOrdering,
}

impl SubmitterConfig {
    /// Config for `endpoint` and `revision` with no timeout and the default ordering.
    pub fn new(endpoint: impl Into<String>, revision: Revision) -> Self {
        Self {
            endpoint: endpoint.into(),
            revision,
            timeout_secs: None,
            ordering: ResponseOrdering::default(),
        }
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.ordering = ordering;
        self
    }
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, Revision::default())
    }
}
