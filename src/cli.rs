use clap::Parser;
use query_submitter::{ResponseOrdering, Revision, SubmitterConfig};

/// Search the past papers for a question.
#[derive(Debug, Parser)]
#[command(name = "paper-finder", version, about)]
pub struct Args {
    /// Question to search for.
    #[arg(required_unless_present = "check")]
    pub question: Option<String>,

    /// Subject directory to search in.
    #[arg(short, long)]
    pub subject: Option<String>,

    /// Submitter revision: plain, highlight or spinner.
    #[arg(short, long)]
    pub revision: Option<Revision>,

    /// Search server base URL (overrides QUERY_URL / QUERY_PORT).
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Which response may write when submissions overlap: latest or last-resolved.
    #[arg(long)]
    pub ordering: Option<ResponseOrdering>,

    /// Print the response markup verbatim.
    #[arg(long)]
    pub raw: bool,

    /// Probe the search server instead of submitting a question.
    #[arg(long)]
    pub check: bool,

    /// Debug logging for the submitter.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Overlays command-line values on a config loaded from the environment.
    pub fn apply(&self, mut cfg: SubmitterConfig) -> SubmitterConfig {
        if let Some(endpoint) = &self.endpoint {
            cfg.endpoint = endpoint.clone();
        }
        if let Some(revision) = self.revision {
            cfg.revision = revision;
        }
        if let Some(ordering) = self.ordering {
            cfg.ordering = ordering;
        }
        if let Some(secs) = self.timeout {
            cfg.timeout_secs = Some(secs);
        }
        cfg
    }
}
