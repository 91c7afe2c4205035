use std::{fmt, str::FromStr};

use crate::error_handler::ConfigError;

/// Decides which completion may write the output when submissions overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseOrdering {
    /// Only the newest submission may write; older completions are stale.
    #[default]
    LatestSubmissionWins,
    /// Every completion writes, so the last one to resolve wins.
    LastResolvedWins,
}

impl fmt::Display for ResponseOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseOrdering::LatestSubmissionWins => f.write_str("latest"),
            ResponseOrdering::LastResolvedWins => f.write_str("last-resolved"),
        }
    }
}

impl FromStr for ResponseOrdering {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latest" | "latest-submission" => Ok(ResponseOrdering::LatestSubmissionWins),
            "last-resolved" | "last_resolved" => Ok(ResponseOrdering::LastResolvedWins),
            other => Err(ConfigError::UnsupportedValue {
                var: "QUERY_ORDERING",
                value: other.to_string(),
            }),
        }
    }
}
