use std::{fmt, str::FromStr};

use crate::{error_handler::ConfigError, loading::LoadingIndicator};

/// Behavioral revision of the query submitter.
///
/// The three revisions differ in whether the subject is sent, what is shown
/// while the request is in flight, and how the response is rendered.
///
/// # Examples
///
/// ```
/// use query_submitter::config::revision::Revision;
///
/// let rev: Revision = "highlight".parse().unwrap();
/// assert!(rev.sends_subject());
/// assert_eq!(rev.to_string(), "highlight");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Revision {
    /// Question only, no loading state, raw response.
    Plain,
    /// Subject sent, `loading...` text, empty-body fallback, bold highlighting.
    Highlight,
    /// Subject sent, spinner markup, empty-body fallback, raw response.
    #[default]
    Spinner,
}

impl Revision {
    /// Whether the `subject` form field is part of the request body.
    pub fn sends_subject(self) -> bool {
        !matches!(self, Revision::Plain)
    }

    /// What is written to the output before the response arrives.
    pub fn loading_indicator(self) -> Option<LoadingIndicator> {
        match self {
            Revision::Plain => None,
            Revision::Highlight => Some(LoadingIndicator::Text),
            Revision::Spinner => Some(LoadingIndicator::Spinner),
        }
    }

    /// Whether an empty body is replaced by the "no matches" message.
    pub fn maps_empty_body(self) -> bool {
        !matches!(self, Revision::Plain)
    }

    /// Whether occurrences of the question are wrapped in bold markup.
    pub fn highlights_question(self) -> bool {
        matches!(self, Revision::Highlight)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Revision::Plain => "plain",
            Revision::Highlight => "highlight",
            Revision::Spinner => "spinner",
        };
        f.write_str(s)
    }
}

impl FromStr for Revision {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "1" => Ok(Revision::Plain),
            "highlight" | "2" => Ok(Revision::Highlight),
            "spinner" | "3" => Ok(Revision::Spinner),
            other => Err(ConfigError::UnsupportedValue {
                var: "QUERY_REVISION",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_numbers() {
        assert_eq!("plain".parse::<Revision>().unwrap(), Revision::Plain);
        assert_eq!(" Highlight ".parse::<Revision>().unwrap(), Revision::Highlight);
        assert_eq!("3".parse::<Revision>().unwrap(), Revision::Spinner);
        assert!("fancy".parse::<Revision>().is_err());
    }

    #[test]
    fn behavior_table() {
        assert!(!Revision::Plain.sends_subject());
        assert!(Revision::Highlight.sends_subject());
        assert!(Revision::Spinner.sends_subject());

        assert_eq!(Revision::Plain.loading_indicator(), None);
        assert_eq!(
            Revision::Highlight.loading_indicator(),
            Some(LoadingIndicator::Text)
        );
        assert_eq!(
            Revision::Spinner.loading_indicator(),
            Some(LoadingIndicator::Spinner)
        );

        assert!(Revision::Highlight.highlights_question());
        assert!(!Revision::Spinner.highlights_question());
        assert!(!Revision::Plain.maps_empty_body());
    }
}
