//! Placeholder content shown while a request is in flight.

/// CSS class carried by the spinner container.
pub const SPINNER_CLASS: &str = "lds-spinner";
/// Number of animated segments inside the spinner.
pub const SPINNER_SEGMENTS: usize = 12;
/// Loading text of the highlight revision.
pub const LOADING_TEXT: &str = "loading...";

/// Loading placeholder written before the response arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadingIndicator {
    /// The literal text `loading...`.
    Text,
    /// A looping twelve-segment spinner built from nested elements.
    Spinner,
}

impl LoadingIndicator {
    /// Markup written into the output target.
    pub fn markup(self) -> String {
        match self {
            LoadingIndicator::Text => LOADING_TEXT.to_string(),
            LoadingIndicator::Spinner => spinner_markup(),
        }
    }
}

/// `<div class="lds-spinner">` holding twelve empty segment elements.
pub fn spinner_markup() -> String {
    let mut html = format!("<div class=\"{SPINNER_CLASS}\">");
    for _ in 0..SPINNER_SEGMENTS {
        html.push_str("<div></div>");
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_indicator() {
        assert_eq!(LoadingIndicator::Text.markup(), "loading...");
    }

    #[test]
    fn spinner_has_twelve_segments() {
        let html = LoadingIndicator::Spinner.markup();
        assert!(html.starts_with("<div class=\"lds-spinner\">"));
        assert!(html.ends_with("</div></div>"));
        assert_eq!(html.matches("<div></div>").count(), 12);
        assert_eq!(html.matches("<div").count(), 13);
        assert_eq!(html.matches("</div>").count(), 13);
    }
}
