//! Turns a `200 OK` response body into the text written to the output.

use crate::{config::revision::Revision, highlight::bold_matches};

/// Shown instead of an empty body by the highlight and spinner revisions.
pub const NO_MATCHES_MESSAGE: &str = "No matches found.";

/// Renders a successful response body according to `revision`.
///
/// - `Plain`: raw body, empty included.
/// - `Highlight`: empty → [`NO_MATCHES_MESSAGE`], else the question is bolded.
/// - `Spinner`: empty → [`NO_MATCHES_MESSAGE`], else raw body.
pub fn render_response(revision: Revision, question: &str, body: &str) -> String {
    if body.is_empty() && revision.maps_empty_body() {
        return NO_MATCHES_MESSAGE.to_string();
    }
    if revision.highlights_question() {
        return bold_matches(body, question).into_owned();
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_per_revision() {
        assert_eq!(render_response(Revision::Plain, "cats", ""), "");
        assert_eq!(
            render_response(Revision::Highlight, "cats", ""),
            "No matches found."
        );
        assert_eq!(
            render_response(Revision::Spinner, "cats", ""),
            "No matches found."
        );
    }

    #[test]
    fn only_highlight_revision_bolds() {
        let body = "Cats are great";
        assert_eq!(
            render_response(Revision::Highlight, "cats", body),
            "<b>Cats</b> are great"
        );
        assert_eq!(render_response(Revision::Spinner, "cats", body), body);
        assert_eq!(render_response(Revision::Plain, "cats", body), body);
    }

    #[test]
    fn whitespace_body_is_not_the_sentinel() {
        assert_eq!(render_response(Revision::Spinner, "cats", " "), " ");
    }
}
