//! Terminal output target: spinner while waiting, styled text when done.

use std::sync::Mutex;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use query_submitter::{
    OutputContent, OutputTarget,
    loading::{LOADING_TEXT, LoadingIndicator},
};

/// Writes loading states to stderr through `indicatif` and results to stdout.
pub struct TerminalOutput {
    raw: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalOutput {
    /// `raw` prints response markup verbatim instead of styling `<b>`/`<i>`.
    pub fn new(raw: bool) -> Self {
        Self {
            raw,
            spinner: Mutex::new(None),
        }
    }

    /// Freezes the current loading state on screen.
    pub fn abandon(&self) {
        if let Some(pb) = self.take_spinner() {
            pb.abandon();
        }
    }

    fn take_spinner(&self) -> Option<ProgressBar> {
        self.spinner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }

    fn start(&self, indicator: LoadingIndicator) {
        let pb = ProgressBar::new_spinner();
        match indicator {
            LoadingIndicator::Spinner => {
                pb.set_style(
                    ProgressStyle::with_template("{spinner} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_spinner())
                        .tick_chars("-\\|/ "),
                );
                pb.set_message("searching past papers");
                pb.enable_steady_tick(Duration::from_millis(80));
            }
            LoadingIndicator::Text => {
                pb.set_style(
                    ProgressStyle::with_template("{msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                pb.set_message(LOADING_TEXT);
                pb.tick();
            }
        }
        *self
            .spinner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(pb);
    }
}

impl OutputTarget for TerminalOutput {
    fn replace(&self, content: OutputContent) {
        if let Some(pb) = self.take_spinner() {
            pb.finish_and_clear();
        }
        match content {
            OutputContent::Loading(indicator) => self.start(indicator),
            OutputContent::Rendered(text) if self.raw => println!("{text}"),
            OutputContent::Rendered(text) => println!("{}", markup_to_terminal(&text)),
        }
    }
}

#[derive(Clone, Copy)]
enum Style {
    Bold,
    Italic,
}

const TAGS: [(&str, Style, bool); 4] = [
    ("<b>", Style::Bold, true),
    ("</b>", Style::Bold, false),
    ("<i>", Style::Italic, true),
    ("</i>", Style::Italic, false),
];

/// Replaces `<b>` and `<i>` markup with terminal styling.
///
/// Other text, including unknown tags, is passed through unchanged.
pub fn markup_to_terminal(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let (mut bold, mut italic) = (false, false);
    let mut rest = markup;

    while let Some(idx) = rest.find('<') {
        push_styled(&mut out, &rest[..idx], bold, italic);
        rest = &rest[idx..];

        match TAGS.iter().find(|(tag, _, _)| rest.starts_with(tag)) {
            Some((tag, style, on)) => {
                match style {
                    Style::Bold => bold = *on,
                    Style::Italic => italic = *on,
                }
                rest = &rest[tag.len()..];
            }
            None => {
                push_styled(&mut out, "<", bold, italic);
                rest = &rest[1..];
            }
        }
    }
    push_styled(&mut out, rest, bold, italic);
    out
}

fn push_styled(out: &mut String, text: &str, bold: bool, italic: bool) {
    if text.is_empty() {
        return;
    }
    let mut styled = text.normal();
    if bold {
        styled = styled.bold();
    }
    if italic {
        styled = styled.italic();
    }
    out.push_str(&styled.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test: the colored override is process-global.
    #[test]
    fn converts_tags() {
        colored::control::set_override(false);
        assert_eq!(markup_to_terminal("<b>Cats</b> are great"), "Cats are great");
        assert_eq!(
            markup_to_terminal("p1/cats.pdf - page 3 - <i>...big <b>cats</b>...</i>"),
            "p1/cats.pdf - page 3 - ...big cats..."
        );
        assert_eq!(markup_to_terminal("a < b <u>x</u>"), "a < b <u>x</u>");
        assert_eq!(markup_to_terminal("No matches found."), "No matches found.");

        colored::control::set_override(true);
        let styled = markup_to_terminal("<b>Cats</b> are great");
        assert!(styled.starts_with("\u{1b}[1mCats\u{1b}[0m"), "{styled:?}");
        assert!(styled.ends_with(" are great"), "{styled:?}");
        colored::control::unset_override();
    }
}
