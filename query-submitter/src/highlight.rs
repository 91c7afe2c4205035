//! Bold highlighting of the question inside a response.

use std::borrow::Cow;

use regex::{Captures, RegexBuilder};

/// Wraps every case-insensitive occurrence of `word` in `<b>` and `</b>`.
///
/// The matched text keeps its original casing. `word` is matched literally:
/// pattern metacharacters are escaped before compiling. An empty word leaves
/// the input untouched.
///
/// ```
/// use query_submitter::highlight::bold_matches;
///
/// assert_eq!(bold_matches("Cats are great", "cats"), "<b>Cats</b> are great");
/// ```
pub fn bold_matches<'a>(input: &'a str, word: &str) -> Cow<'a, str> {
    if word.is_empty() {
        return Cow::Borrowed(input);
    }

    // An escaped literal always compiles; the size limit is the only way to fail.
    let re = match RegexBuilder::new(&regex::escape(word))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!(error = %e, word_len = word.len(), "highlight pattern rejected");
            return Cow::Borrowed(input);
        }
    };

    re.replace_all(input, |caps: &Captures| format!("<b>{}</b>", &caps[0]))
}
