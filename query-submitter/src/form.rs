//! Form fields read for one submission and their request-body encoding.

use url::form_urlencoded;

/// Form key carrying the question.
pub const QUESTION_KEY: &str = "user_input";
/// Form key carrying the optional subject.
pub const SUBJECT_KEY: &str = "subject";
/// Content type of the request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The two input values of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryForm {
    /// Free-text question. Not validated.
    pub question: String,
    /// Optional topic qualifier. `Some("")` still sends an empty `subject=`.
    pub subject: Option<String>,
}

impl QueryForm {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            subject: None,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Encodes the form as `user_input=<question>[&subject=<subject>]`.
    ///
    /// The subject is only written when `include_subject` is set and a subject
    /// is present. Values are form-urlencoded, so `&` and `=` inside a question
    /// cannot split the body.
    pub fn encode(&self, include_subject: bool) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        ser.append_pair(QUESTION_KEY, &self.question);
        if include_subject {
            if let Some(subject) = &self.subject {
                ser.append_pair(SUBJECT_KEY, subject);
            }
        }
        ser.finish()
    }
}
