//! Client side of the past-paper search server.
//!
//! A [`submitter::QuerySubmitter`] posts a question (and optionally a subject)
//! as a form to the server, shows a loading placeholder in an
//! [`output::OutputTarget`], and replaces it with the rendered response.
//! Three revisions of that behavior are available through
//! [`config::revision::Revision`].

pub mod config;
pub mod error_handler;
pub mod form;
pub mod health_service;
pub mod highlight;
pub mod loading;
pub mod output;
pub mod render;
pub mod submitter;
pub mod telemetry;

pub use config::{
    response_ordering::ResponseOrdering, revision::Revision, submitter_config::SubmitterConfig,
};
pub use error_handler::{Result, SubmitError};
pub use form::QueryForm;
pub use output::{MemoryOutput, OutputContent, OutputTarget};
pub use submitter::{QuerySubmitter, SubmitOutcome};
