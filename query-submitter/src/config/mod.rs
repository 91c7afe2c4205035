pub mod default_config;
pub mod response_ordering;
pub mod revision;
pub mod submitter_config;
