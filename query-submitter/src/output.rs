//! Output targets the submitter writes into.
//!
//! A target is passed to [`crate::submitter::QuerySubmitter::submit`] explicitly;
//! each write replaces the whole content.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::loading::LoadingIndicator;

/// One state of the output: a loading placeholder or a rendered response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputContent {
    Loading(LoadingIndicator),
    Rendered(String),
}

impl OutputContent {
    /// Markup form of this content.
    pub fn to_markup(&self) -> String {
        match self {
            OutputContent::Loading(indicator) => indicator.markup(),
            OutputContent::Rendered(text) => text.clone(),
        }
    }
}

/// Something whose content the submitter can replace wholesale.
pub trait OutputTarget: Send + Sync {
    /// Replaces the current content.
    fn replace(&self, content: OutputContent);
}

/// Shared in-memory output holding markup.
///
/// Clones share the same buffer, so a handle can be kept for inspection while
/// another is handed to the submitter.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    inner: Arc<Mutex<String>>,
}

impl MemoryOutput {
    /// Creates an output that initially shows `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(initial.into())),
        }
    }

    /// Current markup.
    pub fn content(&self) -> String {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, String> {
        // A panicking writer cannot leave a half-written String behind.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl OutputTarget for MemoryOutput {
    fn replace(&self, content: OutputContent) {
        *self.lock() = content.to_markup();
    }
}
