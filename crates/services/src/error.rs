//! Shared error types for the services crate.

use thiserror::Error;

use drill_core::{AnswerError, TopicId};
use storage::repository::StorageError;

/// Errors emitted by the practice services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PracticeError {
    /// The submission could not be read. Nothing changed; the user can try again.
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error("no question is waiting for an answer in {topic}")]
    NotAwaitingAnswer { topic: TopicId },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl PracticeError {
    /// True for input problems the user fixes by resubmitting.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, PracticeError::Answer(_))
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Practice(#[from] PracticeError),
}
