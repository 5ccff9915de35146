use thiserror::Error;

use crate::answer::AnswerError;
use crate::difficulty::DifficultyError;
use crate::topic::UnknownTopic;

/// Any failure the core can report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Difficulty(#[from] DifficultyError),
    #[error(transparent)]
    Topic(#[from] UnknownTopic),
}
