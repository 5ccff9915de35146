#![forbid(unsafe_code)]

pub mod answer;
pub mod difficulty;
pub mod error;
pub mod explain;
pub mod grade;
pub mod model;
pub mod number;
pub mod problem;
pub mod time;
pub mod topic;
pub mod topics;
pub mod visual;

pub use answer::{AnswerError, Response};
pub use difficulty::{AdaptiveDifficulty, DifficultyChange, DifficultyError};
pub use error::Error;
pub use explain::Explanation;
pub use grade::{Assessment, StepResult, Tolerance};
pub use model::{
    Attempt, AttemptLog, Feedback, PracticePhase, PracticeSession, SessionId, TopicState,
};
pub use number::{Decimal, Fraction};
pub use problem::{Exercise, Problem};
pub use time::Clock;
pub use topic::{Category, TopicId, TopicInfo, UnknownTopic};
pub use visual::{InputKind, Visual};
