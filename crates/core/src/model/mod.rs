mod attempt;
mod ids;
mod session;

pub use attempt::{ATTEMPT_LOG_CAPACITY, Attempt, AttemptLog};
pub use ids::{ParseIdError, SessionId};
pub use session::{Feedback, PracticePhase, PracticeSession, TopicState};
