use drill_core::AttemptLog;

use crate::vm::time_fmt::format_time;

/// How many past answers the practice page lists.
pub const RECENT_ATTEMPTS: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptRowVm {
    pub prompt: String,
    pub given: String,
    pub expected: String,
    pub correct: bool,
    pub level: u8,
    pub answered_at_str: String,
}

/// Newest first, at most `limit` rows.
#[must_use]
pub fn map_recent_attempts(log: &AttemptLog, limit: usize) -> Vec<AttemptRowVm> {
    log.iter()
        .rev()
        .take(limit)
        .map(|attempt| AttemptRowVm {
            prompt: attempt.prompt.clone(),
            given: attempt.given.clone(),
            expected: attempt.expected.clone(),
            correct: attempt.correct,
            level: attempt.level,
            answered_at_str: format_time(attempt.answered_at),
        })
        .collect()
}
