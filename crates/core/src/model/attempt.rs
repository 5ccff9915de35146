use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::difficulty::DifficultyChange;
use crate::topic::TopicId;

/// How many graded attempts a topic keeps.
pub const ATTEMPT_LOG_CAPACITY: usize = 50;

/// One graded submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub topic: TopicId,
    /// Level the problem was generated at.
    pub level: u8,
    pub prompt: String,
    pub given: String,
    pub expected: String,
    pub correct: bool,
    pub change: DifficultyChange,
    pub answered_at: DateTime<Utc>,
}

/// Most recent attempts, oldest first. Pushing past capacity drops the oldest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptLog {
    entries: VecDeque<Attempt>,
    capacity: usize,
}

impl Default for AttemptLog {
    fn default() -> Self {
        Self::with_capacity(ATTEMPT_LOG_CAPACITY)
    }
}

impl AttemptLog {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, attempt: Attempt) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(attempt);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Attempt> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn attempt(n: usize) -> Attempt {
        Attempt {
            topic: TopicId::Addition,
            level: 1,
            prompt: format!("q{n}"),
            given: n.to_string(),
            expected: n.to_string(),
            correct: true,
            change: DifficultyChange::Unchanged,
            answered_at: fixed_now(),
        }
    }

    #[test]
    fn drops_oldest_past_capacity() {
        let mut log = AttemptLog::default();
        for n in 0..ATTEMPT_LOG_CAPACITY + 5 {
            log.push(attempt(n));
        }
        assert_eq!(log.len(), ATTEMPT_LOG_CAPACITY);
        assert_eq!(log.iter().next().map(|a| a.prompt.as_str()), Some("q5"));
        assert_eq!(
            log.iter().next_back().map(|a| a.given.clone()),
            Some((ATTEMPT_LOG_CAPACITY + 4).to_string())
        );
    }
}
