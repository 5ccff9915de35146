use drill_core::{TopicId, TopicState};

/// Per-topic counters for the catalogue and the practice header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeProgress {
    pub topic: TopicId,
    pub answered: u32,
    pub correct: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub level: u8,
    pub min_level: u8,
    pub max_level: u8,
}

impl PracticeProgress {
    #[must_use]
    pub fn from_state(state: &TopicState) -> Self {
        let difficulty = state.difficulty();
        Self {
            topic: state.topic(),
            answered: state.answered(),
            correct: state.correct(),
            streak: state.streak(),
            best_streak: state.best_streak(),
            level: difficulty.level(),
            min_level: difficulty.min(),
            max_level: difficulty.max(),
        }
    }

    /// Whole-number percentage of correct answers, `None` before the first answer.
    #[must_use]
    pub fn accuracy_percent(&self) -> Option<u32> {
        if self.answered == 0 {
            return None;
        }
        let percent = u64::from(self.correct) * 100 / u64::from(self.answered);
        u32::try_from(percent).ok()
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.answered > 0
    }
}
