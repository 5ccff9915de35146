use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::difficulty::{AdaptiveDifficulty, DifficultyChange};
use crate::explain::Explanation;
use crate::grade::Assessment;
use crate::model::attempt::{Attempt, AttemptLog};
use crate::model::ids::SessionId;
use crate::problem::{Exercise, Problem};
use crate::topic::TopicId;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Outcome shown after a graded submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub assessment: Assessment,
    pub explanation: Explanation,
    pub change: DifficultyChange,
    /// Level after the change was applied.
    pub level: u8,
}

/// Where a topic is in the question cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PracticePhase {
    #[default]
    NoQuestion,
    AwaitingAnswer {
        problem: Problem,
    },
    ShowingFeedback {
        problem: Problem,
        feedback: Feedback,
    },
}

impl PracticePhase {
    #[must_use]
    pub fn problem(&self) -> Option<&Problem> {
        match self {
            PracticePhase::NoQuestion => None,
            PracticePhase::AwaitingAnswer { problem }
            | PracticePhase::ShowingFeedback { problem, .. } => Some(problem),
        }
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        match self {
            PracticePhase::ShowingFeedback { feedback, .. } => Some(feedback),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_awaiting_answer(&self) -> bool {
        matches!(self, PracticePhase::AwaitingAnswer { .. })
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            PracticePhase::NoQuestion => "no_question",
            PracticePhase::AwaitingAnswer { .. } => "awaiting_answer",
            PracticePhase::ShowingFeedback { .. } => "showing_feedback",
        }
    }
}

//
// ─── TOPIC STATE ───────────────────────────────────────────────────────────────
//

/// Everything one session knows about one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicState {
    topic: TopicId,
    difficulty: AdaptiveDifficulty,
    phase: PracticePhase,
    answered: u32,
    correct: u32,
    streak: u32,
    best_streak: u32,
    attempts: AttemptLog,
}

impl TopicState {
    /// Fresh state at the topic's lowest level.
    #[must_use]
    pub fn new(topic: TopicId) -> Self {
        Self {
            topic,
            difficulty: topic.info().difficulty(),
            phase: PracticePhase::NoQuestion,
            answered: 0,
            correct: 0,
            streak: 0,
            best_streak: 0,
            attempts: AttemptLog::default(),
        }
    }

    /// Fresh state starting at `level`, clamped into the topic's bounds.
    #[must_use]
    pub fn starting_at(topic: TopicId, level: u8) -> Self {
        let mut state = Self::new(topic);
        state.difficulty = state.difficulty.with_level(level);
        state
    }

    #[must_use]
    pub fn topic(&self) -> TopicId {
        self.topic
    }

    #[must_use]
    pub fn difficulty(&self) -> &AdaptiveDifficulty {
        &self.difficulty
    }

    #[must_use]
    pub fn level(&self) -> u8 {
        self.difficulty.level()
    }

    #[must_use]
    pub fn phase(&self) -> &PracticePhase {
        &self.phase
    }

    #[must_use]
    pub fn answered(&self) -> u32 {
        self.answered
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Consecutive correct answers, across level changes.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    #[must_use]
    pub fn attempts(&self) -> &AttemptLog {
        &self.attempts
    }

    /// Show `problem` and wait for an answer. Any feedback on screen is dropped.
    pub fn present(&mut self, problem: Problem) {
        self.phase = PracticePhase::AwaitingAnswer { problem };
    }

    /// Record a graded answer and move to feedback.
    ///
    /// Returns `None` and leaves the state untouched when no question is awaiting an answer.
    pub fn record_answer(
        &mut self,
        given: String,
        assessment: Assessment,
        answered_at: DateTime<Utc>,
    ) -> Option<&Feedback> {
        let PracticePhase::AwaitingAnswer { problem } = std::mem::take(&mut self.phase) else {
            return None;
        };

        let asked_at = self.difficulty.level();
        let change = self.difficulty.record(assessment.correct);
        self.answered = self.answered.saturating_add(1);
        if assessment.correct {
            self.correct = self.correct.saturating_add(1);
            self.streak = self.streak.saturating_add(1);
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }

        self.attempts.push(Attempt {
            topic: self.topic,
            level: asked_at,
            prompt: problem.prompt(),
            given,
            expected: assessment.expected.clone(),
            correct: assessment.correct,
            change,
            answered_at,
        });

        let feedback = Feedback {
            explanation: problem.explain(),
            assessment,
            change,
            level: self.difficulty.level(),
        };
        self.phase = PracticePhase::ShowingFeedback { problem, feedback };
        self.phase.feedback()
    }

    /// Back to the starting level with empty tallies and history.
    pub fn reset(&mut self, level: u8) {
        *self = Self::starting_at(self.topic, level);
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One user's practice session: a topic state per opened topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeSession {
    id: SessionId,
    started_at: DateTime<Utc>,
    topics: BTreeMap<TopicId, TopicState>,
}

impl PracticeSession {
    #[must_use]
    pub fn new(id: SessionId, started_at: DateTime<Utc>) -> Self {
        Self {
            id,
            started_at,
            topics: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn topic(&self, topic: TopicId) -> Option<&TopicState> {
        self.topics.get(&topic)
    }

    /// State for `topic`, created at `start_level` on first use.
    pub fn topic_mut(&mut self, topic: TopicId, start_level: u8) -> &mut TopicState {
        self.topics
            .entry(topic)
            .or_insert_with(|| TopicState::starting_at(topic, start_level))
    }

    /// Store `state`, replacing any earlier state for the same topic.
    pub fn insert_topic(&mut self, state: TopicState) {
        self.topics.insert(state.topic(), state);
    }

    pub fn remove_topic(&mut self, topic: TopicId) -> Option<TopicState> {
        self.topics.remove(&topic)
    }
}
