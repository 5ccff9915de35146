use drill_core::{
    DifficultyChange, Exercise, Feedback, InputKind, PracticePhase, Problem, Response, SessionId,
    TopicId, TopicState, Visual,
};
use services::{PracticeLoopService, PracticeProgress};

use crate::views::ViewError;
use crate::vm::attempt_vm::{AttemptRowVm, RECENT_ATTEMPTS, map_recent_attempts};
use crate::vm::catalog_vm::level_label;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub prompt: String,
    pub visual: Visual,
    pub input: InputKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepRowVm {
    pub label: String,
    pub expected: String,
    pub given: String,
    pub correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub headline: &'static str,
    pub answer_label: Option<String>,
    pub note: Option<String>,
    pub steps: Vec<StepRowVm>,
    pub explanation: Vec<String>,
    pub level_change: Option<String>,
}

#[must_use]
pub fn map_question(problem: &Problem) -> QuestionVm {
    QuestionVm {
        prompt: problem.prompt(),
        visual: problem.visual(),
        input: problem.input(),
    }
}

#[must_use]
pub fn level_change_label(change: DifficultyChange) -> Option<String> {
    match change {
        DifficultyChange::Raised { to, .. } => Some(format!("Level up! You are now on level {to}.")),
        DifficultyChange::Lowered { to, .. } => Some(format!("Back to level {to} for now.")),
        DifficultyChange::Unchanged => None,
    }
}

#[must_use]
pub fn map_feedback(feedback: &Feedback) -> FeedbackVm {
    let assessment = &feedback.assessment;
    let (headline, answer_label) = if assessment.correct {
        ("Correct!", None)
    } else {
        (
            "Not quite.",
            Some(format!("The correct answer is {}.", assessment.expected)),
        )
    };

    FeedbackVm {
        correct: assessment.correct,
        headline,
        answer_label,
        note: assessment.note.clone(),
        steps: assessment
            .steps
            .iter()
            .map(|step| StepRowVm {
                label: step.label.clone(),
                expected: step.expected.clone(),
                given: step.given.clone(),
                correct: step.correct,
            })
            .collect(),
        explanation: feedback.explanation.steps().to_vec(),
        level_change: level_change_label(feedback.change),
    }
}

/// What the user has typed or clicked for the current question.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerDraft {
    pub text: String,
    pub fields: Vec<String>,
    /// Indices of clicked tiles, in click order.
    pub order: Vec<usize>,
}

impl AnswerDraft {
    pub fn set_field(&mut self, index: usize, value: String) {
        if self.fields.len() <= index {
            self.fields.resize(index + 1, String::new());
        }
        self.fields[index] = value;
    }

    /// Click a tile into the sequence, or take it back out if already placed.
    pub fn toggle_tile(&mut self, index: usize) {
        if let Some(position) = self.order.iter().position(|&placed| placed == index) {
            self.order.remove(position);
        } else {
            self.order.push(index);
        }
    }

    #[must_use]
    pub fn placed_position(&self, index: usize) -> Option<usize> {
        self.order.iter().position(|&placed| placed == index)
    }

    #[must_use]
    pub fn response(&self, input: &InputKind) -> Response {
        match input {
            InputKind::Number | InputKind::Decimal | InputKind::Fraction | InputKind::Choice(_) => {
                Response::text(self.text.clone())
            }
            InputKind::Order(labels) => Response::order(
                self.order
                    .iter()
                    .filter_map(|&index| labels.get(index).cloned()),
            ),
            InputKind::Fields(labels) => Response::fields(
                (0..labels.len()).map(|index| self.fields.get(index).cloned().unwrap_or_default()),
            ),
        }
    }
}

fn capitalized(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Practice page state for one topic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeVm {
    session: SessionId,
    topic: TopicId,
    question: QuestionVm,
    feedback: Option<FeedbackVm>,
    input_error: Option<String>,
    progress: PracticeProgress,
    recent: Vec<AttemptRowVm>,
}

impl PracticeVm {
    #[must_use]
    pub fn question(&self) -> &QuestionVm {
        &self.question
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&FeedbackVm> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn input_error(&self) -> Option<&str> {
        self.input_error.as_deref()
    }

    /// Latest graded answers for this topic, newest first.
    #[must_use]
    pub fn recent_attempts(&self) -> &[AttemptRowVm] {
        &self.recent
    }

    #[must_use]
    pub fn is_reviewing(&self) -> bool {
        self.feedback.is_some()
    }

    #[must_use]
    pub fn level_label(&self) -> String {
        level_label(&self.progress)
    }

    #[must_use]
    pub fn streak_label(&self) -> String {
        format!("Streak: {}", self.progress.streak)
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!(
            "Correct: {}/{}",
            self.progress.correct, self.progress.answered
        )
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for service failures other than unreadable input,
    /// which is kept as an inline message instead.
    pub async fn submit(
        &mut self,
        practice: &PracticeLoopService,
        response: &Response,
    ) -> Result<(), ViewError> {
        if self.is_reviewing() {
            return Ok(());
        }
        match practice.submit(self.session, self.topic, response).await {
            Ok(feedback) => {
                self.input_error = None;
                self.feedback = Some(map_feedback(&feedback));
                self.refresh(practice).await
            }
            Err(err) if err.is_input_error() => {
                self.input_error = Some(capitalized(&err.to_string()));
                Ok(())
            }
            Err(_) => Err(ViewError::Unknown),
        }
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for service failures.
    pub async fn next(&mut self, practice: &PracticeLoopService) -> Result<(), ViewError> {
        if !self.is_reviewing() {
            return Ok(());
        }
        let problem = practice
            .next_question(self.session, self.topic)
            .await
            .map_err(|_| ViewError::Unknown)?;
        self.question = map_question(&problem);
        self.feedback = None;
        self.input_error = None;
        Ok(())
    }

    async fn refresh(&mut self, practice: &PracticeLoopService) -> Result<(), ViewError> {
        let state = practice
            .topic_state(self.session, self.topic)
            .await
            .map_err(|_| ViewError::Unknown)?;
        self.progress = PracticeProgress::from_state(&state);
        self.recent = map_recent_attempts(state.attempts(), RECENT_ATTEMPTS);
        Ok(())
    }

    fn from_state(session: SessionId, state: &TopicState, problem: &Problem) -> Self {
        Self {
            session,
            topic: state.topic(),
            question: map_question(problem),
            feedback: state.phase().feedback().map(map_feedback),
            input_error: None,
            progress: PracticeProgress::from_state(state),
            recent: map_recent_attempts(state.attempts(), RECENT_ATTEMPTS),
        }
    }
}

/// Open a topic: resume feedback that is still on screen, otherwise show the
/// waiting question or generate one.
///
/// # Errors
///
/// Returns `ViewError::UnknownTopic` for an unknown slug and
/// `ViewError::Unknown` for service failures.
pub async fn start_practice(
    practice: &PracticeLoopService,
    session: SessionId,
    slug: &str,
) -> Result<PracticeVm, ViewError> {
    let topic = TopicId::from_slug(slug).ok_or(ViewError::UnknownTopic)?;
    let state = practice
        .topic_state(session, topic)
        .await
        .map_err(|_| ViewError::Unknown)?;
    if let PracticePhase::ShowingFeedback { problem, .. } = state.phase() {
        return Ok(PracticeVm::from_state(session, &state, problem));
    }

    let problem = practice
        .next_question(session, topic)
        .await
        .map_err(|_| ViewError::Unknown)?;
    let state = practice
        .topic_state(session, topic)
        .await
        .map_err(|_| ViewError::Unknown)?;
    Ok(PracticeVm::from_state(session, &state, &problem))
}
