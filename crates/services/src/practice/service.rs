use rand::Rng;
use tracing::{debug, info, warn};

use drill_core::{
    Clock, Exercise, Feedback, PracticePhase, Problem, Response, TopicId, TopicState,
};

use super::progress::PracticeProgress;
use crate::error::PracticeError;

//
// ─── PRACTICE SERVICE ──────────────────────────────────────────────────────────
//

/// Drives one topic through the question cycle.
///
/// `NoQuestion -> AwaitingAnswer -> ShowingFeedback -> AwaitingAnswer -> ...`
/// Problems come from the injected RNG; attempt timestamps from the `Clock`.
#[derive(Debug, Clone)]
pub struct PracticeService {
    state: TopicState,
    clock: Clock,
}

impl PracticeService {
    #[must_use]
    pub fn new(state: TopicState) -> Self {
        Self {
            state,
            clock: Clock::default(),
        }
    }

    /// Fresh service for `topic` at its lowest level.
    #[must_use]
    pub fn for_topic(topic: TopicId) -> Self {
        Self::new(TopicState::new(topic))
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn state(&self) -> &TopicState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> TopicState {
        self.state
    }

    #[must_use]
    pub fn topic(&self) -> TopicId {
        self.state.topic()
    }

    #[must_use]
    pub fn phase(&self) -> &PracticePhase {
        self.state.phase()
    }

    #[must_use]
    pub fn progress(&self) -> PracticeProgress {
        PracticeProgress::from_state(&self.state)
    }

    /// Show a new problem at the current level.
    ///
    /// While a question is still waiting for an answer it is returned unchanged,
    /// so questions cannot be skipped.
    pub fn next_question<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Problem {
        if let PracticePhase::AwaitingAnswer { problem } = self.state.phase() {
            debug!(topic = %self.topic(), "question still awaiting an answer");
            return problem.clone();
        }

        let level = self.state.level();
        let problem = Problem::generate(self.topic(), level, rng);
        debug!(topic = %self.topic(), level, prompt = %problem.prompt(), "generated problem");
        self.state.present(problem.clone());
        problem
    }

    /// Grade `response` against the waiting question and move to feedback.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::NotAwaitingAnswer` when no question is waiting and
    /// `PracticeError::Answer` when the response cannot be read. In both cases
    /// the state is left unchanged.
    pub fn submit(&mut self, response: &Response) -> Result<Feedback, PracticeError> {
        let topic = self.topic();
        let PracticePhase::AwaitingAnswer { problem } = self.state.phase() else {
            warn!(%topic, phase = self.state.phase().name(), "submit outside awaiting_answer");
            return Err(PracticeError::NotAwaitingAnswer { topic });
        };

        let assessment = problem.grade(response).map_err(|err| {
            warn!(%topic, error = %err, "rejected unreadable answer");
            PracticeError::from(err)
        })?;

        let feedback = self
            .state
            .record_answer(response.to_string(), assessment, self.clock.now())
            .cloned()
            .ok_or(PracticeError::NotAwaitingAnswer { topic })?;

        info!(
            %topic,
            correct = feedback.assessment.correct,
            level = feedback.level,
            "graded submission"
        );
        if feedback.change.is_change() {
            info!(%topic, change = ?feedback.change, "difficulty changed");
        }
        Ok(feedback)
    }

    /// Clear tallies and history and start again at `level`.
    pub fn reset(&mut self, level: u8) {
        info!(topic = %self.topic(), level, "topic reset");
        self.state.reset(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::time::fixed_clock;
    use drill_core::{AnswerError, DifficultyChange};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn service(topic: TopicId) -> PracticeService {
        PracticeService::for_topic(topic).with_clock(fixed_clock())
    }

    #[test]
    fn submit_before_question_is_rejected() {
        let mut svc = service(TopicId::Rounding);
        let err = svc.submit(&Response::text("10")).unwrap_err();
        assert!(matches!(
            err,
            PracticeError::NotAwaitingAnswer {
                topic: TopicId::Rounding
            }
        ));
    }

    #[test]
    fn next_while_awaiting_keeps_the_question() {
        let mut svc = service(TopicId::LongDivision);
        let mut rng = StdRng::seed_from_u64(1);
        let first = svc.next_question(&mut rng);
        let again = svc.next_question(&mut rng);
        assert_eq!(first, again);
    }

    #[test]
    fn unreadable_answer_leaves_state_alone() {
        let mut svc = service(TopicId::MultiplicationFacts);
        let mut rng = StdRng::seed_from_u64(2);
        svc.next_question(&mut rng);
        let before = svc.state().clone();

        let err = svc.submit(&Response::text("twelve")).unwrap_err();
        assert!(err.is_input_error());
        assert!(matches!(
            err,
            PracticeError::Answer(AnswerError::NotAnInteger(_))
        ));
        assert_eq!(svc.state(), &before);
    }

    #[test]
    fn correct_answer_moves_to_feedback_and_raises_level() {
        let mut svc = service(TopicId::Rounding);
        let mut rng = StdRng::seed_from_u64(3);
        let problem = svc.next_question(&mut rng);

        let feedback = svc.submit(&problem.canonical_response()).unwrap();
        assert!(feedback.assessment.correct);
        assert_eq!(feedback.change, DifficultyChange::Raised { from: 1, to: 2 });
        assert!(!feedback.explanation.is_empty());
        assert!(matches!(svc.phase(), PracticePhase::ShowingFeedback { .. }));

        // A second submit has nothing to grade.
        assert!(svc.submit(&problem.canonical_response()).is_err());
        assert_eq!(svc.progress().answered, 1);
    }

    #[test]
    fn wrong_answers_never_leave_bounds() {
        let mut svc = service(TopicId::PlaceValue);
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..10 {
            svc.next_question(&mut rng);
            svc.submit(&Response::text("-1")).unwrap();
            assert_eq!(svc.state().level(), 1);
        }
        assert_eq!(svc.progress().streak, 0);
        assert_eq!(svc.state().attempts().len(), 10);
    }
}
