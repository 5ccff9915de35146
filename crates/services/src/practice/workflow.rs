use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::Mutex as AsyncMutex;
use tracing::info;

use drill_core::{
    Clock, Feedback, PracticeSession, Problem, Response, SessionId, TopicId, TopicState,
};
use storage::repository::SessionStore;

use super::progress::PracticeProgress;
use super::service::PracticeService;
use crate::error::PracticeError;

/// Settings the loop service is built with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PracticeSettings {
    /// Seed for reproducible problems; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Starting level per topic. Levels are clamped into the topic's bounds.
    pub start_levels: BTreeMap<TopicId, u8>,
}

/// Orchestrates sessions in the store, the shared RNG, and the clock.
///
/// Updates load a session, change it, and save it back. They hold `writes` for
/// the whole round trip so concurrent calls cannot overwrite each other.
#[derive(Clone)]
pub struct PracticeLoopService {
    clock: Clock,
    sessions: Arc<dyn SessionStore>,
    rng: Arc<Mutex<StdRng>>,
    start_levels: Arc<BTreeMap<TopicId, u8>>,
    writes: Arc<AsyncMutex<()>>,
}

impl PracticeLoopService {
    #[must_use]
    pub fn new(clock: Clock, sessions: Arc<dyn SessionStore>) -> Self {
        Self::with_settings(clock, sessions, PracticeSettings::default())
    }

    #[must_use]
    pub fn with_settings(
        clock: Clock,
        sessions: Arc<dyn SessionStore>,
        settings: PracticeSettings,
    ) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            clock,
            sessions,
            rng: Arc::new(Mutex::new(rng)),
            start_levels: Arc::new(settings.start_levels),
            writes: Arc::new(AsyncMutex::new(())),
        }
    }

    /// Level a topic starts at in a new session.
    #[must_use]
    pub fn start_level(&self, topic: TopicId) -> u8 {
        let info = topic.info();
        self.start_levels
            .get(&topic)
            .copied()
            .unwrap_or(info.min_level)
            .clamp(info.min_level, info.max_level)
    }

    /// Start an empty session.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Storage` if the session cannot be created.
    pub async fn open_session(&self) -> Result<SessionId, PracticeError> {
        let session = self.sessions.create_session(self.clock.now()).await?;
        info!(
            session = %session.id(),
            started_at = %session.started_at(),
            "opened practice session"
        );
        Ok(session.id())
    }

    /// Current question for `topic`, generating one if none is waiting.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Storage` for unknown sessions or store failures.
    pub async fn next_question(
        &self,
        session: SessionId,
        topic: TopicId,
    ) -> Result<Problem, PracticeError> {
        let _writing = self.writes.lock().await;
        let mut stored = self.sessions.get_session(session).await?;
        let mut practice = self.practice_for(&mut stored, topic);
        let problem = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            practice.next_question(&mut *rng)
        };
        stored.insert_topic(practice.into_state());
        self.sessions.save_session(&stored).await?;
        Ok(problem)
    }

    /// Grade an answer for the waiting question of `topic`.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Answer` for unreadable input and
    /// `PracticeError::NotAwaitingAnswer` when no question is waiting; neither
    /// changes the stored session. Storage failures surface as `PracticeError::Storage`.
    pub async fn submit(
        &self,
        session: SessionId,
        topic: TopicId,
        response: &Response,
    ) -> Result<Feedback, PracticeError> {
        let _writing = self.writes.lock().await;
        let mut stored = self.sessions.get_session(session).await?;
        let mut practice = self.practice_for(&mut stored, topic);
        let feedback = practice.submit(response)?;
        stored.insert_topic(practice.into_state());
        self.sessions.save_session(&stored).await?;
        Ok(feedback)
    }

    /// Snapshot of one topic. Topics not opened yet report their starting state.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Storage` for unknown sessions or store failures.
    pub async fn topic_state(
        &self,
        session: SessionId,
        topic: TopicId,
    ) -> Result<TopicState, PracticeError> {
        let stored = self.sessions.get_session(session).await?;
        Ok(stored
            .topic(topic)
            .cloned()
            .unwrap_or_else(|| TopicState::starting_at(topic, self.start_level(topic))))
    }

    /// Progress for every topic in catalogue order.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Storage` for unknown sessions or store failures.
    pub async fn progress(&self, session: SessionId) -> Result<Vec<PracticeProgress>, PracticeError> {
        let stored = self.sessions.get_session(session).await?;
        Ok(TopicId::ALL
            .iter()
            .map(|&topic| match stored.topic(topic) {
                Some(state) => PracticeProgress::from_state(state),
                None => PracticeProgress::from_state(&TopicState::starting_at(
                    topic,
                    self.start_level(topic),
                )),
            })
            .collect())
    }

    /// Start `topic` over at its configured starting level.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Storage` for unknown sessions or store failures.
    pub async fn reset_topic(
        &self,
        session: SessionId,
        topic: TopicId,
    ) -> Result<TopicState, PracticeError> {
        let _writing = self.writes.lock().await;
        let mut stored = self.sessions.get_session(session).await?;
        let mut practice = self.practice_for(&mut stored, topic);
        practice.reset(self.start_level(topic));
        let state = practice.into_state();
        stored.insert_topic(state.clone());
        self.sessions.save_session(&stored).await?;
        Ok(state)
    }

    fn practice_for(
        &self,
        stored: &mut PracticeSession,
        topic: TopicId,
    ) -> PracticeService {
        let state = stored
            .remove_topic(topic)
            .unwrap_or_else(|| TopicState::starting_at(topic, self.start_level(topic)));
        PracticeService::new(state).with_clock(self.clock)
    }
}
