use async_trait::async_trait;
use chrono::{DateTime, Utc};
use drill_core::model::{PracticeSession, SessionId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("session {0} not found")]
    NotFound(SessionId),

    #[error("connection error: {0}")]
    Connection(String),
}

/// Store for practice sessions. Sessions live as long as the store does.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Create an empty session with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the session cannot be stored.
    async fn create_session(
        &self,
        started_at: DateTime<Utc>,
    ) -> Result<PracticeSession, StorageError>;

    /// Fetch a session by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_session(&self, id: SessionId) -> Result<PracticeSession, StorageError>;

    /// Replace a previously created session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the session was never created.
    async fn save_session(&self, session: &PracticeSession) -> Result<(), StorageError>;
}

/// Process-local session store.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, PracticeSession>>>,
    next_id: Arc<AtomicU64>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<SessionId, PracticeSession>>, StorageError> {
        self.sessions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create_session(
        &self,
        started_at: DateTime<Utc>,
    ) -> Result<PracticeSession, StorageError> {
        // `Default` starts the counter at 0; skip it so ids are always positive.
        let raw = self.next_id.fetch_add(1, Ordering::Relaxed);
        let raw = if raw == 0 {
            self.next_id.fetch_add(1, Ordering::Relaxed)
        } else {
            raw
        };
        let session = PracticeSession::new(SessionId::new(raw), started_at);
        self.lock()?.insert(session.id(), session.clone());
        Ok(session)
    }

    async fn get_session(&self, id: SessionId) -> Result<PracticeSession, StorageError> {
        self.lock()?
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }

    async fn save_session(&self, session: &PracticeSession) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        match guard.get_mut(&session.id()) {
            Some(slot) => {
                *slot = session.clone();
                Ok(())
            }
            None => Err(StorageError::NotFound(session.id())),
        }
    }
}

/// Store handle shared by the services.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn SessionStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        Self { sessions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::TopicId;
    use drill_core::time::fixed_now;

    #[tokio::test]
    async fn round_trips_topic_state() {
        let store = InMemorySessionStore::new();
        let mut session = store.create_session(fixed_now()).await.unwrap();
        session.topic_mut(TopicId::LongDivision, 2);
        store.save_session(&session).await.unwrap();

        let fetched = store.get_session(session.id()).await.unwrap();
        assert_eq!(
            fetched.topic(TopicId::LongDivision).map(|t| t.level()),
            Some(2)
        );
    }

    #[tokio::test]
    async fn default_store_never_hands_out_zero() {
        let store = InMemorySessionStore::default();
        let session = store.create_session(fixed_now()).await.unwrap();
        assert_ne!(session.id().value(), 0);
    }
}
