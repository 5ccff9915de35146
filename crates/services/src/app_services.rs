use std::sync::Arc;

use drill_core::{SessionId, TopicId};
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::practice::{PracticeLoopService, PracticeSettings};

/// Assembles app-facing services and opens the session the UI works in.
#[derive(Clone)]
pub struct AppServices {
    session_id: SessionId,
    open_topic_on_launch: Option<TopicId>,
    practice: Arc<PracticeLoopService>,
}

impl AppServices {
    /// Build services backed by the in-memory session store.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the session cannot be opened.
    pub async fn in_memory(
        clock: Clock,
        settings: PracticeSettings,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::in_memory();
        let practice = Arc::new(PracticeLoopService::with_settings(
            clock,
            Arc::clone(&storage.sessions),
            settings,
        ));
        let session_id = practice.open_session().await?;

        Ok(Self {
            session_id,
            open_topic_on_launch: None,
            practice,
        })
    }

    #[must_use]
    pub fn with_open_topic(mut self, topic: Option<TopicId>) -> Self {
        self.open_topic_on_launch = topic;
        self
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    #[must_use]
    pub fn open_topic_on_launch(&self) -> Option<TopicId> {
        self.open_topic_on_launch
    }

    #[must_use]
    pub fn practice(&self) -> Arc<PracticeLoopService> {
        Arc::clone(&self.practice)
    }
}
