use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use drill_core::{SessionId, TopicId};
use services::PracticeLoopService;

pub trait UiApp: Send + Sync {
    fn session_id(&self) -> SessionId;
    fn open_topic_on_launch(&self) -> Option<TopicId>;
    fn window_title(&self) -> String;

    fn practice(&self) -> Arc<PracticeLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    session_id: SessionId,
    window_title: Arc<str>,
    open_topic_on_launch: Option<TopicId>,
    open_topic_once: Arc<AtomicBool>,

    practice: Arc<PracticeLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let open_topic_on_launch = app.open_topic_on_launch();

        Self {
            session_id: app.session_id(),
            window_title: Arc::from(app.window_title()),
            open_topic_on_launch,
            open_topic_once: Arc::new(AtomicBool::new(open_topic_on_launch.is_some())),
            practice: app.practice(),
        }
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    #[must_use]
    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    /// The launch topic, handed out once so returning home does not bounce back.
    #[must_use]
    pub fn take_open_topic_on_launch(&self) -> Option<TopicId> {
        if self.open_topic_once.swap(false, Ordering::AcqRel) {
            self.open_topic_on_launch
        } else {
            None
        }
    }

    #[must_use]
    pub fn practice(&self) -> Arc<PracticeLoopService> {
        Arc::clone(&self.practice)
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
