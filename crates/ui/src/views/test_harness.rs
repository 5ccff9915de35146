use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use drill_core::time::fixed_clock;
use drill_core::{SessionId, TopicId};
use services::{AppServices, PracticeLoopService, PracticeSettings};

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, TopicView};

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn session_id(&self) -> SessionId {
        self.services.session_id()
    }

    fn open_topic_on_launch(&self) -> Option<TopicId> {
        None
    }

    fn window_title(&self) -> String {
        "Math Practice".to_string()
    }

    fn practice(&self) -> Arc<PracticeLoopService> {
        self.services.practice()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Topic(String),
}

impl ViewKind {
    pub fn topic(topic: TopicId) -> Self {
        ViewKind::Topic(topic.slug().to_string())
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Topic(slug) => rsx! { TopicView { slug } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let pending resources resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_settings(view, PracticeSettings::default()).await
}

pub async fn setup_view_harness_with_settings(
    view: ViewKind,
    settings: PracticeSettings,
) -> ViewHarness {
    let settings = PracticeSettings {
        seed: settings.seed.or(Some(11)),
        ..settings
    };
    let services = AppServices::in_memory(fixed_clock(), settings)
        .await
        .expect("app services");
    let app = Arc::new(TestApp {
        services: services.clone(),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, services }
}
