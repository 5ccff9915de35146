use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{TopicCardVm, load_catalog};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let practice = ctx.practice();
    let session = ctx.session_id();

    let launch_topic = use_hook(|| ctx.take_open_topic_on_launch());
    use_effect(move || {
        if let Some(topic) = launch_topic {
            let _ = navigator.replace(Route::topic(topic));
        }
    });

    let mut resource = use_resource(move || {
        let practice = practice.clone();
        async move { load_catalog(&practice, session).await }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page home-page",
            h2 { "Choose a topic" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| resource.restart(),
                        "Retry"
                    }
                },
                ViewState::Ready(sections) => rsx! {
                    for section in sections {
                        section { key: "{section.label}", class: "catalog-section",
                            h3 { "{section.label}" }
                            div { class: "topic-grid",
                                for card in section.topics {
                                    TopicCard { key: "{card.topic}", card: card.clone() }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn TopicCard(card: TopicCardVm) -> Element {
    rsx! {
        Link { class: "topic-card", to: Route::topic(card.topic),
            h4 { class: "topic-card__title", "{card.title}" }
            p { class: "topic-card__summary", "{card.summary}" }
            span { class: "level-badge", "{card.level_label}" }
            if let Some(score) = card.score_label {
                span { class: "topic-card__score", "{score}" }
            }
        }
    }
}
