use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use drill_core::{Category, TopicId};

use crate::views::{HomeView, TopicView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/topic/:slug", TopicView)] Topic { slug: String },
}

impl Route {
    #[must_use]
    pub fn topic(topic: TopicId) -> Self {
        Route::Topic {
            slug: topic.slug().to_string(),
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Math Practice" }
            ul {
                li { Link { to: Route::Home {}, "All topics" } }
            }
            for category in Category::ALL {
                section { class: "sidebar__group",
                    h2 { "{category.label()}" }
                    ul {
                        for topic in TopicId::ALL.into_iter().filter(move |t| t.category() == category) {
                            li { key: "{topic.slug()}",
                                Link { to: Route::topic(topic), "{topic.info().title}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
