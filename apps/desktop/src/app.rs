//! Root component — the page container. Owns the search state and hands children
//! plain values plus callbacks.

use dioxus::prelude::*;
use tracing::debug;
use vibe_core::page::SearchPage;
use vibe_core::types::SearchRequest;

use crate::chat::PersonalizedChat;
use crate::map::LocationMap;
use crate::results::VibeCards;
use crate::search::{CategoryFilters, SearchHeader};
use crate::state::*;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    let app = use_hook(AppState::take_initial);
    let tag_match = app.config.tag_match;
    let mut page = use_signal(move || SearchPage::new(tag_match));
    let mut tab = use_signal(|| Tab::Discover);

    let backend = app.search.clone();
    let on_search = move |request: SearchRequest| {
        let ticket = page.write().begin_search(request.clone());
        let backend = backend.clone();
        spawn(async move {
            let outcome = backend.0.search(&request).await;
            page.write().finish_search(ticket, outcome);
        });
    };

    let on_toggle = move |tag: String| {
        let now_active = page.write().toggle_tag(&tag);
        debug!(tag = %tag, active = now_active, "Vibe tag toggled");
    };

    let current = page.read();
    let active_tab = tab();

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            // Hero
            header {
                class: "hero",
                h1 { class: "hero-title", "Vibe Navigator" }
                p {
                    class: "hero-tagline",
                    "Discover the perfect spots with AI-powered vibe analysis from real reviews \u{2728}"
                }
                SearchHeader { loading: current.is_loading(), on_search }
            }

            main {
                class: "content-area",

                nav {
                    class: "tab-list",
                    for t in Tab::ALL {
                        button {
                            class: if t == active_tab { "tab-trigger active" } else { "tab-trigger" },
                            onclick: move |_| tab.set(t),
                            "{t.label()}"
                        }
                    }
                }

                match active_tab {
                    Tab::Discover => rsx! {
                        section {
                            class: "tab-content discover",
                            CategoryFilters {
                                active: current.active_tags().clone(),
                                selected_category: current.category().to_string(),
                                on_toggle,
                            }
                            VibeCards {
                                results: current.results().to_vec(),
                                loading: current.is_loading(),
                                active: current.active_tags().clone(),
                                tag_match: current.tag_match(),
                                skeletons: app.config.skeleton_cards,
                            }
                        }
                    },
                    Tab::Concierge => rsx! {
                        section {
                            class: "tab-content concierge",
                            PersonalizedChat {
                                context: current.chat_context(),
                                concierge: app.concierge.clone(),
                            }
                        }
                    },
                    Tab::Map => rsx! {
                        section {
                            class: "tab-content map",
                            LocationMap { locations: current.results().to_vec() }
                        }
                    },
                }
            }
        }
    }
}
