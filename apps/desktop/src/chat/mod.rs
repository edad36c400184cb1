//! Concierge chat — context strip, message log, typing indicator, suggestions and input.

use dioxus::prelude::*;
use vibe_core::catalog::{SUGGESTED_QUERIES, VISIBLE_SUGGESTIONS};
use vibe_core::chat::ChatSession;
use vibe_core::types::{ChatAuthor, ChatContext};

use crate::state::ConciergeHandle;

#[component]
pub fn PersonalizedChat(context: ChatContext, concierge: ConciergeHandle) -> Element {
    let mut session = use_signal(|| ChatSession::new(context.clone()));
    let mut draft = use_signal(String::new);

    // Rebuilt each render; holds the page's current context.
    let latest = context.clone();
    let send = use_callback(move |text: String| {
        session.write().set_context(latest.clone());
        let Some(pending) = session.write().begin_send(&text) else {
            return;
        };
        draft.set(String::new());
        let concierge = concierge.clone();
        spawn(async move {
            let outcome = concierge.0.reply(&pending.prompt, &pending.context).await;
            session.write().finish_reply(pending, outcome);
        });
    });

    let current = session.read();
    let waiting = current.is_waiting();

    rsx! {
        div {
            class: "concierge",

            // Context strip
            div {
                class: "concierge-context",
                h3 { "\u{1F916} AI Vibe Concierge" }
                div {
                    class: "badge-row",
                    if !context.city.is_empty() {
                        span { class: "badge outline", "\u{1F4CD} {context.city}" }
                    }
                    if !context.category.is_empty() {
                        span { class: "badge outline", "\u{1F3E2} {context.category}" }
                    }
                    for pref in context.preferences.iter() {
                        span { key: "{pref}", class: "badge secondary", "\u{2728} {pref}" }
                    }
                }
            }

            div {
                class: "chat-window",

                div {
                    class: "chat-log",
                    for msg in current.messages().iter() {
                        div {
                            key: "{msg.id}",
                            class: if msg.author == ChatAuthor::User { "chat-row user" } else { "chat-row bot" },
                            div {
                                class: "chat-bubble",
                                p { "{msg.content}" }
                                span { class: "chat-time", {msg.timestamp.format("%H:%M").to_string()} }
                            }
                        }
                    }
                    if waiting {
                        div {
                            class: "chat-row bot",
                            div {
                                class: "chat-bubble typing",
                                span { class: "dot" }
                                span { class: "dot" }
                                span { class: "dot" }
                            }
                        }
                    }
                }

                div {
                    class: "chat-input-area",
                    div {
                        class: "suggestions",
                        for suggestion in SUGGESTED_QUERIES.iter().take(VISIBLE_SUGGESTIONS) {
                            button {
                                class: "suggestion",
                                disabled: waiting,
                                onclick: move |_| send.call(suggestion.to_string()),
                                "\u{2728} {suggestion}"
                            }
                        }
                    }
                    div {
                        class: "chat-input-row",
                        input {
                            class: "chat-input",
                            value: "{draft}",
                            placeholder: "Ask me about vibes, locations, or anything...",
                            disabled: waiting,
                            oninput: move |e: Event<FormData>| draft.set(e.value()),
                            onkeydown: move |e: KeyboardEvent| {
                                if e.key() == Key::Enter {
                                    send.call(draft());
                                }
                            },
                        }
                        button {
                            class: "chat-send",
                            disabled: waiting || draft.read().trim().is_empty(),
                            onclick: move |_| send.call(draft()),
                            "Send"
                        }
                    }
                }
            }
        }
    }
}
