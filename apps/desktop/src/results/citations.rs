//! Citation dialog — the summary plus the raw reviews backing it.

use dioxus::prelude::*;
use vibe_core::types::ResultItem;

#[component]
pub fn CitationsDialog(item: ResultItem, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| on_close.call(()),

            div {
                class: "dialog",
                onclick: move |e: MouseEvent| e.stop_propagation(),

                div {
                    class: "dialog-header",
                    h2 { "{item.name} - Review Citations" }
                    button { class: "dialog-close", onclick: move |_| on_close.call(()), "\u{00D7}" }
                }

                div {
                    class: "dialog-summary",
                    h3 { "AI Summary" }
                    p { "{item.summary}" }
                }

                div {
                    class: "dialog-reviews",
                    h3 { "Source Reviews:" }
                    for review in item.cited_reviews.iter() {
                        blockquote {
                            key: "{review.id}",
                            class: "cited-review",
                            div {
                                class: "cited-review-meta",
                                span { class: "badge outline", "{review.platform}" }
                                span {
                                    class: "stars",
                                    title: "{review.rating} of 5",
                                    for i in 0..review.rating {
                                        span { key: "{i}", class: "star filled", "\u{2605}" }
                                    }
                                }
                            }
                            p { class: "cited-review-text", "\"{review.text}\"" }
                        }
                    }
                }
            }
        }
    }
}
