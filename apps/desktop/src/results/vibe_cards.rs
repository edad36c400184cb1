//! Vibe cards — skeletons while loading, otherwise the tag-filtered result grid.

use dioxus::prelude::*;
use vibe_core::filters::{filter_results, ActiveVibeTags};
use vibe_core::types::{ResultItem, TagMatch};

use super::citations::CitationsDialog;

#[component]
pub fn VibeCards(
    results: Vec<ResultItem>,
    loading: bool,
    active: ActiveVibeTags,
    tag_match: TagMatch,
    skeletons: usize,
) -> Element {
    let mut selected = use_signal(|| None::<ResultItem>);

    if loading {
        return rsx! {
            div {
                class: "card-grid",
                for i in 0..skeletons {
                    div { key: "{i}", class: "vibe-card skeleton" }
                }
            }
        };
    }

    // Recomputed every render from the full set
    let shown = filter_results(&results, &active, tag_match);
    let count = shown.len();
    let plural = if count == 1 { "" } else { "s" };

    rsx! {
        div {
            class: "vibe-cards",

            if count > 0 {
                h2 { class: "found-banner", "Found {count} perfect vibe{plural} for you! \u{1F389}" }
            }

            div {
                class: "card-grid",
                for item in shown.into_iter().cloned() {
                    VibeCard {
                        key: "{item.id}",
                        active: active.clone(),
                        on_citations: move |item: ResultItem| selected.set(Some(item)),
                        item: item.clone(),
                    }
                }
            }

            if let Some(item) = selected() {
                CitationsDialog { item, on_close: move |_| selected.set(None) }
            }
        }
    }
}

#[component]
fn VibeCard(item: ResultItem, active: ActiveVibeTags, on_citations: EventHandler<ResultItem>) -> Element {
    let for_dialog = item.clone();

    rsx! {
        article {
            class: "vibe-card",

            div {
                class: "vibe-card-header",
                div {
                    h3 { class: "vibe-card-name", "{item.name}" }
                    div { class: "vibe-card-location", "\u{1F4CD} {item.location}" }
                }
                span { class: "vibe-card-mood", "{item.mood_glyph}" }
            }

            div {
                class: "vibe-card-meta",
                span { class: "vibe-score", "\u{2605} {item.vibe_score:.1}" }
                span { class: "review-count", "{item.review_count} reviews" }
            }

            p { class: "vibe-card-summary", "{item.summary}" }

            div {
                class: "vibe-card-tags",
                for tag in item.vibe_tags.iter() {
                    span {
                        key: "{tag}",
                        class: if active.contains(tag) { "badge highlighted" } else { "badge" },
                        "{tag}"
                    }
                }
            }

            button {
                class: "citations-button",
                onclick: move |_| on_citations.call(for_dialog.clone()),
                "\u{275D} View Review Citations"
            }
        }
    }
}
