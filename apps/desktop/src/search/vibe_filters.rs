//! Vibe filter bar — one chip per catalog tag. Holds no state of its own.

use dioxus::prelude::*;
use vibe_core::catalog::{glyph_for, VIBE_TAGS};
use vibe_core::filters::{clear_all, ActiveVibeTags};

#[component]
pub fn CategoryFilters(
    active: ActiveVibeTags,
    selected_category: String,
    on_toggle: EventHandler<String>,
) -> Element {
    let snapshot = active.clone();

    rsx! {
        div {
            class: "vibe-filters",

            div {
                class: "vibe-filters-header",
                h3 {
                    "Filter by Vibe"
                    if !selected_category.is_empty() {
                        " \u{2022} {selected_category}"
                    }
                }
                if !active.is_empty() {
                    button {
                        class: "clear-all",
                        onclick: move |_| clear_all(&snapshot, |tag| on_toggle.call(tag.to_string())),
                        "\u{00D7} Clear all"
                    }
                }
            }

            div {
                class: "vibe-chips",
                for option in VIBE_TAGS.iter() {
                    button {
                        key: "{option.tag}",
                        class: if active.contains(option.tag) { "vibe-chip active" } else { "vibe-chip" },
                        "data-color": option.color,
                        onclick: move |_| on_toggle.call(option.tag.to_string()),
                        span { class: "vibe-chip-glyph", "{option.glyph}" }
                        "{option.tag}"
                    }
                }
            }

            if !active.is_empty() {
                div {
                    class: "active-filters",
                    span { "Active filters:" }
                    for tag in active.iter() {
                        span { key: "{tag}", class: "badge secondary", "{glyph_for(tag)} {tag}" }
                    }
                }
            }
        }
    }
}
