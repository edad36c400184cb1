//! Search header — free-text query, city and category pickers, submit button.

use dioxus::prelude::*;
use vibe_core::catalog::{CATEGORIES, CITIES};
use vibe_core::header::SearchForm;
use vibe_core::types::SearchRequest;

#[component]
pub fn SearchHeader(loading: bool, on_search: EventHandler<SearchRequest>) -> Element {
    let mut form = use_signal(SearchForm::new);
    let current = form.read();
    let can_submit = current.can_submit(loading);

    rsx! {
        form {
            class: "search-header",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                // Blocked submissions fire nothing and show nothing
                let request = form.read().submit(loading);
                if let Some(request) = request {
                    on_search.call(request);
                }
            },

            div {
                class: "search-input-row",
                svg {
                    class: "search-icon",
                    width: "18",
                    height: "18",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    circle { cx: "11", cy: "11", r: "8" }
                    line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                }
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Tell me about cozy cafes with good WiFi...",
                    value: "{current.query()}",
                    oninput: move |e: Event<FormData>| form.write().set_query(e.value()),
                }
            }

            div {
                class: "search-select-row",

                select {
                    class: "search-select",
                    value: "{current.city()}",
                    onchange: move |e: Event<FormData>| {
                        form.write().select_city(&e.value());
                    },
                    option { value: "", disabled: true, selected: current.city().is_empty(), "\u{1F4CD} Select City" }
                    for city in CITIES.iter() {
                        option { value: "{city}", selected: current.city() == *city, "{city}" }
                    }
                }

                select {
                    class: "search-select",
                    value: "{current.category()}",
                    onchange: move |e: Event<FormData>| {
                        form.write().select_category(&e.value());
                    },
                    option { value: "", disabled: true, selected: current.category().is_empty(), "Category" }
                    for category in CATEGORIES.iter() {
                        option { value: "{category}", selected: current.category() == *category, "{category}" }
                    }
                }

                button {
                    class: "search-submit",
                    r#type: "submit",
                    disabled: !can_submit,
                    if loading {
                        span { class: "spinner" }
                    } else {
                        "Discover Vibes \u{2728}"
                    }
                }
            }
        }
    }
}
