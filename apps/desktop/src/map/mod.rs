//! Map view — a static placeholder panel and a plain list of the current results.

use dioxus::prelude::*;
use vibe_core::types::ResultItem;

#[component]
pub fn LocationMap(locations: Vec<ResultItem>) -> Element {
    rsx! {
        div {
            class: "location-map",

            div {
                class: "map-placeholder",
                div { class: "map-pin", "\u{1F4CD}" }
                h3 { "Interactive Map Coming Soon!" }
                p {
                    "We're working on integrating OpenStreetMap to show you exactly where these amazing vibes are located."
                }
                button { class: "outline-button", disabled: true, "\u{1F9ED} Enable Location Services" }
            }

            h3 { class: "nearby-title", "Nearby Locations" }
            div {
                class: "nearby-list",
                for location in locations.iter() {
                    div {
                        key: "{location.id}",
                        class: "nearby-item",
                        div {
                            h4 { "{location.name}" }
                            div { class: "nearby-location", "\u{1F4CD} {location.location}" }
                            div {
                                class: "nearby-meta",
                                span { class: "vibe-score", "\u{2605} {location.vibe_score:.1}" }
                                span { class: "badge secondary", "{location.primary_vibe}" }
                            }
                        }
                        span { class: "nearby-mood", "{location.mood_glyph}" }
                    }
                }
            }
        }
    }
}
