//! Fixed catalogs: selectable cities and categories, the ten vibe tags, suggested
//! concierge prompts, and the mock payload returned by the simulated search.

use crate::types::{CitedReview, ResultItem, VibeTagOption};

pub const CITIES: &[&str] = &[
    "Delhi",
    "Mumbai",
    "Bangalore",
    "Chennai",
    "Kolkata",
    "Pune",
    "Hyderabad",
    "Ahmedabad",
];

pub const CATEGORIES: &[&str] = &[
    "Cafes",
    "Restaurants",
    "Parks",
    "Gyms",
    "Bars",
    "Libraries",
    "Co-working Spaces",
    "Museums",
];

pub const VIBE_TAGS: &[VibeTagOption] = &[
    VibeTagOption { tag: "aesthetic", glyph: "\u{2728}", color: "purple" },
    VibeTagOption { tag: "quiet", glyph: "\u{1F92B}", color: "blue" },
    VibeTagOption { tag: "lively", glyph: "\u{1F389}", color: "orange" },
    VibeTagOption { tag: "nature-filled", glyph: "\u{1F33F}", color: "green" },
    VibeTagOption { tag: "cozy", glyph: "\u{1F6CB}\u{FE0F}", color: "amber" },
    VibeTagOption { tag: "budget-friendly", glyph: "\u{1F4B0}", color: "emerald" },
    VibeTagOption { tag: "instagram-worthy", glyph: "\u{1F4F8}", color: "pink" },
    VibeTagOption { tag: "pet-friendly", glyph: "\u{1F415}", color: "cyan" },
    VibeTagOption { tag: "work-friendly", glyph: "\u{1F4BB}", color: "slate" },
    VibeTagOption { tag: "romantic", glyph: "\u{1F495}", color: "rose" },
];

/// Prompts offered as one-click buttons under the chat input.
pub const SUGGESTED_QUERIES: &[&str] = &[
    "Find me a cozy spot for a first date",
    "Where can I work remotely with great coffee?",
    "I want somewhere Instagram-worthy with good food",
    "Recommend a quiet place to read and study",
    "Show me lively spots perfect for groups",
];

/// How many suggested queries the chat shows at once.
pub const VISIBLE_SUGGESTIONS: usize = 3;

pub fn is_city(value: &str) -> bool {
    CITIES.contains(&value)
}

pub fn is_category(value: &str) -> bool {
    CATEGORIES.contains(&value)
}

/// Look up the catalog entry for a tag.
pub fn vibe_option(tag: &str) -> Option<&'static VibeTagOption> {
    VIBE_TAGS.iter().find(|o| o.tag == tag)
}

/// Glyph for a tag, or an empty string for tags outside the catalog.
pub fn glyph_for(tag: &str) -> &'static str {
    vibe_option(tag).map(|o| o.glyph).unwrap_or("")
}

fn review(id: u32, text: &str, platform: &str, rating: u8) -> CitedReview {
    CitedReview {
        id,
        text: text.to_string(),
        platform: platform.to_string(),
        rating,
    }
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

/// The static payload every simulated search resolves to.
pub fn mock_results() -> Vec<ResultItem> {
    vec![
        ResultItem {
            id: 1,
            name: "Café Mocha Dreams".into(),
            location: "Connaught Place, Delhi".into(),
            vibe_score: 4.8,
            primary_vibe: "cozy".into(),
            vibe_tags: tags(&["cozy", "aesthetic", "quiet", "instagram-worthy", "budget-friendly"]),
            summary: "A hidden gem tucked away from the bustling streets, where vintage decor \
                      meets modern coffee culture. Perfect for deep conversations and creative work."
                .into(),
            mood_glyph: "\u{2615}\u{1F33F}\u{1F4DA}\u{2728}".into(),
            review_count: 247,
            cited_reviews: vec![
                review(1, "Love the vintage vibes and peaceful atmosphere", "Google Maps", 5),
                review(2, "Perfect spot for working with great coffee", "TripAdvisor", 4),
            ],
        },
        ResultItem {
            id: 2,
            name: "Brew & Bloom Garden Café".into(),
            location: "Hauz Khas Village, Delhi".into(),
            vibe_score: 4.6,
            primary_vibe: "lively".into(),
            vibe_tags: tags(&["lively", "nature-filled", "aesthetic", "pet-friendly", "organic"]),
            summary: "Where urban jungle meets coffee culture! This open-air paradise combines \
                      lush greenery with energetic vibes and sustainable practices."
                .into(),
            mood_glyph: "\u{1F331}\u{1F3B6}\u{2600}\u{FE0F}\u{1F415}".into(),
            review_count: 189,
            cited_reviews: vec![
                review(3, "Amazing garden setting, very Instagram worthy!", "Reddit", 5),
                review(4, "Great for groups, love the sustainable focus", "Google Maps", 4),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_ten_unique_tags_with_glyphs() {
        assert_eq!(VIBE_TAGS.len(), 10);
        let unique: HashSet<_> = VIBE_TAGS.iter().map(|o| o.tag).collect();
        assert_eq!(unique.len(), 10);
        assert!(VIBE_TAGS.iter().all(|o| !o.glyph.is_empty()));
    }

    #[test]
    fn mock_results_are_well_formed() {
        let results = mock_results();
        assert_eq!(results.len(), 2);
        for item in &results {
            assert!((0.0..=5.0).contains(&item.vibe_score));
            assert!(item.has_tag(&item.primary_vibe), "{} lacks its primary vibe", item.name);
            let unique: HashSet<_> = item.vibe_tags.iter().collect();
            assert_eq!(unique.len(), item.vibe_tags.len());
            assert!(item.cited_reviews.iter().all(|r| (1..=5).contains(&r.rating)));
        }
    }

    #[test]
    fn unknown_tag_has_no_glyph() {
        assert_eq!(glyph_for("organic"), "");
        assert_eq!(glyph_for("cozy"), "\u{1F6CB}\u{FE0F}");
    }
}
