//! Vibe tag filtering: the active tag set owned by the page, the clear-all intent
//! emitted by the filter bar, and the client-side narrowing used by the cards.

use serde::Serialize;

use crate::types::{ResultItem, TagMatch};

/// Tags the user has switched on, in activation order.
///
/// Equality is set equality: two values with the same tags compare equal whatever
/// order they were activated in.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ActiveVibeTags {
    tags: Vec<String>,
}

impl ActiveVibeTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `tag` if absent, remove it if present. Returns whether the tag is now active.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
            false
        } else {
            self.tags.push(tag.to_string());
            true
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.tags.clone()
    }
}

impl PartialEq for ActiveVibeTags {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|t| other.contains(t))
    }
}

impl Eq for ActiveVibeTags {}

impl<S: AsRef<str>> FromIterator<S> for ActiveVibeTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut active = ActiveVibeTags::new();
        for tag in iter {
            if !active.contains(tag.as_ref()) {
                active.toggle(tag.as_ref());
            }
        }
        active
    }
}

/// Emit one toggle intent per active tag. Applied to the same set, this empties it.
///
/// The filter bar owns no state, so clearing is expressed through the same callback
/// a single chip click uses.
pub fn clear_all(active: &ActiveVibeTags, mut on_toggle: impl FnMut(&str)) {
    for tag in active.iter() {
        on_toggle(tag);
    }
}

/// Whether `item` survives the active tag set under `mode`. An empty set keeps everything.
pub fn matches(item: &ResultItem, active: &ActiveVibeTags, mode: TagMatch) -> bool {
    if active.is_empty() {
        return true;
    }
    match mode {
        TagMatch::Any => active.iter().any(|t| item.has_tag(t)),
        TagMatch::All => active.iter().all(|t| item.has_tag(t)),
    }
}

/// Narrow `results` to the ones the cards should display, preserving order.
pub fn filter_results<'a>(
    results: &'a [ResultItem],
    active: &ActiveVibeTags,
    mode: TagMatch,
) -> Vec<&'a ResultItem> {
    results.iter().filter(|item| matches(item, active, mode)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{mock_results, VIBE_TAGS};

    fn names<'a>(items: &[&'a ResultItem]) -> Vec<&'a str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn double_toggle_restores_previous_set() {
        let mut active: ActiveVibeTags = ["quiet", "lively"].into_iter().collect();
        for option in VIBE_TAGS {
            let before = active.clone();
            active.toggle(option.tag);
            active.toggle(option.tag);
            assert_eq!(active, before, "double toggle of {} changed the set", option.tag);
        }
    }

    #[test]
    fn double_toggle_of_active_tag_keeps_set() {
        let mut active: ActiveVibeTags = ["quiet", "lively"].into_iter().collect();
        let before = active.clone();
        assert!(!active.toggle("quiet"));
        assert!(active.toggle("quiet"));
        assert_eq!(active, before);
        // Re-activated tags move to the end of the strip.
        assert_eq!(active.iter().collect::<Vec<_>>(), vec!["lively", "quiet"]);
    }

    #[test]
    fn equality_ignores_activation_order() {
        let a: ActiveVibeTags = ["cozy", "aesthetic"].into_iter().collect();
        let b: ActiveVibeTags = ["aesthetic", "cozy"].into_iter().collect();
        let c: ActiveVibeTags = ["cozy"].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(c, a);
    }

    #[test]
    fn toggle_reports_new_state() {
        let mut active = ActiveVibeTags::new();
        assert!(active.toggle("cozy"));
        assert!(active.contains("cozy"));
        assert!(!active.toggle("cozy"));
        assert!(active.is_empty());
    }

    #[test]
    fn activation_order_is_kept() {
        let mut active = ActiveVibeTags::new();
        active.toggle("romantic");
        active.toggle("cozy");
        active.toggle("aesthetic");
        active.toggle("cozy");
        assert_eq!(active.iter().collect::<Vec<_>>(), vec!["romantic", "aesthetic"]);
    }

    #[test]
    fn clear_all_empties_any_non_empty_set() {
        let sets: Vec<Vec<&str>> = vec![
            vec!["cozy"],
            vec!["cozy", "aesthetic"],
            VIBE_TAGS.iter().map(|o| o.tag).collect(),
        ];
        for tags in sets {
            let mut active: ActiveVibeTags = tags.iter().collect();
            let snapshot = active.clone();
            clear_all(&snapshot, |tag| {
                active.toggle(tag);
            });
            assert!(active.is_empty(), "clear all left {:?}", active);
        }
    }

    #[test]
    fn clear_all_on_empty_set_emits_nothing() {
        let mut calls = 0;
        clear_all(&ActiveVibeTags::new(), |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn empty_active_set_shows_everything() {
        let results = mock_results();
        let shown = filter_results(&results, &ActiveVibeTags::new(), TagMatch::Any);
        assert_eq!(shown.len(), results.len());
        let shown = filter_results(&results, &ActiveVibeTags::new(), TagMatch::All);
        assert_eq!(shown.len(), results.len());
    }

    #[test]
    fn any_mode_keeps_results_matching_one_tag() {
        let results = mock_results();
        let active: ActiveVibeTags = ["quiet", "pet-friendly"].into_iter().collect();
        let shown = filter_results(&results, &active, TagMatch::Any);
        assert_eq!(names(&shown), vec!["Café Mocha Dreams", "Brew & Bloom Garden Café"]);

        let active: ActiveVibeTags = ["quiet"].into_iter().collect();
        let shown = filter_results(&results, &active, TagMatch::Any);
        assert_eq!(names(&shown), vec!["Café Mocha Dreams"]);
    }

    #[test]
    fn any_mode_is_exactly_the_intersecting_results() {
        let results = mock_results();
        for option in VIBE_TAGS {
            let active: ActiveVibeTags = [option.tag].into_iter().collect();
            let shown = filter_results(&results, &active, TagMatch::Any);
            let expected: Vec<&ResultItem> =
                results.iter().filter(|r| r.vibe_tags.iter().any(|t| t == option.tag)).collect();
            assert_eq!(shown, expected, "tag {}", option.tag);
        }
    }

    #[test]
    fn all_mode_requires_every_tag() {
        let results = mock_results();
        let active: ActiveVibeTags = ["aesthetic", "quiet"].into_iter().collect();
        let shown = filter_results(&results, &active, TagMatch::All);
        assert_eq!(names(&shown), vec!["Café Mocha Dreams"]);

        let active: ActiveVibeTags = ["quiet", "pet-friendly"].into_iter().collect();
        assert!(filter_results(&results, &active, TagMatch::All).is_empty());
    }

    #[test]
    fn tag_outside_every_result_hides_all() {
        let results = mock_results();
        let active: ActiveVibeTags = ["romantic"].into_iter().collect();
        assert!(filter_results(&results, &active, TagMatch::Any).is_empty());
    }
}
