//! The page container: the single owner of search inputs, active vibe tags, the result
//! list and the loading flag. Children read from it and send intents back up.

use tracing::{info, warn};

use crate::backend::SearchBackend;
use crate::filters::{filter_results, ActiveVibeTags};
use crate::types::{ChatContext, ResultItem, SearchRequest, TagMatch};

/// Identifies one `begin_search` call. Only the latest ticket may land results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchTicket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchPage {
    query: String,
    city: String,
    category: String,
    active_tags: ActiveVibeTags,
    results: Vec<ResultItem>,
    loading: bool,
    tag_match: TagMatch,
    generation: u64,
}

impl SearchPage {
    pub fn new(tag_match: TagMatch) -> Self {
        Self {
            tag_match,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn active_tags(&self) -> &ActiveVibeTags {
        &self.active_tags
    }

    /// The full result set of the last completed search.
    pub fn results(&self) -> &[ResultItem] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn tag_match(&self) -> TagMatch {
        self.tag_match
    }

    /// Record the request and enter the loading state.
    pub fn begin_search(&mut self, request: SearchRequest) -> SearchTicket {
        self.generation += 1;
        self.loading = true;
        info!(
            city = %request.city,
            category = %request.category,
            query = %request.free_text_query,
            "Search started"
        );
        self.query = request.free_text_query;
        self.city = request.city;
        self.category = request.category;
        SearchTicket(self.generation)
    }

    /// Land the outcome of a search started with `ticket`. Returns false when a newer
    /// search has superseded it, in which case nothing changes.
    ///
    /// A failed search keeps the previous results.
    pub fn finish_search(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<ResultItem>, String>,
    ) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match outcome {
            Ok(results) => {
                info!(results = results.len(), "Search complete");
                self.results = results;
            }
            Err(e) => warn!(error = %e, "Search failed, keeping previous results"),
        }
        self.loading = false;
        true
    }

    /// Begin a search, wait on `backend`, and land the results.
    pub async fn run_search(&mut self, backend: &dyn SearchBackend, request: SearchRequest) {
        let ticket = self.begin_search(request.clone());
        let outcome = backend.search(&request).await;
        self.finish_search(ticket, outcome);
    }

    /// Switch `tag` on or off. Returns whether it is now active.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        self.active_tags.toggle(tag)
    }

    /// Results the cards show: the full set narrowed by the active tags, recomputed on
    /// every call.
    pub fn displayed_results(&self) -> Vec<&ResultItem> {
        filter_results(&self.results, &self.active_tags, self.tag_match)
    }

    /// Context handed to the concierge when the chat opens.
    pub fn chat_context(&self) -> ChatContext {
        ChatContext {
            city: self.city.clone(),
            category: self.category.clone(),
            preferences: self.active_tags.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock_results;

    fn request(city: &str, category: &str) -> SearchRequest {
        SearchRequest {
            free_text_query: String::new(),
            city: city.into(),
            category: category.into(),
        }
    }

    #[test]
    fn begin_search_stores_inputs_and_sets_loading() {
        let mut page = SearchPage::default();
        page.begin_search(SearchRequest {
            free_text_query: "quiet reading".into(),
            city: "Chennai".into(),
            category: "Libraries".into(),
        });
        assert!(page.is_loading());
        assert_eq!(page.query(), "quiet reading");
        assert_eq!(page.city(), "Chennai");
        assert_eq!(page.category(), "Libraries");
        assert!(page.results().is_empty());
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut page = SearchPage::default();
        let first = page.begin_search(request("Delhi", "Cafes"));
        let second = page.begin_search(request("Mumbai", "Bars"));
        assert!(!page.finish_search(first, Ok(mock_results())));
        assert!(page.is_loading());
        assert!(page.results().is_empty());
        assert!(page.finish_search(second, Ok(mock_results())));
        assert!(!page.is_loading());
        assert_eq!(page.results().len(), 2);
    }

    #[test]
    fn failed_search_keeps_previous_results() {
        let mut page = SearchPage::default();
        let ticket = page.begin_search(request("Delhi", "Cafes"));
        page.finish_search(ticket, Ok(mock_results()));
        let ticket = page.begin_search(request("Pune", "Gyms"));
        assert!(page.finish_search(ticket, Err("connection refused".into())));
        assert!(!page.is_loading());
        assert_eq!(page.results(), mock_results().as_slice());
    }

    #[test]
    fn next_search_replaces_results() {
        let mut page = SearchPage::default();
        let ticket = page.begin_search(request("Delhi", "Cafes"));
        page.finish_search(ticket, Ok(mock_results()));
        let ticket = page.begin_search(request("Delhi", "Cafes"));
        page.finish_search(ticket, Ok(mock_results().into_iter().take(1).collect()));
        assert_eq!(page.results().len(), 1);
    }

    #[test]
    fn displayed_results_follow_tags_without_caching() {
        let mut page = SearchPage::default();
        let ticket = page.begin_search(request("Delhi", "Cafes"));
        page.finish_search(ticket, Ok(mock_results()));

        page.toggle_tag("pet-friendly");
        assert_eq!(page.displayed_results().len(), 1);
        page.toggle_tag("quiet");
        assert_eq!(page.displayed_results().len(), 2);
        page.toggle_tag("pet-friendly");
        page.toggle_tag("quiet");
        assert_eq!(page.displayed_results().len(), 2);
        assert!(page.active_tags().is_empty());
    }

    #[test]
    fn chat_context_mirrors_page_state() {
        let mut page = SearchPage::default();
        page.begin_search(request("Hyderabad", "Restaurants"));
        page.toggle_tag("romantic");
        page.toggle_tag("cozy");
        let ctx = page.chat_context();
        assert_eq!(ctx.city, "Hyderabad");
        assert_eq!(ctx.category, "Restaurants");
        assert_eq!(ctx.preferences, vec!["romantic".to_string(), "cozy".to_string()]);
    }
}
