//! Search header form: free-text query, city and category pickers, and the submit gate.

use tracing::debug;

use crate::catalog::{is_category, is_city};
use crate::types::SearchRequest;

/// Local state of the search header. The page owns everything after submission,
/// so submitting never clears these fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchForm {
    query: String,
    city: String,
    category: String,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
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

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Pick a city from the fixed list. Anything else is rejected and the field is left as is.
    pub fn select_city(&mut self, city: &str) -> bool {
        if is_city(city) {
            self.city = city.to_string();
            true
        } else {
            debug!(city, "Rejected city outside the catalog");
            false
        }
    }

    /// Pick a category from the fixed list. Anything else is rejected and the field is left as is.
    pub fn select_category(&mut self, category: &str) -> bool {
        if is_category(category) {
            self.category = category.to_string();
            true
        } else {
            debug!(category, "Rejected category outside the catalog");
            false
        }
    }

    /// City and category are both chosen and no search is in flight.
    pub fn can_submit(&self, loading: bool) -> bool {
        !loading && !self.city.is_empty() && !self.category.is_empty()
    }

    /// Build the search intent, or `None` when submission is blocked.
    pub fn submit(&self, loading: bool) -> Option<SearchRequest> {
        if !self.can_submit(loading) {
            return None;
        }
        Some(SearchRequest {
            free_text_query: self.query.clone(),
            city: self.city.clone(),
            category: self.category.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CATEGORIES, CITIES};

    #[test]
    fn submit_blocked_without_city_or_category() {
        for query in ["", "   ", "cozy cafes with good WiFi"] {
            let mut form = SearchForm::new();
            form.set_query(query);
            assert!(form.submit(false).is_none());

            form.select_city("Delhi");
            assert!(form.submit(false).is_none(), "submitted without category for {query:?}");

            let mut form = SearchForm::new();
            form.set_query(query);
            form.select_category("Cafes");
            assert!(form.submit(false).is_none(), "submitted without city for {query:?}");
        }
    }

    #[test]
    fn every_city_category_pair_submits() {
        for city in CITIES {
            for category in CATEGORIES {
                let mut form = SearchForm::new();
                assert!(form.select_city(city));
                assert!(form.select_category(category));
                let req = form.submit(false).unwrap();
                assert_eq!(req.city, *city);
                assert_eq!(req.category, *category);
                assert_eq!(req.free_text_query, "");
            }
        }
    }

    #[test]
    fn submit_blocked_while_loading() {
        let mut form = SearchForm::new();
        form.select_city("Pune");
        form.select_category("Parks");
        assert!(!form.can_submit(true));
        assert!(form.submit(true).is_none());
        assert!(form.submit(false).is_some());
    }

    #[test]
    fn unknown_values_are_rejected() {
        let mut form = SearchForm::new();
        form.select_city("Mumbai");
        assert!(!form.select_city("Atlantis"));
        assert_eq!(form.city(), "Mumbai");
        assert!(!form.select_category(""));
        assert_eq!(form.category(), "");
    }

    #[test]
    fn submit_keeps_form_state() {
        let mut form = SearchForm::new();
        form.set_query("rooftop");
        form.select_city("Bangalore");
        form.select_category("Bars");
        let req = form.submit(false).unwrap();
        assert_eq!(req.free_text_query, "rooftop");
        assert_eq!(form.query(), "rooftop");
        assert_eq!(form.city(), "Bangalore");
        assert_eq!(form.category(), "Bars");
    }
}
