//! Shared fixtures for the page and chat integration tests.

#![allow(dead_code)]

use std::time::Duration;

use vibe_core::header::SearchForm;
use vibe_core::types::SearchRequest;

/// Latency the simulated backends use by default.
pub const DELAY: Duration = Duration::from_millis(2000);

/// A header filled in the way the Delhi cafes walkthrough does it.
pub fn delhi_cafes_form(query: &str) -> SearchForm {
    let mut form = SearchForm::new();
    form.set_query(query);
    assert!(form.select_city("Delhi"));
    assert!(form.select_category("Cafes"));
    form
}

pub fn delhi_cafes() -> SearchRequest {
    delhi_cafes_form("").submit(false).expect("Delhi cafes form should submit")
}
