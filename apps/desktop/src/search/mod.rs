//! Search controls — the header form and the vibe filter bar.

mod search_header;
mod vibe_filters;

pub use search_header::SearchHeader;
pub use vibe_filters::CategoryFilters;
