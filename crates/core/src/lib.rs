//! Vibe Navigator — state model for the vibe discovery page.
//!
//! Everything here is UI-independent: the desktop app and the CLI both drive the
//! same page container, header form, tag filters and chat session.
//!
//! # Modules
//!
//! - [`types`] — Core types: config, requests, result items, chat messages
//! - [`catalog`] — Cities, categories, vibe tags, suggested prompts, mock results
//! - [`header`] — Search header form and its submit gate
//! - [`filters`] — Active vibe tags, clear-all, result narrowing
//! - [`page`] — The page container that owns search state
//! - [`chat`] — Concierge chat session
//! - [`backend`] — Search and concierge seams with their simulated implementations

pub mod backend;
pub mod catalog;
pub mod chat;
pub mod filters;
pub mod header;
pub mod page;
pub mod types;

use std::path::Path;

use tracing::{debug, warn};

pub use types::*;

/// Name of the config file looked up in the project directory.
pub const CONFIG_FILE: &str = ".vibe.toml";

// ---------------------------------------------------------------------------
// .vibe.toml config loading
// ---------------------------------------------------------------------------

/// Known keys in `.vibe.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] =
    &["search_delay_ms", "reply_delay_ms", "skeleton_cards", "tag_match", "chat_seed"];

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn non_negative(table: &toml::Table, key: &str) -> Option<u64> {
    let value = table.get(key)?;
    match value.as_integer() {
        Some(n) if n >= 0 => Some(n as u64),
        _ => {
            warn!(key, value = %value, "Expected a non-negative integer in {CONFIG_FILE}, using default");
            None
        }
    }
}

/// Parse the contents of a `.vibe.toml` file on top of the defaults.
///
/// Never fails: bad values and unknown keys are reported with a warning and skipped.
pub fn parse_vibe_config(content: &str) -> VibeConfig {
    let mut config = VibeConfig::default();

    let table = match content.parse::<toml::Table>() {
        Ok(t) => t,
        Err(e) => {
            warn!(error = %e, "Failed to parse {CONFIG_FILE}");
            return config;
        }
    };

    // Validate keys — warn on unknown
    for key in table.keys() {
        if !KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            let suggestion = KNOWN_CONFIG_KEYS
                .iter()
                .min_by_key(|k| edit_distance(key, k))
                .copied()
                .unwrap_or_default();
            if edit_distance(key, suggestion) <= 3 {
                warn!(
                    key = key.as_str(),
                    suggestion,
                    "Unknown key in {CONFIG_FILE} — did you mean '{suggestion}'?"
                );
            } else {
                warn!(
                    key = key.as_str(),
                    "Unknown key in {CONFIG_FILE} (known keys: {})",
                    KNOWN_CONFIG_KEYS.join(", ")
                );
            }
        }
    }

    if let Some(ms) = non_negative(&table, "search_delay_ms") {
        config.search_delay_ms = ms;
    }
    if let Some(ms) = non_negative(&table, "reply_delay_ms") {
        config.reply_delay_ms = ms;
    }

    // skeleton_cards — clamp to something a grid can show
    if let Some(n) = non_negative(&table, "skeleton_cards") {
        if (1..=MAX_SKELETON_CARDS as u64).contains(&n) {
            config.skeleton_cards = n as usize;
        } else {
            warn!(value = n, max = MAX_SKELETON_CARDS, "skeleton_cards out of range, using default");
        }
    }

    if let Some(value) = table.get("tag_match") {
        match value.as_str().and_then(TagMatch::parse) {
            Some(mode) => config.tag_match = mode,
            None => warn!(value = %value, "tag_match must be \"any\" or \"all\", using default"),
        }
    }

    if let Some(seed) = non_negative(&table, "chat_seed") {
        config.chat_seed = Some(seed);
    }

    config
}

/// Load configuration from `.vibe.toml` in `project_root`.
///
/// Returns defaults when the file is missing or unreadable.
pub fn load_vibe_config(project_root: &Path) -> VibeConfig {
    let config_path = project_root.join(CONFIG_FILE);
    if !config_path.exists() {
        return VibeConfig::default();
    }

    debug!(path = %config_path.display(), "Loading {CONFIG_FILE}");
    match std::fs::read_to_string(&config_path) {
        Ok(content) => parse_vibe_config(&content),
        Err(e) => {
            warn!(path = %config_path.display(), error = %e, "Could not read {CONFIG_FILE}");
            VibeConfig::default()
        }
    }
}
