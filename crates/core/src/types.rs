//! Core types shared across Vibe Navigator: runtime configuration, search requests,
//! result items with their cited reviews, chat messages, and the vibe tag catalog entry.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Runtime configuration
// ---------------------------------------------------------------------------

/// How the active vibe tags narrow the result list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagMatch {
    /// A result is shown when it carries at least one active tag.
    #[default]
    Any,
    /// A result is shown only when it carries every active tag.
    All,
}

impl TagMatch {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "any" => Some(TagMatch::Any),
            "all" => Some(TagMatch::All),
            _ => None,
        }
    }
}

/// Runtime configuration. Loaded from `.vibe.toml` or defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct VibeConfig {
    /// Simulated search latency in milliseconds.
    pub search_delay_ms: u64,
    /// Simulated concierge latency in milliseconds.
    pub reply_delay_ms: u64,
    /// Number of skeleton cards shown while a search is in flight.
    pub skeleton_cards: usize,
    pub tag_match: TagMatch,
    /// Fixed seed for canned reply selection. `None` seeds from entropy.
    pub chat_seed: Option<u64>,
}

pub const DEFAULT_SEARCH_DELAY_MS: u64 = 2000;
pub const DEFAULT_REPLY_DELAY_MS: u64 = 2000;
pub const DEFAULT_SKELETON_CARDS: usize = 3;
pub const MAX_SKELETON_CARDS: usize = 12;

impl Default for VibeConfig {
    fn default() -> Self {
        Self {
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            skeleton_cards: DEFAULT_SKELETON_CARDS,
            tag_match: TagMatch::Any,
            chat_seed: None,
        }
    }
}

impl VibeConfig {
    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// A search intent raised by the header. Consumed once by the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub free_text_query: String,
    pub city: String,
    pub category: String,
}

/// A third-party review excerpt backing a result's summary.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CitedReview {
    pub id: u32,
    pub text: String,
    pub platform: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
}

/// A single place returned by a search.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    pub id: u32,
    pub name: String,
    pub location: String,
    /// Aggregate vibe rating, 0.0 to 5.0.
    pub vibe_score: f32,
    pub primary_vibe: String,
    /// Unique tags in display order.
    pub vibe_tags: Vec<String>,
    pub summary: String,
    #[serde(rename = "mood")]
    pub mood_glyph: String,
    pub review_count: u32,
    pub cited_reviews: Vec<CitedReview>,
}

impl ResultItem {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.vibe_tags.iter().any(|t| t == tag)
    }
}

// ---------------------------------------------------------------------------
// Vibe tag catalog
// ---------------------------------------------------------------------------

/// One chip in the vibe filter bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VibeTagOption {
    pub tag: &'static str,
    pub glyph: &'static str,
    /// Accent color name used by the chip when active.
    pub color: &'static str,
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatAuthor {
    Bot,
    User,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub author: ChatAuthor,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

/// What the concierge knows about the current search when a chat starts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ChatContext {
    pub city: String,
    pub category: String,
    /// Active vibe tags, in activation order.
    pub preferences: Vec<String>,
}
