//! Seams where a real search endpoint and a real concierge would plug in, plus the
//! simulated implementations the app ships with.
//!
//! Both simulations sleep for a fixed delay and always succeed. The `Result` in the
//! trait signatures is for real backends.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::catalog::mock_results;
use crate::types::{ChatContext, ResultItem, SearchRequest, VibeConfig};

/// Turns a search request into a result list.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<ResultItem>, String>;
}

/// Answers a chat message given the current search context.
#[async_trait]
pub trait Concierge: Send + Sync {
    async fn reply(&self, message: &str, context: &ChatContext) -> Result<String, String>;
}

// ---------------------------------------------------------------------------
// Simulated search
// ---------------------------------------------------------------------------

/// Waits `delay`, then returns the fixed mock payload regardless of the request.
pub struct MockSearchBackend {
    delay: Duration,
}

impl MockSearchBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &VibeConfig) -> Self {
        Self::new(config.search_delay())
    }
}

#[async_trait]
impl SearchBackend for MockSearchBackend {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<ResultItem>, String> {
        debug!(
            city = %request.city,
            category = %request.category,
            query = %request.free_text_query,
            delay_ms = self.delay.as_millis() as u64,
            "Simulating search"
        );
        tokio::time::sleep(self.delay).await;
        Ok(mock_results())
    }
}

// ---------------------------------------------------------------------------
// Scripted concierge
// ---------------------------------------------------------------------------

/// Number of canned reply templates.
pub const CANNED_REPLY_COUNT: usize = 3;

/// Render the canned reply templates for `context`. Only city, category and
/// preferences are interpolated; the user's words never are.
pub fn canned_replies(context: &ChatContext) -> [String; CANNED_REPLY_COUNT] {
    let prefs = if context.preferences.is_empty() {
        "any".to_string()
    } else {
        context.preferences.join(", ")
    };
    let city = if context.city.is_empty() { "your city" } else { context.city.as_str() };
    let category = if context.category.is_empty() {
        "places".to_string()
    } else {
        context.category.to_lowercase()
    };

    [
        format!(
            "Perfect! Based on your preferences for {prefs} vibes in {city}, I've got some amazing \
             recommendations. Let me tell you about \"Mystic Brew Café\" - reviewers on Google Maps \
             say it's \"like stepping into a fairy tale\" with \"the most aesthetic interior I've \
             ever seen.\" One TripAdvisor user mentioned it's \"perfect for deep conversations over \
             perfectly crafted lattes.\" \u{2615}\u{2728}"
        ),
        format!(
            "Oh, I love this request! For {category} with that vibe, there's this hidden gem called \
             \"The Garden Hideaway.\" A Reddit user described it as \"my go-to spot when I need to \
             feel inspired\" and another mentioned \"the plants everywhere make it feel like working \
             in a secret garden.\" The WiFi is apparently fantastic too! \u{1F33F}\u{1F4BB}"
        ),
        "Great question! I'm thinking of \"Sunset Terrace\" - the reviews are incredible. One \
         person wrote on Google Maps: \"Every corner is Instagram gold, but the food is what keeps \
         me coming back.\" Another mentioned it's \"buzzing with creative energy but not \
         overwhelmingly loud.\" Perfect for your vibe! \u{1F4F8}\u{1F37D}\u{FE0F}"
            .to_string(),
    ]
}

/// Waits `delay`, then answers with one of the canned templates picked by its RNG.
pub struct ScriptedConcierge {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl ScriptedConcierge {
    /// Deterministic selection: the same seed yields the same sequence of replies.
    pub fn with_seed(delay: Duration, seed: u64) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy(delay: Duration) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn from_config(config: &VibeConfig) -> Self {
        match config.chat_seed {
            Some(seed) => Self::with_seed(config.reply_delay(), seed),
            None => Self::from_entropy(config.reply_delay()),
        }
    }

    fn pick(&self) -> usize {
        // A poisoned lock only means another reply panicked mid-draw; the RNG state is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(0..CANNED_REPLY_COUNT)
    }
}

#[async_trait]
impl Concierge for ScriptedConcierge {
    async fn reply(&self, message: &str, context: &ChatContext) -> Result<String, String> {
        let idx = self.pick();
        info!(template = idx, chars = message.chars().count(), "Concierge replying");
        tokio::time::sleep(self.delay).await;
        let [a, b, c] = canned_replies(context);
        Ok(match idx {
            0 => a,
            1 => b,
            _ => c,
        })
    }
}
