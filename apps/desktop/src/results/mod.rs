//! Result cards and the citation dialog behind them.

mod citations;
mod vibe_cards;

pub use vibe_cards::VibeCards;
