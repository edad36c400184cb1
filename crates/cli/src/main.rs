//! Vibe Navigator CLI — run the simulated search and the concierge from a terminal.
//!
//! Calls `vibe-core` directly; the same page container and chat session the app uses.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use vibe_core::backend::{MockSearchBackend, ScriptedConcierge};
use vibe_core::catalog::{glyph_for, CATEGORIES, CITIES, VIBE_TAGS};
use vibe_core::chat::ChatSession;
use vibe_core::header::SearchForm;
use vibe_core::page::SearchPage;
use vibe_core::types::*;
use vibe_core::load_vibe_config;

/// Vibe Navigator CLI — discover places by vibe from the terminal.
#[derive(Parser)]
#[command(name = "vibe", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Directory holding .vibe.toml (default: current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a search and print the matching vibe cards
    Search {
        /// City to search in
        #[arg(long)]
        city: String,

        /// Place category
        #[arg(long)]
        category: String,

        /// Free-text description of what you want
        #[arg(long, default_value = "")]
        query: String,

        /// Narrow results by vibe tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Print the cited reviews behind each summary
        #[arg(long)]
        citations: bool,
    },
    /// Chat with the vibe concierge; one message per line, EOF to quit
    Chat {
        #[arg(long, default_value = "")]
        city: String,

        #[arg(long, default_value = "")]
        category: String,

        /// Vibe preferences to mention (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Seed for reply selection (overrides chat_seed in .vibe.toml)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List cities, categories and vibe tags
    Catalog,
}

fn resolve_config(dir: Option<PathBuf>) -> VibeConfig {
    match dir.or_else(|| std::env::current_dir().ok()) {
        Some(dir) => load_vibe_config(&dir),
        None => VibeConfig::default(),
    }
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Could not serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn stars(rating: u8) -> String {
    "\u{2605}".repeat(rating as usize)
}

/// Exit status for a finished search: 1 when no card is displayed, whatever the output mode.
fn search_status(shown: &[&ResultItem]) -> i32 {
    if shown.is_empty() {
        1
    } else {
        0
    }
}

fn print_cards(shown: &[&ResultItem], page: &SearchPage, citations: bool) {
    let plural = if shown.len() == 1 { "" } else { "s" };
    println!("Found {} perfect vibe{plural} for you!\n", shown.len());
    for item in shown {
        println!("{}  {}", item.name, item.mood_glyph);
        println!("  {}", item.location);
        println!("  \u{2605} {:.1}  \u{00B7}  {} reviews", item.vibe_score, item.review_count);
        let badges: Vec<String> = item
            .vibe_tags
            .iter()
            .map(|t| if page.active_tags().contains(t) { format!("[{t}]") } else { t.clone() })
            .collect();
        println!("  {}", badges.join(" "));
        println!("  {}", item.summary);
        if citations {
            for review in &item.cited_reviews {
                println!("    {:<12} {:<5} \"{}\"", review.platform, stars(review.rating), review.text);
            }
        }
        println!();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vibe=warn".parse().expect("static directive parses")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(cli.config);

    match cli.command {
        Commands::Search { city, category, query, tags, citations } => {
            let mut form = SearchForm::new();
            form.set_query(query);
            if !form.select_city(&city) {
                eprintln!("Unknown city '{city}' (choose from: {})", CITIES.join(", "));
                std::process::exit(2);
            }
            if !form.select_category(&category) {
                eprintln!("Unknown category '{category}' (choose from: {})", CATEGORIES.join(", "));
                std::process::exit(2);
            }
            let mut page = SearchPage::new(config.tag_match);
            let Some(request) = form.submit(page.is_loading()) else {
                eprintln!("City and category are required");
                std::process::exit(2);
            };

            for tag in &tags {
                if !page.active_tags().contains(tag) {
                    page.toggle_tag(tag);
                }
            }

            let backend = MockSearchBackend::from_config(&config);
            eprintln!("Searching {category} in {city}...");
            page.run_search(&backend, request).await;
            let shown = page.displayed_results();

            if cli.json {
                print_json(&shown);
            } else if shown.is_empty() {
                eprintln!("No places match the selected vibes");
            } else {
                print_cards(&shown, &page, citations);
            }
            let status = search_status(&shown);
            if status != 0 {
                std::process::exit(status);
            }
        }
        Commands::Chat { city, category, tags, seed } => {
            let context = ChatContext {
                city,
                category,
                preferences: tags.iter().collect::<vibe_core::filters::ActiveVibeTags>().to_vec(),
            };
            let concierge = match seed.or(config.chat_seed) {
                Some(seed) => ScriptedConcierge::with_seed(config.reply_delay(), seed),
                None => ScriptedConcierge::from_entropy(config.reply_delay()),
            };
            let mut session = ChatSession::new(context);
            let mut printed = 0;
            let emit = |session: &ChatSession, printed: &mut usize| {
                for msg in &session.messages()[*printed..] {
                    if cli.json {
                        match serde_json::to_string(msg) {
                            Ok(line) => println!("{line}"),
                            Err(e) => eprintln!("Could not serialize message: {e}"),
                        }
                    } else if msg.author == ChatAuthor::Bot {
                        println!("concierge> {}", msg.content);
                    }
                }
                *printed = session.messages().len();
            };
            emit(&session, &mut printed);

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                let line = match lines.next_line().await {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        eprintln!("Could not read input: {e}");
                        std::process::exit(1);
                    }
                };
                if session.send_message(&concierge, &line).await {
                    emit(&session, &mut printed);
                }
            }
        }
        Commands::Catalog => {
            if cli.json {
                print_json(&serde_json::json!({
                    "cities": CITIES,
                    "categories": CATEGORIES,
                    "vibeTags": VIBE_TAGS,
                }));
            } else {
                println!("Cities:      {}", CITIES.join(", "));
                println!("Categories:  {}", CATEGORIES.join(", "));
                println!("\nVibe tags:");
                for option in VIBE_TAGS {
                    println!("  {} {}", glyph_for(option.tag), option.tag);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibe_core::catalog::mock_results;
    use vibe_core::filters::{filter_results, ActiveVibeTags};

    #[test]
    fn empty_display_fails_the_search() {
        let results = mock_results();
        let active: ActiveVibeTags = ["romantic"].into_iter().collect();
        let shown = filter_results(&results, &active, TagMatch::Any);
        assert!(shown.is_empty());
        assert_eq!(search_status(&shown), 1);
    }

    #[test]
    fn displayed_cards_succeed() {
        let results = mock_results();
        let shown = filter_results(&results, &ActiveVibeTags::new(), TagMatch::Any);
        assert_eq!(search_status(&shown), 0);
    }
}
