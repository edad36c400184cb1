//! Vibe Navigator — Dioxus desktop app for vibe discovery.

use std::sync::Mutex;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing::info;

mod app;
mod chat;
mod map;
mod results;
mod search;
mod state;

use app::App;
use state::AppState;

/// Pre-runtime storage — built before Dioxus launches, consumed on first render.
pub static INITIAL_STATE: Mutex<Option<AppState>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vibe=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let config = vibe_core::load_vibe_config(&cwd);
    info!(
        search_delay_ms = config.search_delay_ms,
        reply_delay_ms = config.reply_delay_ms,
        tag_match = ?config.tag_match,
        "Configuration loaded"
    );
    *INITIAL_STATE.lock().unwrap() = Some(AppState::from_config(config));

    LaunchBuilder::new()
        .with_cfg(
            Config::default()
                .with_menu(None)
                .with_background_color((245, 243, 255, 255))
                .with_window(
                    WindowBuilder::new()
                        .with_title("Vibe Navigator")
                        .with_inner_size(LogicalSize::new(1280.0, 900.0))
                        .with_min_inner_size(LogicalSize::new(720.0, 560.0))
                        .with_resizable(true)
                        .with_decorations(true),
                ),
        )
        .launch(App);
}
