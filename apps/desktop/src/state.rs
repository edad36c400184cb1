//! App-wide handles built once at startup: configuration and the two backend seams.

use std::sync::Arc;

use vibe_core::backend::{Concierge, MockSearchBackend, ScriptedConcierge, SearchBackend};
use vibe_core::types::VibeConfig;

/// Which tab of the page is showing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tab {
    Discover,
    Concierge,
    Map,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Discover, Tab::Concierge, Tab::Map];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Discover => "\u{1F50D} Discover",
            Tab::Concierge => "\u{1F4AC} AI Concierge",
            Tab::Map => "\u{1F5FA}\u{FE0F} Map View",
        }
    }
}

/// Shared search backend. Props compare by pointer.
#[derive(Clone)]
pub struct SearchHandle(pub Arc<dyn SearchBackend>);

impl PartialEq for SearchHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Shared concierge. Props compare by pointer.
#[derive(Clone)]
pub struct ConciergeHandle(pub Arc<dyn Concierge>);

impl PartialEq for ConciergeHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Immutable startup snapshot handed to the root component.
#[derive(Clone)]
pub struct AppState {
    pub config: VibeConfig,
    pub search: SearchHandle,
    pub concierge: ConciergeHandle,
}

impl AppState {
    pub fn from_config(config: VibeConfig) -> Self {
        let search: Arc<dyn SearchBackend> = Arc::new(MockSearchBackend::from_config(&config));
        let concierge: Arc<dyn Concierge> = Arc::new(ScriptedConcierge::from_config(&config));
        AppState {
            config,
            search: SearchHandle(search),
            concierge: ConciergeHandle(concierge),
        }
    }

    /// Take the state stored by `main`, or build defaults if there is none.
    pub fn take_initial() -> Self {
        crate::INITIAL_STATE
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
            .unwrap_or_else(|| AppState::from_config(VibeConfig::default()))
    }
}
