//! # Application State
//!
//! Core business state for Lounge. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── gateway: Arc<dyn PlatformGateway>  // hosted platform API
//! ├── current_path: String       // active route, e.g. "/games/123"
//! ├── nav_entries: Vec<NavEntry> // ordered navigation entries
//! ├── fallback_label: String     // header label when no entry matches
//! ├── status_message: String     // status bar text
//! ├── account: Option<String>    // signed-in account name
//! ├── token: Option<String>      // bearer token for gateway calls
//! ├── quests: Vec<Quest>         // last fetched quest feed
//! ├── is_loading: bool           // waiting for the gateway
//! ├── error: Option<String>      // error message
//! └── allowlist: OriginAllowlist // remote-image origin gate
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::api::{PlatformGateway, Quest};
use crate::core::allowlist::OriginAllowlist;
use crate::core::config::ResolvedConfig;
use crate::core::nav::{self, NavEntry};

pub struct App {
    pub gateway: Arc<dyn PlatformGateway>,
    pub current_path: String,
    pub nav_entries: Vec<NavEntry>,
    pub fallback_label: String,
    pub status_message: String,
    pub account: Option<String>,
    pub token: Option<String>,
    pub quests: Vec<Quest>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub allowlist: OriginAllowlist,
}

impl App {
    pub fn new(gateway: Arc<dyn PlatformGateway>, start_route: String) -> Self {
        Self {
            gateway,
            current_path: start_route,
            nav_entries: crate::core::config::default_nav_entries(),
            fallback_label: crate::core::config::DEFAULT_FALLBACK_LABEL.to_string(),
            status_message: String::from("Welcome to Lounge!"),
            account: None,
            token: None,
            quests: Vec::new(),
            is_loading: false,
            error: None,
            allowlist: OriginAllowlist::default(),
        }
    }

    pub fn from_config(gateway: Arc<dyn PlatformGateway>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(gateway, config.start_route.clone());
        app.nav_entries = config.nav_entries.clone();
        app.fallback_label = config.fallback_label.clone();
        app.account = config.account.clone();
        app.token = config.api_token.clone();
        app.allowlist = OriginAllowlist::new(config.image_patterns.clone());
        app
    }

    /// The navigation entry the header should highlight, if any.
    /// Re-evaluated on every call; never cached across navigations.
    pub fn active_entry(&self) -> Option<&NavEntry> {
        nav::resolve_active(&self.current_path, &self.nav_entries)
    }

    /// The header title: the active entry's label, or the fallback.
    pub fn header_label(&self) -> &str {
        nav::active_label(&self.current_path, &self.nav_entries, &self.fallback_label)
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }
}
