//! # Actions
//!
//! Everything that can happen in Lounge becomes an `Action`.
//! User presses Tab? That's `Action::CycleNav`.
//! Quest feed arrives? That's `Action::QuestsLoaded(quests)`.
//!
//! The `update()` function takes the current state and an action,
//! then returns an `Effect` describing what I/O the adapter should run.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: `assert_eq!(update(state, action), expected)`.
//! And debuggable: log every action, replay the exact session.

use log::{debug, warn};

use crate::api::Quest;
use crate::core::session::StoredSession;
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    /// Jump to a route. The header re-resolves on the next render.
    Navigate(String),
    /// Move to the next (or previous) navigation entry.
    CycleNav { reverse: bool },
    /// Jump to the nav entry at the given index (number keys).
    JumpNav(usize),
    /// Re-fetch the quest feed from the platform.
    RefreshQuests,
    QuestsLoaded(Vec<Quest>),
    QuestsFailed(String),
    /// A stored session was found on disk at startup.
    SessionRestored(StoredSession),
    /// User asked to sign out. Fires the gateway call-through.
    SignOut,
    /// Sign-out finished (in either direction): drop local credentials and
    /// land on /login. The gateway outcome is deliberately not inspected.
    SignedOut,
    Quit,
}

/// What the adapter must do after an update.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Spawn the sign-out gateway call; send `SignedOut` when it returns.
    SpawnSignOut,
    /// Spawn a quest-feed fetch; send `QuestsLoaded`/`QuestsFailed`.
    SpawnQuestFetch,
    /// Remove the local session file.
    ClearSession,
}

/// The reducer. Mutates `app` in place and returns the follow-up effect.
pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Navigate(path) => {
            app.current_path = path;
            app.status_message.clear();
            Effect::None
        }
        Action::CycleNav { reverse } => {
            if app.nav_entries.is_empty() {
                return Effect::None;
            }
            let len = app.nav_entries.len();
            let active_index = app
                .active_entry()
                .and_then(|active| app.nav_entries.iter().position(|e| e == active));
            let next = match active_index {
                Some(i) if reverse => (i + len - 1) % len,
                Some(i) => (i + 1) % len,
                // Nothing highlighted: start from the nearest end.
                None if reverse => len - 1,
                None => 0,
            };
            app.current_path = app.nav_entries[next].path.clone();
            app.status_message.clear();
            Effect::None
        }
        Action::JumpNav(index) => {
            if let Some(entry) = app.nav_entries.get(index) {
                app.current_path = entry.path.clone();
                app.status_message.clear();
            }
            Effect::None
        }
        Action::RefreshQuests => {
            if app.is_loading {
                return Effect::None;
            }
            if !app.is_signed_in() {
                app.status_message = String::from("Sign in to see quests");
                return Effect::None;
            }
            app.is_loading = true;
            app.status_message = String::from("Loading quests...");
            Effect::SpawnQuestFetch
        }
        Action::QuestsLoaded(quests) => {
            app.is_loading = false;
            app.status_message = format!("{} quests", quests.len());
            app.quests = quests;
            Effect::None
        }
        Action::QuestsFailed(message) => {
            warn!("Quest fetch failed: {}", message);
            app.is_loading = false;
            app.status_message = format!("Quest fetch failed: {}", message);
            Effect::None
        }
        Action::SessionRestored(session) => {
            app.status_message = format!("Signed in as {}", session.account);
            app.account = Some(session.account);
            app.token = Some(session.token);
            Effect::None
        }
        Action::SignOut => {
            if !app.is_signed_in() {
                // Nothing to terminate remotely; still land on /login.
                app.current_path = String::from("/login");
                app.status_message = String::from("Signed out");
                return Effect::ClearSession;
            }
            app.is_loading = true;
            app.status_message = String::from("Signing out...");
            Effect::SpawnSignOut
        }
        Action::SignedOut => {
            app.is_loading = false;
            app.account = None;
            app.token = None;
            app.quests.clear();
            app.current_path = String::from("/login");
            app.status_message = String::from("Signed out");
            Effect::ClearSession
        }
        Action::Quit => Effect::Quit,
    }
}
