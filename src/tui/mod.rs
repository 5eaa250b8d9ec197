//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (web, etc.)
//! in the future if needed.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw: it sleeps up to 250ms in the
//! event poll and only draws when an event arrived or a background task
//! sent an action. Gateway calls (sign-out, quest fetch) run on tokio
//! tasks and report back through an `std::sync::mpsc` channel.

mod component;
mod components;
mod event;
mod ui;

use std::sync::{Arc, mpsc};

use log::{info, warn};

use crate::api::{HttpGateway, PlatformGateway};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::session::{self, StoredSession};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{QuestEvent, QuestOverlayState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Quest overlay (None = hidden)
    pub quest_overlay: Option<QuestOverlayState>,
    // Double-press guard for the destructive sign-out key
    pub confirm_sign_out: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            quest_overlay: None,
            confirm_sign_out: false,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the HTTP gateway from a resolved config.
pub fn build_gateway(config: &ResolvedConfig) -> Arc<dyn PlatformGateway> {
    Arc::new(HttpGateway::new(config.base_url.clone()))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let gateway = build_gateway(&config);
    let mut app = App::from_config(gateway, &config);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    restore_or_bootstrap_session(&mut app, &tx);

    // Kick off an initial quest fetch so /quests isn't empty on entry
    if app.is_signed_in() {
        let quit = dispatch(&mut app, Action::RefreshQuests, &tx);
        debug_assert!(!quit);
    }

    let mut terminal = ratatui::init();
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit |= dispatch(&mut app, Action::Quit, &tx);
                continue;
            }

            // The sign-out confirmation survives only an immediate second 'x'
            let is_sign_out_key = matches!(event, TuiEvent::InputChar('x'));
            if !is_sign_out_key {
                tui.confirm_sign_out = false;
            }

            // When the quest overlay is open, route all events to it
            if let Some(ref mut overlay) = tui.quest_overlay {
                if let Some(quest_event) = overlay.handle_event(&event) {
                    match quest_event {
                        QuestEvent::Refresh => {
                            should_quit |=
                                dispatch(&mut app, Action::RefreshQuests, &tx);
                        }
                        QuestEvent::Dismiss => {
                            tui.quest_overlay = None;
                        }
                    }
                }
                continue;
            }

            match event {
                TuiEvent::Escape | TuiEvent::InputChar('q') => {
                    should_quit |= dispatch(&mut app, Action::Quit, &tx);
                }
                TuiEvent::Submit => {
                    tui.quest_overlay = Some(QuestOverlayState::new(app.quests.clone()));
                }
                TuiEvent::NavNext => {
                    should_quit |=
                        dispatch(&mut app, Action::CycleNav { reverse: false }, &tx);
                }
                TuiEvent::NavPrev => {
                    should_quit |=
                        dispatch(&mut app, Action::CycleNav { reverse: true }, &tx);
                }
                TuiEvent::InputChar('r') => {
                    should_quit |= dispatch(&mut app, Action::RefreshQuests, &tx);
                }
                TuiEvent::InputChar('x') => {
                    if tui.confirm_sign_out {
                        tui.confirm_sign_out = false;
                        should_quit |= dispatch(&mut app, Action::SignOut, &tx);
                    } else {
                        tui.confirm_sign_out = true;
                    }
                }
                TuiEvent::InputChar(c @ '1'..='9') => {
                    let index = c as usize - '1' as usize;
                    should_quit |= dispatch(&mut app, Action::JumpNav(index), &tx);
                }
                _ => {}
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (gateway responses)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if dispatch(&mut app, action, &tx) {
                should_quit = true;
            }
            // Keep an open overlay in step with a refreshed feed
            if let Some(ref mut overlay) = tui.quest_overlay {
                overlay.sync_quests(app.quests.clone());
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Run an action through the reducer and execute the resulting effect.
/// Returns true when the app should quit.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::Quit => true,
        Effect::SpawnSignOut => {
            spawn_sign_out(app, tx.clone());
            false
        }
        Effect::SpawnQuestFetch => {
            spawn_quest_fetch(app, tx.clone());
            false
        }
        Effect::ClearSession => {
            session::clear_session_logged();
            false
        }
    }
}

/// Load the stored session, or bootstrap one from a configured token so the
/// account survives restarts. Either way the app learns about it through the
/// same `SessionRestored` action.
fn restore_or_bootstrap_session(app: &mut App, tx: &mpsc::Sender<Action>) {
    match session::load_session() {
        Ok(Some(stored)) => {
            info!("Restored session for {}", stored.account);
            dispatch(app, Action::SessionRestored(stored), tx);
        }
        Ok(None) => {
            if let Some(token) = app.token.clone() {
                let account = app
                    .account
                    .clone()
                    .unwrap_or_else(|| String::from("player"));
                let stored = StoredSession::new(&account, &token);
                if let Err(e) = session::save_session(&stored) {
                    warn!("Failed to persist bootstrapped session: {}", e);
                }
                dispatch(app, Action::SessionRestored(stored), tx);
            }
        }
        Err(e) => {
            warn!("Failed to load stored session: {}", e);
        }
    }
}

/// Fire the sign-out call-through. The outcome is logged but never branched
/// on: the local session is dropped and the app lands on /login either way.
fn spawn_sign_out(app: &App, tx: mpsc::Sender<Action>) {
    info!("Spawning sign-out request");

    let gateway = app.gateway.clone();
    let token = app.token.clone().unwrap_or_default();

    tokio::spawn(async move {
        if let Err(e) = gateway.sign_out(&token).await {
            warn!("Sign-out gateway call failed: {}", e);
        }
        if tx.send(Action::SignedOut).is_err() {
            warn!("Failed to send SignedOut: receiver dropped");
        }
    });
}

fn spawn_quest_fetch(app: &App, tx: mpsc::Sender<Action>) {
    info!("Spawning quest fetch");

    let gateway = app.gateway.clone();
    let token = app.token.clone().unwrap_or_default();

    tokio::spawn(async move {
        let action = match gateway.fetch_quests(&token).await {
            Ok(quests) => Action::QuestsLoaded(quests),
            Err(e) => Action::QuestsFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send quest fetch result: receiver dropped");
        }
    });
}
