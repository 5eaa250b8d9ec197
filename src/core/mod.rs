//! # Core Application Logic
//!
//! This module contains Lounge's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • nav resolver         │
//!                    │  • origin allowlist     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.*  │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    API     │      │  session   │
//!     │  Adapter   │      │  gateway   │      │   file     │
//!     │ (ratatui)  │      │ (reqwest)  │      │  (~/.lounge)│
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! *`config` and `session` are the exceptions: they own the filesystem edges.
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum — everything that can happen in the app
//! - [`nav`]: Navigation entries and the active-link resolver
//! - [`allowlist`]: Remote-image origin allowlist
//! - [`config`]: TOML config with layered overrides
//! - [`session`]: Local credential persistence

pub mod action;
pub mod allowlist;
pub mod config;
pub mod nav;
pub mod session;
pub mod state;
