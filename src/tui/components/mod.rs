//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top header showing the resolved section label and status
//! - `NavBar`: Tab strip with the active route highlighted
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `QuestOverlay`: Centered quest browser (selection, refresh, dismiss)
//!
//! ## Design Philosophy
//!
//! Components receive external data as "props", not by reaching into global
//! state, so dependencies stay explicit and every component can be rendered
//! against a `TestBackend` in isolation. Each component file contains its
//! state types, event types, rendering logic, and tests.

mod nav_bar;
mod title_bar;
pub use nav_bar::NavBar;
pub use title_bar::TitleBar;

pub mod quest_overlay;
pub use quest_overlay::{QuestEvent, QuestOverlay, QuestOverlayState};
