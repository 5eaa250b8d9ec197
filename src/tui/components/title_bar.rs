//! # TitleBar Component
//!
//! Top header line showing which section of the platform the user is in.
//!
//! ## Responsibilities
//!
//! - Display the active navigation label, resolved from the current route
//!   (or the fallback label when no entry matches — e.g. on `/login` or a
//!   `/social` sub-route)
//! - Display transient status messages (e.g. "Loading quests...")
//! - Show who is signed in
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational — it receives all data as props and has
//! no internal state. The parent re-resolves the active label on every frame,
//! so the header always reflects the latest navigation event:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar {
//!     label: app.header_label().to_string(),
//!     status_message: app.status_message.clone(),
//!     account: app.account.clone(),
//! };
//! title_bar.render(frame, title_area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Quests (player-one) | Loading quests..."`
//! 2. **Default**: `"Quests (player-one)"`
//! 3. **Signed out**: `"Lounge (signed out)"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

/// Top header component showing section label, account, and status.
pub struct TitleBar {
    /// Resolved navigation label (already fallback-substituted by the caller)
    pub label: String,
    /// Transient status (e.g. "Loading quests...", "Signed out")
    pub status_message: String,
    /// Signed-in account, if any
    pub account: Option<String>,
}

impl TitleBar {
    pub fn new(label: String, status_message: String, account: Option<String>) -> Self {
        Self {
            label,
            status_message,
            account,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let who = match &self.account {
            Some(account) => account.as_str(),
            None => "signed out",
        };

        let title_text = if self.status_message.is_empty() {
            format!("{} ({})", self.label, who)
        } else {
            format!("{} ({}) | {}", self.label, who, self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_new() {
        let title_bar = TitleBar::new(
            "Quests".to_string(),
            "Loading quests...".to_string(),
            Some("player-one".to_string()),
        );

        assert_eq!(title_bar.label, "Quests");
        assert_eq!(title_bar.status_message, "Loading quests...");
        assert_eq!(title_bar.account.as_deref(), Some("player-one"));
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "Games".to_string(),
            "2 quests".to_string(),
            Some("player-one".to_string()),
        );

        let text = render_to_string(&mut title_bar);
        assert!(text.contains("Games"));
        assert!(text.contains("player-one"));
        assert!(text.contains("2 quests"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new(
            "Quests".to_string(),
            "".to_string(),
            Some("player-one".to_string()),
        );

        let text = render_to_string(&mut title_bar);
        assert!(text.contains("Quests"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_title_bar_signed_out() {
        let mut title_bar = TitleBar::new("Lounge".to_string(), "".to_string(), None);

        let text = render_to_string(&mut title_bar);
        assert!(text.contains("Lounge"));
        assert!(text.contains("signed out"));
    }
}
