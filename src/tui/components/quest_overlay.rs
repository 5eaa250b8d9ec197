//! # Quest Overlay Component
//!
//! Centered overlay for browsing the quest feed. Opened with Enter,
//! dismissed with Esc.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `QuestOverlayState` lives in `TuiState`
//! - `QuestOverlay` is created each frame with borrowed state
//!
//! Quest banner images are remote; the overlay only prints an image URL when
//! the origin allowlist permits it, and shows a blocked marker otherwise.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};

use crate::api::Quest;
use crate::core::allowlist::OriginAllowlist;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Persistent state for the quest overlay.
pub struct QuestOverlayState {
    pub quests: Vec<Quest>,
    pub selected: usize,
    pub list_state: ListState,
}

impl QuestOverlayState {
    pub fn new(quests: Vec<Quest>) -> Self {
        let mut list_state = ListState::default();
        if !quests.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            quests,
            selected: 0,
            list_state,
        }
    }

    /// Replace the quest list (a refresh finished while the overlay is open),
    /// keeping the selection in range.
    pub fn sync_quests(&mut self, quests: Vec<Quest>) {
        self.quests = quests;
        if self.quests.is_empty() {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(self.quests.len() - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn selected_quest(&self) -> Option<&Quest> {
        self.quests.get(self.selected)
    }
}

impl EventHandler for QuestOverlayState {
    type Event = QuestEvent;

    /// Handle a key event, returning a QuestEvent if the overlay should act.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<QuestEvent> {
        match event {
            TuiEvent::Escape => Some(QuestEvent::Dismiss),
            TuiEvent::CursorUp => {
                if !self.quests.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.quests.is_empty() {
                    self.selected = (self.selected + 1).min(self.quests.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::InputChar('r') => Some(QuestEvent::Refresh),
            _ => None,
        }
    }
}

/// Events emitted by the quest overlay.
pub enum QuestEvent {
    Refresh,
    Dismiss,
}

/// Transient render wrapper for the quest overlay.
pub struct QuestOverlay<'a> {
    state: &'a mut QuestOverlayState,
    allowlist: &'a OriginAllowlist,
}

impl<'a> QuestOverlay<'a> {
    pub fn new(state: &'a mut QuestOverlayState, allowlist: &'a OriginAllowlist) -> Self {
        Self { state, allowlist }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 70, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Quests ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" r Refresh  ↑↓ Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        if self.state.quests.is_empty() {
            let empty = Paragraph::new("No active quests.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [list_area, detail_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(6)]).areas(inner);

        let items: Vec<ListItem> = self
            .state
            .quests
            .iter()
            .enumerate()
            .map(|(i, quest)| {
                let reward = format!("{} pts", quest.reward);
                let inner_width = list_area.width as usize;
                let fixed_width = reward.len() + 2;
                let title_width = inner_width.saturating_sub(fixed_width);
                let title = truncate_str(&quest.title, title_width);
                let padded_title = format!("{:<width$}", title, width = title_width);

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };

                let line = Line::from(vec![
                    Span::styled(padded_title, style),
                    Span::styled("  ", style),
                    Span::styled(reward, style),
                ]);

                ListItem::new(line)
            })
            .collect();

        let list = List::new(items);
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);

        if let Some(quest) = self.state.selected_quest() {
            render_detail(frame, detail_area, quest, self.allowlist);
        }
    }
}

/// Bottom pane: wrapped description plus the banner image line.
fn render_detail(frame: &mut Frame, area: Rect, quest: &Quest, allowlist: &OriginAllowlist) {
    let width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = textwrap::wrap(&quest.description, width.max(10))
        .into_iter()
        .map(|cow| Line::from(cow.into_owned()))
        .collect();

    if let Some(ref image_url) = quest.image_url {
        let image_line = if allowlist.permits(image_url) {
            Line::from(vec![
                Span::styled("banner: ", Style::default().fg(Color::DarkGray)),
                Span::raw(image_url.clone()),
            ])
        } else {
            Line::from(Span::styled(
                "banner: [blocked origin]",
                Style::default().fg(Color::Red),
            ))
        };
        lines.push(image_line);
    }

    let detail = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(truncate_str(&quest.title, area.width as usize)),
    );
    frame.render_widget(detail, area);
}

/// Truncate a string to fit within `max_width` chars, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.len() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        format!("{}...", &s[..max_width - 3])
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::allowlist::RemotePattern;
    use crate::test_support::test_quest;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn quests() -> Vec<Quest> {
        vec![test_quest("q1", "First Steps"), test_quest("q2", "Socialite")]
    }

    #[test]
    fn test_cursor_moves_clamp_to_range() {
        let mut state = QuestOverlayState::new(quests());
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);

        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 1);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = QuestOverlayState::new(quests());
        assert!(matches!(
            state.handle_event(&TuiEvent::Escape),
            Some(QuestEvent::Dismiss)
        ));
    }

    #[test]
    fn test_r_requests_refresh() {
        let mut state = QuestOverlayState::new(Vec::new());
        assert!(matches!(
            state.handle_event(&TuiEvent::InputChar('r')),
            Some(QuestEvent::Refresh)
        ));
    }

    #[test]
    fn test_sync_quests_clamps_selection() {
        let mut state = QuestOverlayState::new(quests());
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 1);

        state.sync_quests(vec![test_quest("q1", "First Steps")]);
        assert_eq!(state.selected, 0);

        state.sync_quests(Vec::new());
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn test_render_empty_and_populated() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let allowlist = OriginAllowlist::default();

        let mut state = QuestOverlayState::new(Vec::new());
        terminal
            .draw(|f| QuestOverlay::new(&mut state, &allowlist).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("No active quests."));

        let mut state = QuestOverlayState::new(quests());
        terminal
            .draw(|f| QuestOverlay::new(&mut state, &allowlist).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("First Steps"));
        assert!(text.contains("25 pts"));
    }

    #[test]
    fn test_blocked_banner_marker() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        // Allowlist only permits the CDN host
        let allowlist = OriginAllowlist::new(vec![RemotePattern {
            protocol: Some("https".to_string()),
            hostname: "cdn.lounge.gg".to_string(),
            port: None,
            pathname: Some("/**".to_string()),
        }]);

        let mut quest = test_quest("q1", "First Steps");
        quest.image_url = Some("https://evil.example/banner.png".to_string());
        let mut state = QuestOverlayState::new(vec![quest]);

        terminal
            .draw(|f| QuestOverlay::new(&mut state, &allowlist).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("[blocked origin]"));
        assert!(!text.contains("evil.example"));
    }
}
