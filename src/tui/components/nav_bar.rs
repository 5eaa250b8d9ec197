//! # NavBar Component
//!
//! One-line tab strip for the navigation entries. The highlighted tab is
//! whatever the active-link resolver picks for the current route, so a
//! sub-route like `/games/123` highlights "Games" while `/social/feed`
//! highlights nothing at all.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::nav::{NavEntry, resolve_active};
use crate::tui::component::Component;

pub struct NavBar {
    pub entries: Vec<NavEntry>,
    pub current_path: String,
}

impl NavBar {
    pub fn new(entries: Vec<NavEntry>, current_path: String) -> Self {
        Self {
            entries,
            current_path,
        }
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.entries.is_empty() {
            return;
        }

        let active = resolve_active(&self.current_path, &self.entries);

        // Give each tab an equal share of the width so narrow terminals
        // still show every entry: " [n] label " plus a separator space.
        let per_tab = (area.width as usize / self.entries.len()).max(6);
        let label_cols = per_tab.saturating_sub(6).max(1);

        let mut spans = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            let is_active = active == Some(entry);
            let style = if is_active {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            let label = fit_width(&entry.label, label_cols);
            spans.push(Span::styled(format!(" [{}] {} ", i + 1, label), style));
            spans.push(Span::raw(" "));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

/// Truncate `s` to at most `max` display columns, appending "…" if cut.
fn fit_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
