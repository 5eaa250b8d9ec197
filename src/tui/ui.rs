use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{NavBar, QuestOverlay, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, nav_area, main_area, help_area] = layout.areas(frame.area());

    // Title bar: the header label is re-resolved from the current route on
    // every frame, so it always tracks the latest navigation event.
    let mut title_bar = TitleBar::new(
        app.header_label().to_string(),
        app.status_message.clone(),
        app.account.clone(),
    );
    title_bar.render(frame, title_area);

    let mut nav_bar = NavBar::new(app.nav_entries.clone(), app.current_path.clone());
    nav_bar.render(frame, nav_area);

    // Main area - show error OR route content
    if let Some(error_msg) = &app.error {
        draw_error_view(frame, main_area, error_msg);
    } else {
        draw_route_view(frame, main_area, app);
    }

    draw_help_line(frame, help_area, tui);

    // Quest overlay on top of everything
    if let Some(ref mut overlay_state) = tui.quest_overlay {
        QuestOverlay::new(overlay_state, &app.allowlist).render(frame, main_area);
    }
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(error_msg)
        .block(Block::bordered().title("ERROR"))
        .alignment(Alignment::Center);

    frame.render_widget(error_paragraph, area);
}

/// Route-specific content. Screens are intentionally shallow: the platform
/// is served remotely and this client surfaces feeds and account state.
fn draw_route_view(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    if app.current_path == "/login" || app.current_path.starts_with("/login/") {
        lines.push(Line::from("You are signed out."));
        lines.push(Line::from(
            "Set an API token (config or LOUNGE_API_TOKEN) and restart to sign in.",
        ));
    } else if app.current_path.starts_with("/quests") {
        if app.quests.is_empty() {
            lines.push(Line::from("No quests loaded. Press r to refresh."));
        } else {
            for quest in &app.quests {
                lines.push(Line::from(vec![
                    Span::styled(quest.title.clone(), Style::default().fg(Color::Cyan)),
                    Span::raw(format!("  {} pts", quest.reward)),
                ]));
            }
            lines.push(Line::from(""));
            lines.push(Line::from("Press Enter for quest details."));
        }
    } else if app.current_path.starts_with("/profile") {
        match &app.account {
            Some(account) => lines.push(Line::from(format!("Account: {}", account))),
            None => lines.push(Line::from("No account. Sign in to see your profile.")),
        }
        lines.push(Line::from(format!(
            "Image allowlist: {} pattern(s)",
            app.allowlist.len()
        )));
    } else {
        // /games, /social and anything else: remote sections, not mirrored here
        lines.push(Line::from(format!(
            "{} lives on the platform; this client only tracks where you are.",
            app.header_label()
        )));
        lines.push(Line::from(format!("Current route: {}", app.current_path)));
    }

    let body = Paragraph::new(lines)
        .block(Block::bordered().title(app.header_label().to_string()))
        .wrap(Wrap { trim: true });
    frame.render_widget(body, area);
}

fn draw_help_line(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let help = if tui.confirm_sign_out {
        " Press x again to sign out | any other key cancels "
    } else {
        " Tab Next  1-9 Jump  Enter Quests  r Refresh  x Sign out  q/Esc Quit "
    };
    frame.render_widget(
        Span::styled(help, Style::default().fg(Color::DarkGray)),
        area,
    );
}
