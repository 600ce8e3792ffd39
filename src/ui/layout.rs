//! Layout components (main area, status bar)

use crate::platform::{SUBMIT_SHORTCUT, TOGGLE_PASSWORD_SHORTCUT};
use crate::state::{AppState, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![];

    // Options status
    let options_status = if state.options_loaded {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(options_status);
    spans.push(Span::styled(
        get_hints(state),
        Style::default().fg(Color::Gray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the current screen and focus
fn get_hints(state: &AppState) -> String {
    if state.has_errors() {
        return "Enter/Esc:dismiss".to_string();
    }
    if state.is_submitted() {
        return "Enter/Esc:quit".to_string();
    }
    match state.form.focus {
        Focus::State | Focus::Occupation => {
            format!("Tab:next  ←/→:choose  {SUBMIT_SHORTCUT}:submit  Esc:quit")
        }
        Focus::PasswordToggle => {
            format!("Tab:next  Enter:show/hide  {SUBMIT_SHORTCUT}:submit  Esc:quit")
        }
        Focus::Submit => "Tab:next  Enter:submit  Esc:quit".to_string(),
        _ => format!(
            "Tab:next  {TOGGLE_PASSWORD_SHORTCUT}:show/hide password  \
             {SUBMIT_SHORTCUT}:submit  Esc:quit"
        ),
    }
}
