//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Style for a button's border, depending on focus
pub fn button_border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Style for a button's label, depending on focus
pub fn button_text_style(is_focused: bool, is_primary: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if is_primary {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    }
}

/// Render a bordered button with a centered label
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_focused: bool,
    is_primary: bool,
) {
    let paragraph = Paragraph::new(format!(" {label} "))
        .alignment(Alignment::Center)
        .style(button_text_style(is_focused, is_primary));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(button_border_style(is_focused));

    frame.render_widget(paragraph.block(block), area);
}
