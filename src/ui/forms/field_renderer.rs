//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything needed to draw one input box
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub is_active: bool,
    /// Mirrors the field's invalid marker
    pub is_invalid: bool,
    /// Select fields show arrows instead of a cursor
    pub is_select: bool,
}

fn border_style(view: &FieldView) -> Style {
    if view.is_invalid {
        Style::default().fg(Color::Red)
    } else if view.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// The last `max_chars` characters of `value`
fn visible_tail(value: &str, max_chars: usize) -> &str {
    let count = value.chars().count();
    if count <= max_chars {
        return value;
    }
    let start = value
        .char_indices()
        .nth(count - max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len());
    &value[start..]
}

/// The spans rendered inside a field box `width` columns wide
///
/// An active text field scrolls so its tail and the cursor stay in view.
fn field_spans<'a>(view: &FieldView<'a>, width: usize) -> Vec<Span<'a>> {
    let value_span = if view.value.is_empty() {
        Span::styled(
            view.placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else if view.is_active && !view.is_select {
        let shown = visible_tail(view.value, width.saturating_sub(1));
        Span::styled(shown, Style::default().fg(Color::Cyan))
    } else if view.is_active {
        Span::styled(view.value, Style::default().fg(Color::Cyan))
    } else {
        Span::raw(view.value)
    };

    match (view.is_select, view.is_active) {
        (true, true) => vec![
            Span::styled("◀ ", Style::default().fg(Color::Cyan)),
            value_span,
            Span::styled(" ▶", Style::default().fg(Color::Cyan)),
        ],
        (true, false) => vec![
            value_span,
            Span::styled(" ▾", Style::default().fg(Color::DarkGray)),
        ],
        (false, true) => vec![
            value_span,
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        ],
        (false, false) => vec![value_span],
    }
}

/// Draw a bordered single-line field
pub fn draw_field(frame: &mut Frame, area: Rect, view: &FieldView) {
    let title = if view.is_invalid {
        format!(" {} (invalid) ", view.label)
    } else {
        format!(" {} ", view.label)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(view));

    let width = usize::from(area.width.saturating_sub(2));
    let line = Line::from(field_spans(view, width));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw the validation message line under a field; blank when there is none
pub fn draw_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let line = Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}
