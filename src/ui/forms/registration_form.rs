//! Registration form rendering

use super::field_renderer::{draw_error, draw_field, FieldView};
use crate::state::{AppState, Field, Focus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of a field box plus its error line
const FIELD_ROWS: u16 = 4;

/// Width of the Show/Hide button next to the password
const TOGGLE_WIDTH: u16 = 10;

/// Fields in the order they appear on screen
const DISPLAY_ORDER: [Field; 5] = [
    Field::Name,
    Field::Email,
    Field::Password,
    Field::State,
    Field::Occupation,
];

/// Draw the registration form
pub fn draw_registration(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" User Registration Form ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = DISPLAY_ORDER
        .iter()
        .map(|_| Constraint::Length(FIELD_ROWS))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Length(1)); // Options notice
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (idx, field) in DISPLAY_ORDER.iter().enumerate() {
        draw_field_with_error(frame, chunks[idx], state, *field);
    }

    let submit_area = centered_width(chunks[DISPLAY_ORDER.len()], 16);
    render_button(
        frame,
        submit_area,
        "Submit",
        state.form.focus == Focus::Submit,
        true,
    );

    let notice = if state.options_loading {
        Some(("Loading occupations and states...", Color::DarkGray))
    } else if !state.options_loaded {
        Some((
            "Options unavailable: occupation and state have no choices",
            Color::Yellow,
        ))
    } else {
        None
    };
    if let Some((text, color)) = notice {
        let notice = Paragraph::new(text).style(
            Style::default()
                .fg(color)
                .add_modifier(Modifier::DIM),
        );
        frame.render_widget(notice, chunks[DISPLAY_ORDER.len() + 1]);
    }
}

/// Draw one field box and the error line beneath it
fn draw_field_with_error(frame: &mut Frame, area: Rect, state: &AppState, field: Field) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let form = &state.form;
    let value = form.data.get(field);
    let password_display;
    let shown = match field {
        Field::Password => {
            password_display = form.password_display();
            password_display.as_str()
        }
        _ if field.is_select() => state.options.display_value(field, value),
        _ => value,
    };

    let view = FieldView {
        label: field.label(),
        value: shown,
        placeholder: field.placeholder(),
        is_active: form.focused_field() == Some(field),
        is_invalid: form.is_invalid(field),
        is_select: field.is_select(),
    };

    if field == Field::Password {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(TOGGLE_WIDTH)])
            .split(rows[0]);
        draw_field(frame, cols[0], &view);
        let toggle_label = if form.show_password { "Hide" } else { "Show" };
        render_button(
            frame,
            cols[1],
            toggle_label,
            form.focus == Focus::PasswordToggle,
            false,
        );
    } else {
        draw_field(frame, rows[0], &view);
    }

    draw_error(frame, rows[1], form.errors.message(field));
}

/// A horizontally centered slice of `area`
fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
