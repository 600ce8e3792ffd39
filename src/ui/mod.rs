//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod success;

use crate::state::AppState;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    if state.is_submitted() {
        success::draw(frame, main_area);
    } else {
        forms::draw_registration(frame, main_area, state);
    }

    layout::draw_status_bar(frame, status_area, state);

    // Alerts render on top of everything else
    if let Some(message) = state.current_error() {
        render_error_dialog(frame, message);
    }
}
