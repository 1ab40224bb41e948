//! Terminal rendering.
//!
//! Splits the screen into header/table/footer regions and overlays modal
//! dialogs on top when the corresponding input mode is active. Rendering is
//! a pure projection of [`App`] state; the only thing it mutates is the
//! table's cursor/scroll state.

mod dialog;
mod status_bar;
mod table;

use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::{App, Mode};

/// Render a full frame.
pub fn draw(frame: &mut ratatui::Frame<'_>, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(frame.area());

    status_bar::render_header(frame, chunks[0], app);
    table::render_table(frame, chunks[1], app);
    status_bar::render_footer(frame, chunks[2], app);

    match &app.mode {
        Mode::Create(dialog) => dialog::render_create_dialog(frame, &app.departments, dialog),
        Mode::ConfirmDelete => dialog::render_confirm_delete(frame, app.view.selected.len()),
        Mode::FilterSelect { index } => dialog::render_filter_select(frame, *index),
        Mode::Browse | Mode::Search => {}
    }
}
