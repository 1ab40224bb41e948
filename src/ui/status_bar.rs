//! Header and footer chrome.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, Mode, Notice};
use crate::view::SortDirection;

/// Render the header: endpoint, row counts, filter/sort/selection summary.
pub(super) fn render_header(frame: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let shown = app.visible_rows().len();
    let total = app.departments.len();

    let sort_summary = match app.view.sort_column {
        Some(column) => format!(
            "{} {}",
            column.label(),
            match app.view.sort_direction {
                SortDirection::Ascending => "▲",
                SortDirection::Descending => "▼",
            }
        ),
        None => "none".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {shown}/{total} departments "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ filter: "),
        Span::styled(
            format!("{} \"{}\"", app.view.filter_column.label(), app.view.search_term),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" │ sort: "),
        Span::styled(sort_summary, Style::default().fg(Color::Cyan)),
        Span::raw(format!(" │ selected: {}", app.view.selected.len())),
    ]);

    let block = Block::default()
        .title(format!(" dept-admin — {} ", app.api.base_url()))
        .borders(Borders::ALL);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the footer: key hints for the active mode plus the notice line.
pub(super) fn render_footer(frame: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let hints = match app.mode {
        Mode::Browse => {
            "q quit │ j/k move │ space select │ / search │ f filter │ 1-5 sort │ a add │ d delete │ r reload"
        }
        Mode::Search => "type to search │ backspace erase │ enter/esc done",
        Mode::FilterSelect { .. } => "j/k choose column │ enter apply │ esc cancel",
        Mode::Create(_) => "tab/shift-tab field │ ←/→ pick parent │ enter save │ esc cancel",
        Mode::ConfirmDelete => "y delete │ n cancel",
    };

    let notice_line = match &app.notice {
        Some(Notice::Info(msg)) => Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(Color::Green),
        )),
        Some(Notice::Warning(msg)) => Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(Color::Yellow),
        )),
        Some(Notice::Error(msg)) => {
            Line::from(Span::styled(msg.clone(), Style::default().fg(Color::Red)))
        }
        None => Line::from(""),
    };

    let text = vec![
        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))),
        notice_line,
    ];
    frame.render_widget(Paragraph::new(text), area);
}
