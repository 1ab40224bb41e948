//! Modal overlays: creation dialog, delete confirmation, filter picker.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::app::{CreateDialog, DraftField};
use crate::models::Department;
use crate::view::FilterColumn;

/// Centered rectangle of at most `width` x `height` cells.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the new-department dialog over the table.
pub(super) fn render_create_dialog(
    frame: &mut ratatui::Frame<'_>,
    departments: &[Department],
    dialog: &CreateDialog,
) {
    let parent_label = match dialog.parent_choice {
        0 => "(none)".to_string(),
        i => departments
            .get(i - 1)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| "(none)".to_string()),
    };

    let fields = [
        (DraftField::Name, "Name", dialog.draft.name.clone()),
        (
            DraftField::Employees,
            "Employees",
            dialog.employees_input.clone(),
        ),
        (
            DraftField::Ambassador,
            "Ambassador",
            dialog.draft.ambassador.clone(),
        ),
        (DraftField::Parent, "Parent", format!("◀ {parent_label} ▶")),
    ];

    let lines: Vec<Line> = fields
        .into_iter()
        .map(|(field, label, value)| {
            let focused = dialog.focus == field;
            let marker = if focused { "▸ " } else { "  " };
            let style = if focused {
                Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{marker}{label:<11}{value}"), style))
        })
        .collect();

    let area = centered_rect(52, lines.len() as u16 + 2, frame.area());
    let block = Block::default()
        .title(" New department ")
        .borders(Borders::ALL);

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the bulk-delete confirmation prompt.
pub(super) fn render_confirm_delete(frame: &mut ratatui::Frame<'_>, count: usize) {
    let lines = vec![
        Line::from(format!("Delete {count} selected department(s)?")),
        Line::from(Span::styled(
            "y: delete    n: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let area = centered_rect(44, 4, frame.area());
    let block = Block::default()
        .title(" Confirm deletion ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the filter-column picker.
pub(super) fn render_filter_select(frame: &mut ratatui::Frame<'_>, index: usize) {
    let items: Vec<ListItem> = FilterColumn::ALL
        .iter()
        .map(|c| ListItem::new(c.label()))
        .collect();

    let area = centered_rect(28, FilterColumn::ALL.len() as u16 + 2, frame.area());
    let block = Block::default().title(" Filter by ").borders(Borders::ALL);

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Cyan),
    );
    let mut state = ListState::default().with_selected(Some(index));

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut state);
}
