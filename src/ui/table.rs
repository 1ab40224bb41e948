//! Department table (main body).

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::app::App;
use crate::hierarchy;
use crate::view::{SortColumn, SortDirection};

/// Render the flattened department table.
///
/// One row per derived record: selection marker, the record's own columns,
/// and the division column showing the root ancestor (empty for roots).
/// The active sort column carries a direction marker in the header.
pub(super) fn render_table(frame: &mut ratatui::Frame<'_>, area: Rect, app: &mut App) {
    let rows = app.visible_rows();
    let items: Vec<Row> = rows
        .iter()
        .map(|d| {
            let marker = if app.view.selected.contains(&d.id) {
                "[x]"
            } else {
                "[ ]"
            };
            Row::new(vec![
                Cell::from(marker.to_string()),
                Cell::from(d.id.to_string()),
                Cell::from(d.name.clone()),
                Cell::from(d.level.to_string()),
                Cell::from(d.employees.to_string()),
                Cell::from(d.ambassador.clone().unwrap_or_default()),
                Cell::from(hierarchy::division_label(d, &app.departments)),
            ])
        })
        .collect();

    let header = Row::new(header_cells(app)).style(Style::default().add_modifier(Modifier::BOLD));

    let table = Table::new(
        items,
        [
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(14),
            Constraint::Length(7),
            Constraint::Length(11),
            Constraint::Length(16),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Departments ")
            .borders(Borders::ALL),
    )
    .row_highlight_style(
        Style::default()
            .add_modifier(Modifier::REVERSED)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn header_cells(app: &App) -> Vec<Cell<'static>> {
    let mut cells = vec![Cell::from("")];
    for (i, column) in SortColumn::ALL.iter().enumerate() {
        let marker = if app.view.sort_column == Some(*column) {
            match app.view.sort_direction {
                SortDirection::Ascending => " ▲",
                SortDirection::Descending => " ▼",
            }
        } else {
            ""
        };
        cells.push(Cell::from(format!(
            "{} [{}]{}",
            capitalize(column.label()),
            i + 1,
            marker
        )));
    }
    cells.push(Cell::from("Division"));
    cells
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
