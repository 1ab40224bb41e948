//! Application state and event handling.
//!
//! `App` owns the loaded record collection, the view-model state, the active
//! input mode, and the table cursor. Key handling is synchronous and returns
//! a [`KeyResult`] telling the event loop which (if any) network operation to
//! run; all mutation happens on the UI task, and API calls are awaited from
//! the loop, so the record list and view state never need locking.

use std::io;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::TableState;
use ratatui::Terminal;

use crate::api::DepartmentsApi;
use crate::models::{Department, NewDepartment};
use crate::view::{FilterColumn, SortColumn, ViewState};

/// Rows jumped by PageUp/PageDown.
const PAGE_SIZE: usize = 10;

/// Status-line message with severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
    Error(String),
}

/// Field focus inside the creation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Employees,
    Ambassador,
    Parent,
}

impl DraftField {
    fn next(self) -> Self {
        match self {
            DraftField::Name => DraftField::Employees,
            DraftField::Employees => DraftField::Ambassador,
            DraftField::Ambassador => DraftField::Parent,
            DraftField::Parent => DraftField::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            DraftField::Name => DraftField::Parent,
            DraftField::Employees => DraftField::Name,
            DraftField::Ambassador => DraftField::Employees,
            DraftField::Parent => DraftField::Ambassador,
        }
    }
}

/// State behind the creation dialog.
///
/// Holds the draft plus the edit buffers that have no direct field on the
/// wire type: the employee count is typed as digits and parsed on submit,
/// and the parent is picked from the loaded list by index (0 = none).
#[derive(Debug)]
pub struct CreateDialog {
    pub draft: NewDepartment,
    pub focus: DraftField,
    pub employees_input: String,
    pub parent_choice: usize,
}

impl CreateDialog {
    pub fn new() -> Self {
        Self {
            draft: NewDepartment::default(),
            focus: DraftField::Name,
            employees_input: String::new(),
            parent_choice: 0,
        }
    }
}

impl Default for CreateDialog {
    fn default() -> Self {
        Self::new()
    }
}

/// Active input mode.
#[derive(Debug)]
pub enum Mode {
    /// Navigating the table
    Browse,
    /// Editing the search term
    Search,
    /// Picking the filter column
    FilterSelect { index: usize },
    /// Creation dialog open
    Create(CreateDialog),
    /// Waiting for bulk-delete confirmation
    ConfirmDelete,
}

/// What the event loop must do after a keypress.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyResult {
    None,
    /// Re-fetch the record list
    Reload,
    /// Validate and submit the creation draft
    SubmitCreate,
    /// Bulk delete confirmed by the user
    DeleteSelected,
}

/// Runtime state of the admin client.
pub struct App {
    pub api: DepartmentsApi,
    /// Record collection as of the last successful fetch
    pub departments: Vec<Department>,
    pub view: ViewState,
    pub mode: Mode,
    /// Transient status-line message; replaced on the next event that
    /// produces one, cleared with Esc
    pub notice: Option<Notice>,
    /// Cursor + scroll offset over the derived row list
    pub table_state: TableState,
    pub should_quit: bool,
}

impl App {
    pub fn new(api: DepartmentsApi) -> Self {
        Self {
            api,
            departments: Vec::new(),
            view: ViewState::default(),
            mode: Mode::Browse,
            notice: None,
            table_state: TableState::default(),
            should_quit: false,
        }
    }

    /// The derived row list currently on screen.
    pub fn visible_rows(&self) -> Vec<&Department> {
        self.view.visible(&self.departments)
    }

    pub fn cursor(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    /// Keep the cursor inside the derived row list after it changes shape.
    fn clamp_cursor(&mut self) {
        let len = self.visible_rows().len();
        if len == 0 {
            self.table_state.select(None);
        } else {
            let pos = self.cursor().min(len - 1);
            self.table_state.select(Some(pos));
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_rows().len();
        if len == 0 {
            return;
        }
        let pos = self.cursor() as isize + delta;
        let pos = pos.clamp(0, len as isize - 1) as usize;
        self.table_state.select(Some(pos));
    }

    fn set_cursor(&mut self, pos: usize) {
        let len = self.visible_rows().len();
        if len > 0 {
            self.table_state.select(Some(pos.min(len - 1)));
        }
    }

    /// Id of the record under the cursor, if any.
    pub fn row_under_cursor(&self) -> Option<i64> {
        let rows = self.visible_rows();
        self.table_state
            .selected()
            .and_then(|i| rows.get(i).map(|d| d.id))
    }

    /// Handle a single keypress and update in-memory state.
    pub fn on_key(&mut self, key: KeyEvent) -> KeyResult {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return KeyResult::None;
        }
        match self.mode {
            Mode::Browse => self.on_key_browse(key),
            Mode::Search => self.on_key_search(key),
            Mode::FilterSelect { index } => self.on_key_filter_select(key, index),
            Mode::Create(_) => self.on_key_create(key),
            Mode::ConfirmDelete => self.on_key_confirm_delete(key),
        }
    }

    fn on_key_browse(&mut self, key: KeyEvent) -> KeyResult {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Home | KeyCode::Char('g') => self.set_cursor(0),
            KeyCode::End | KeyCode::Char('G') => self.set_cursor(usize::MAX),
            KeyCode::PageUp => self.move_cursor(-(PAGE_SIZE as isize)),
            KeyCode::PageDown => self.move_cursor(PAGE_SIZE as isize),
            KeyCode::Char(' ') => {
                if let Some(id) = self.row_under_cursor() {
                    self.view.toggle_selected(id);
                }
            }
            KeyCode::Char('/') => {
                self.mode = Mode::Search;
            }
            KeyCode::Char('f') => {
                let index = FilterColumn::ALL
                    .iter()
                    .position(|&c| c == self.view.filter_column)
                    .unwrap_or(0);
                self.mode = Mode::FilterSelect { index };
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.view.toggle_sort(SortColumn::ALL[index]);
                self.clamp_cursor();
            }
            KeyCode::Char('a') => {
                self.mode = Mode::Create(CreateDialog::new());
            }
            KeyCode::Char('d') => {
                if self.view.selected.is_empty() {
                    self.notice = Some(Notice::Warning(
                        "No departments selected, nothing to delete".to_string(),
                    ));
                } else {
                    self.mode = Mode::ConfirmDelete;
                }
            }
            KeyCode::Char('r') => return KeyResult::Reload,
            KeyCode::Esc => self.notice = None,
            _ => {}
        }
        KeyResult::None
    }

    fn on_key_search(&mut self, key: KeyEvent) -> KeyResult {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.mode = Mode::Browse;
            }
            KeyCode::Backspace => {
                self.view.search_term.pop();
                self.clamp_cursor();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.view.search_term.push(c);
                self.clamp_cursor();
            }
            _ => {}
        }
        KeyResult::None
    }

    fn on_key_filter_select(&mut self, key: KeyEvent, index: usize) -> KeyResult {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.mode = Mode::FilterSelect {
                    index: index.saturating_sub(1),
                };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.mode = Mode::FilterSelect {
                    index: (index + 1).min(FilterColumn::ALL.len() - 1),
                };
            }
            KeyCode::Enter => {
                self.view.filter_column = FilterColumn::ALL[index];
                self.mode = Mode::Browse;
                self.clamp_cursor();
            }
            KeyCode::Esc => {
                self.mode = Mode::Browse;
            }
            _ => {}
        }
        KeyResult::None
    }

    fn on_key_create(&mut self, key: KeyEvent) -> KeyResult {
        let parent_count = self.departments.len();
        let Mode::Create(dialog) = &mut self.mode else {
            return KeyResult::None;
        };
        match key.code {
            KeyCode::Esc => {
                // Cancel: the draft is discarded with the dialog
                self.mode = Mode::Browse;
            }
            KeyCode::Enter => return KeyResult::SubmitCreate,
            KeyCode::Tab | KeyCode::Down => dialog.focus = dialog.focus.next(),
            KeyCode::BackTab | KeyCode::Up => dialog.focus = dialog.focus.prev(),
            KeyCode::Left if dialog.focus == DraftField::Parent => {
                dialog.parent_choice = dialog.parent_choice.saturating_sub(1);
            }
            KeyCode::Right if dialog.focus == DraftField::Parent => {
                dialog.parent_choice = (dialog.parent_choice + 1).min(parent_count);
            }
            KeyCode::Backspace => match dialog.focus {
                DraftField::Name => {
                    dialog.draft.name.pop();
                }
                DraftField::Employees => {
                    dialog.employees_input.pop();
                }
                DraftField::Ambassador => {
                    dialog.draft.ambassador.pop();
                }
                DraftField::Parent => {}
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                match dialog.focus {
                    DraftField::Name => dialog.draft.name.push(c),
                    DraftField::Employees => {
                        if c.is_ascii_digit() {
                            dialog.employees_input.push(c);
                        }
                    }
                    DraftField::Ambassador => dialog.draft.ambassador.push(c),
                    DraftField::Parent => {}
                }
            }
            _ => {}
        }
        KeyResult::None
    }

    fn on_key_confirm_delete(&mut self, key: KeyEvent) -> KeyResult {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                self.mode = Mode::Browse;
                return KeyResult::DeleteSelected;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.mode = Mode::Browse;
            }
            _ => {}
        }
        KeyResult::None
    }

    /// Fetch the full record list, replacing local state on success.
    ///
    /// On failure the previous collection is kept and an error notice is
    /// surfaced; the view stays interactive either way.
    pub async fn load(&mut self) {
        match self.api.list().await {
            Ok(records) => {
                self.departments = records;
                self.clamp_cursor();
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load departments");
                self.notice = Some(Notice::Error(
                    "Could not load departments from the API".to_string(),
                ));
            }
        }
    }

    /// Validate and submit the creation draft.
    ///
    /// A blank name is rejected locally with a warning and no API call; the
    /// dialog stays open. On success the dialog closes, the draft is
    /// discarded, and the list is re-fetched. On failure the dialog stays
    /// open with the draft intact.
    pub async fn submit_create(&mut self) {
        let draft = {
            let Mode::Create(dialog) = &mut self.mode else {
                return;
            };
            if let Err(err) = dialog.draft.validate() {
                self.notice = Some(Notice::Warning(err.message()));
                return;
            }
            dialog.draft.employees = dialog.employees_input.parse().unwrap_or(0);
            dialog.draft.parent_id = match dialog.parent_choice {
                0 => None,
                i => self.departments.get(i - 1).map(|d| d.id),
            };
            dialog.draft.clone()
        };

        match self.api.create(&draft).await {
            Ok(created) => {
                self.mode = Mode::Browse;
                self.notice = Some(Notice::Info(format!(
                    "Created department \"{}\"",
                    created.name
                )));
                self.load().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to create department");
                self.notice = Some(Notice::Error("Could not create the department".to_string()));
            }
        }
    }

    /// Bulk-delete the selected records.
    ///
    /// Requires a non-empty selection (warned otherwise, no API call). On
    /// success the selection is cleared and the list re-fetched; on failure
    /// the selection is left intact so the user can retry.
    pub async fn delete_selected(&mut self) {
        if self.view.selected.is_empty() {
            self.notice = Some(Notice::Warning(
                "No departments selected, nothing to delete".to_string(),
            ));
            return;
        }
        let mut ids: Vec<i64> = self.view.selected.iter().copied().collect();
        ids.sort_unstable();

        match self.api.delete_many(&ids).await {
            Ok(()) => {
                self.view.selected.clear();
                self.notice = Some(Notice::Info(format!("Deleted {} department(s)", ids.len())));
                self.load().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to delete departments");
                self.notice = Some(Notice::Error(
                    "Could not delete the selected departments".to_string(),
                ));
            }
        }
    }
}

/// Drive the main event loop.
///
/// Fetches the record list once at startup, then renders a frame and
/// processes keyboard input until the user exits. Network operations run to
/// completion before the next event is read.
pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> io::Result<()> {
    app.load().await;
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| crate::ui::draw(frame, &mut app))?;

        match events.next().await {
            Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                match app.on_key(key) {
                    KeyResult::Reload => app.load().await,
                    KeyResult::SubmitCreate => app.submit_create().await,
                    KeyResult::DeleteSelected => app.delete_selected().await,
                    KeyResult::None => {}
                }
            }
            Some(Ok(_)) => {} // resize, release, mouse
            Some(Err(e)) => return Err(e),
            None => break,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
