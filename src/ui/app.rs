//! Central state machine for the creator roster TUI. Every screen performs
//! one store operation on activation or submit; this module owns the screen
//! transitions, the modal confirmation layer, the status footer, and all
//! rendering. Store results are always folded into view state at this
//! boundary; nothing below the UI ever sees a raw store error.

use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use log::{info, warn};
use open::that as open_link;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::models::Creator;
use crate::nav::Route;
use crate::store::CreatorStore;

use super::forms::{ConfirmDelete, CreatorField, CreatorForm};
use super::helpers::{centered_rect, truncate_text};
use super::remote::{failure_message, RemoteView};
use super::screens::{CreateScreen, DetailScreen, EditScreen, ListScreen, GRID_COLUMNS};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height allocation per creator card row in the list grid.
const CARD_HEIGHT: u16 = 8;
/// Character budget for the description shown on a list card.
const CARD_DESCRIPTION_CHARS: usize = 96;
/// Character budget for URLs rendered inside cards and the detail panel.
const LINK_DISPLAY_CHARS: usize = 42;

/// High-level navigation states, one per screen. Keeping this explicit makes
/// it easy to reason about which rendering path runs and what the keyboard
/// shortcuts should do.
pub(crate) enum Screen {
    List(ListScreen),
    Detail(DetailScreen),
    Create(CreateScreen),
    Edit(EditScreen),
}

/// Modal layer over the active screen. Deletion is the only interaction
/// that interrupts a screen rather than replacing it.
pub(crate) enum Mode {
    Normal,
    ConfirmDelete(ConfirmDelete),
}

/// Holds the footer message text plus its severity. This doubles as the
/// transient alert surface for failed submits and deletes; any subsequent
/// action replaces it.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI. The struct combines the
/// store handle, the active screen, the modal mode, and the footer status.
pub struct App {
    /// Handle to the hosted record store. Initialized once at startup; every
    /// handler issues its calls synchronously through this, so at most one
    /// call is ever in flight.
    store: Box<dyn CreatorStore>,
    /// Active high-level screen.
    screen: Screen,
    /// Current modal layer for that screen.
    mode: Mode,
    /// Optional status line surfaced in the footer.
    status: Option<StatusMessage>,
}

impl App {
    /// Construct the app around a store handle. The first screen starts in
    /// its loading state; callers drive the activation fetch via
    /// [`App::navigate`] before entering the event loop.
    pub fn new(store: Box<dyn CreatorStore>) -> Self {
        Self {
            store,
            screen: Screen::List(ListScreen::new(RemoteView::Loading)),
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Drive the app to a route, performing that screen's activation fetch.
    /// Fetch failures land in the screen's view state, never here.
    pub fn navigate(&mut self, route: Route) {
        info!("navigate to {route}");
        self.screen = match route {
            Route::List => Screen::List(ListScreen::new(RemoteView::from_fetch(
                self.store.list_all(),
            ))),
            Route::New => Screen::Create(CreateScreen::default()),
            Route::Creator(id) => Screen::Detail(DetailScreen {
                id,
                view: RemoteView::from_fetch(self.store.get_by_id(id)),
            }),
            Route::Edit(id) => Screen::Edit(EditScreen {
                id,
                view: RemoteView::from_fetch(
                    self.store
                        .get_by_id(id)
                        .map(|creator| CreatorForm::from_creator(&creator)),
                ),
            }),
        };
    }

    /// Top-level key dispatcher. Every key is funneled through the active
    /// `Mode`, which returns the next mode to run. The boolean result tells
    /// the outer loop whether the user requested an exit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mut mode = mem::replace(&mut self.mode, Mode::Normal);

        mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::ConfirmDelete(confirm) => self.handle_confirm_delete(code, confirm)?,
        };

        self.mode = mode;
        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match self.screen {
            Screen::List(_) => self.handle_list_key(code, exit),
            Screen::Detail(_) => self.handle_detail_key(code, exit),
            Screen::Create(_) => self.handle_create_key(code),
            Screen::Edit(_) => self.handle_edit_key(code, exit),
        }
    }

    /// Keys on the card grid. Navigation moves the selection; Enter and `e`
    /// hand the selected id to the detail and edit screens.
    fn handle_list_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        let current = match &self.screen {
            Screen::List(list) => list.current_creator().cloned(),
            _ => None,
        };

        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Left => {
                if let Screen::List(list) = &mut self.screen {
                    list.move_horizontal(-1);
                }
            }
            KeyCode::Right => {
                if let Screen::List(list) = &mut self.screen {
                    list.move_horizontal(1);
                }
            }
            KeyCode::Up => {
                if let Screen::List(list) = &mut self.screen {
                    list.move_vertical(-1);
                }
            }
            KeyCode::Down => {
                if let Screen::List(list) = &mut self.screen {
                    list.move_vertical(1);
                }
            }
            KeyCode::Enter => {
                if let Some(creator) = current {
                    self.clear_status();
                    self.navigate(Route::Creator(creator.id));
                } else {
                    self.set_status("No creator selected.", StatusKind::Error);
                }
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                if let Some(creator) = current {
                    self.clear_status();
                    self.navigate(Route::Edit(creator.id));
                } else {
                    self.set_status("No creator selected to edit.", StatusKind::Error);
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('+') => {
                self.clear_status();
                self.navigate(Route::New);
            }
            KeyCode::Char('o') | KeyCode::Char('O') => {
                self.open_creator_link(current);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.clear_status();
                self.navigate(Route::List);
            }
            _ => {}
        }

        Ok(Mode::Normal)
    }

    /// Keys on the single-creator view. Delete opens the confirmation modal
    /// instead of acting immediately.
    fn handle_detail_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        let (id, creator) = match &self.screen {
            Screen::Detail(detail) => (detail.id, detail.creator().cloned()),
            _ => return Ok(Mode::Normal),
        };

        match code {
            KeyCode::Char('q') => {
                *exit = true;
            }
            KeyCode::Esc => {
                self.clear_status();
                self.navigate(Route::List);
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                if creator.is_some() {
                    self.clear_status();
                    self.navigate(Route::Edit(id));
                } else {
                    self.set_status("No creator loaded to edit.", StatusKind::Error);
                }
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('-') => {
                if let Some(creator) = creator {
                    self.clear_status();
                    return Ok(Mode::ConfirmDelete(ConfirmDelete::from(&creator)));
                }
                self.set_status("No creator loaded to delete.", StatusKind::Error);
            }
            KeyCode::Char('o') | KeyCode::Char('O') => {
                self.open_creator_link(creator);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.clear_status();
                self.reload_detail();
            }
            _ => {}
        }

        Ok(Mode::Normal)
    }

    /// Keys on the creation form. Everything except Esc and Enter is form
    /// input; quitting requires going back to the list first so a stray
    /// keystroke cannot throw away a draft.
    fn handle_create_key(&mut self, code: KeyCode) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_status("Creator creation cancelled.", StatusKind::Info);
                self.navigate(Route::List);
            }
            KeyCode::Enter => self.submit_create(),
            other => {
                if let Screen::Create(create) = &mut self.screen {
                    apply_form_key(&mut create.form, other);
                }
            }
        }

        Ok(Mode::Normal)
    }

    /// Keys on the edit screen. With a loaded draft this mirrors the create
    /// form; after a failed fetch only retry and navigation apply.
    fn handle_edit_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        let (id, editing) = match &self.screen {
            Screen::Edit(edit) => (edit.id, edit.view.loaded().is_some()),
            _ => return Ok(Mode::Normal),
        };

        if editing {
            match code {
                KeyCode::Esc => {
                    self.set_status("Edit cancelled.", StatusKind::Info);
                    self.navigate(Route::Creator(id));
                }
                KeyCode::Enter => self.submit_edit(),
                other => {
                    if let Screen::Edit(edit) = &mut self.screen {
                        if let Some(form) = edit.form_mut() {
                            apply_form_key(form, other);
                        }
                    }
                }
            }
        } else {
            match code {
                KeyCode::Char('q') => {
                    *exit = true;
                }
                KeyCode::Esc => {
                    self.clear_status();
                    self.navigate(Route::List);
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    self.clear_status();
                    self.reload_edit();
                }
                _ => {}
            }
        }

        Ok(Mode::Normal)
    }

    /// Confirmation dialog for creator deletion. Escape cancels, enter or
    /// `y` confirms. A failed delete closes the dialog but stays on the
    /// detail screen so the user can retry manually.
    fn handle_confirm_delete(&mut self, code: KeyCode, confirm: ConfirmDelete) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.store.delete_by_id(confirm.id) {
                    Ok(()) => {
                        info!("deleted creator id={}", confirm.id);
                        self.navigate(Route::List);
                        self.set_status(format!("Deleted {}.", confirm.name), StatusKind::Info);
                    }
                    Err(err) => {
                        warn!("delete failed for id={}: {err}", confirm.id);
                        self.set_status(failure_message(&err), StatusKind::Error);
                    }
                }
                Ok(Mode::Normal)
            }
            _ => Ok(Mode::ConfirmDelete(confirm)),
        }
    }

    /// Validate the creation draft and persist it. Validation failures stay
    /// local; a store failure keeps the draft on screen for retry.
    fn submit_create(&mut self) {
        let parsed = match &self.screen {
            Screen::Create(create) => create.form.parse_inputs(),
            _ => return,
        };

        match parsed {
            Ok(draft) => match self.store.insert(&draft) {
                Ok(creator) => {
                    info!("inserted creator id={}", creator.id);
                    self.navigate(Route::List);
                    self.set_status(format!("Added {}.", creator.name), StatusKind::Info);
                }
                Err(err) => {
                    warn!("insert failed: {err}");
                    self.fail_create_submit(failure_message(&err));
                }
            },
            Err(err) => self.fail_create_submit(err.to_string()),
        }
    }

    /// Keep the creation draft on screen and surface the submit failure.
    fn fail_create_submit(&mut self, message: String) {
        if let Screen::Create(create) = &mut self.screen {
            create.form.error = Some(message.clone());
        }
        self.set_status(message, StatusKind::Error);
    }

    /// Validate the edit draft and persist it, then land on the detail view
    /// for the same id. Failures keep the draft on screen.
    fn submit_edit(&mut self) {
        let parsed = match &self.screen {
            Screen::Edit(edit) => edit
                .view
                .loaded()
                .map(|form| (edit.id, form.parse_inputs())),
            _ => None,
        };
        let Some((id, parsed)) = parsed else { return };

        match parsed {
            Ok(draft) => match self.store.update(id, &draft) {
                Ok(creator) => {
                    info!("updated creator id={}", creator.id);
                    self.navigate(Route::Creator(creator.id));
                    self.set_status(format!("Updated {}.", creator.name), StatusKind::Info);
                }
                Err(err) => {
                    warn!("update failed for id={id}: {err}");
                    self.fail_edit_submit(failure_message(&err));
                }
            },
            Err(err) => self.fail_edit_submit(err.to_string()),
        }
    }

    /// Keep the edit draft on screen and surface the submit failure.
    fn fail_edit_submit(&mut self, message: String) {
        if let Screen::Edit(edit) = &mut self.screen {
            if let Some(form) = edit.form_mut() {
                form.error = Some(message.clone());
            }
        }
        self.set_status(message, StatusKind::Error);
    }

    /// Re-fetch the record backing the detail screen. The result is applied
    /// only while the detail screen for that id is still active, so a stale
    /// response can never land on a screen that did not ask for it.
    fn reload_detail(&mut self) {
        let id = match &self.screen {
            Screen::Detail(detail) => detail.id,
            _ => return,
        };
        let view = RemoteView::from_fetch(self.store.get_by_id(id));
        if let Screen::Detail(detail) = &mut self.screen {
            if detail.id == id {
                detail.view = view;
            }
        }
    }

    /// Re-fetch the record backing the edit screen, with the same
    /// still-active guard as [`App::reload_detail`]. A reload replaces any
    /// unsaved draft with the store's current row.
    fn reload_edit(&mut self) {
        let id = match &self.screen {
            Screen::Edit(edit) => edit.id,
            _ => return,
        };
        let view = RemoteView::from_fetch(
            self.store
                .get_by_id(id)
                .map(|creator| CreatorForm::from_creator(&creator)),
        );
        if let Screen::Edit(edit) = &mut self.screen {
            if edit.id == id {
                edit.view = view;
            }
        }
    }

    /// Hand the creator's URL to the system opener, reporting the outcome in
    /// the footer.
    fn open_creator_link(&mut self, creator: Option<Creator>) {
        let Some(creator) = creator else {
            self.set_status("No creator selected.", StatusKind::Error);
            return;
        };

        let url = creator.url.trim().to_string();
        if url.is_empty() {
            self.set_status("This creator does not have a link.", StatusKind::Error);
        } else if let Err(err) = open_link(&url) {
            self.set_status(format!("Failed to open link: {err}"), StatusKind::Error);
        } else {
            self.set_status(format!("Opened {}.", creator.name), StatusKind::Info);
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    /// Main render routine invoked each tick. Splits the frame into content
    /// and footer regions and dispatches to the active screen, then layers
    /// the confirmation modal on top when one is open.
    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::List(list) => self.draw_list(frame, content_area, list),
            Screen::Detail(detail) => self.draw_detail(frame, content_area, detail),
            Screen::Create(create) => {
                self.draw_creator_form(frame, content_area, "Add Creator", &create.form)
            }
            Screen::Edit(edit) => self.draw_edit(frame, content_area, edit),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        if let Mode::ConfirmDelete(confirm) = &self.mode {
            self.draw_confirm_delete(frame, area, confirm);
        }
    }

    /// Render the card grid, or the loading/failed/empty notices that stand
    /// in for it.
    fn draw_list(&self, frame: &mut Frame, area: Rect, list: &ListScreen) {
        match &list.view {
            RemoteView::Loading => draw_notice(frame, area, vec![Line::from("Loading creators…")]),
            RemoteView::Failed(message) => draw_failure(frame, area, message, "Press R to retry."),
            RemoteView::Loaded(creators) if creators.is_empty() => draw_notice(
                frame,
                area,
                vec![
                    Line::from("No creators found!"),
                    Line::from(Span::styled(
                        "Press N to add the first one.",
                        Style::default().fg(Color::Gray),
                    )),
                ],
            ),
            RemoteView::Loaded(creators) => {
                self.draw_card_grid(frame, area, creators, list.selected)
            }
        }
    }

    fn draw_card_grid(&self, frame: &mut Frame, area: Rect, creators: &[Creator], selected: usize) {
        let rows = (creators.len() + GRID_COLUMNS - 1) / GRID_COLUMNS;
        let row_constraints: Vec<Constraint> =
            (0..rows).map(|_| Constraint::Length(CARD_HEIGHT)).collect();
        let row_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(row_constraints)
            .split(area);

        for (row_idx, row_area) in row_chunks.iter().enumerate() {
            let column_constraints: Vec<Constraint> = (0..GRID_COLUMNS)
                .map(|_| Constraint::Ratio(1, GRID_COLUMNS as u32))
                .collect();
            let column_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(column_constraints)
                .split(*row_area);

            for (col_idx, card_area) in column_chunks.iter().enumerate() {
                let index = row_idx * GRID_COLUMNS + col_idx;
                if let Some(creator) = creators.get(index) {
                    draw_card(frame, *card_area, creator, index == selected);
                }
            }
        }
    }

    /// Render the single-creator panel, or its loading/failed notices.
    fn draw_detail(&self, frame: &mut Frame, area: Rect, detail: &DetailScreen) {
        match &detail.view {
            RemoteView::Loading => {
                draw_notice(frame, area, vec![Line::from("Loading creator details…")])
            }
            RemoteView::Failed(message) => draw_failure(
                frame,
                area,
                message,
                "Press R to retry or Esc for all creators.",
            ),
            RemoteView::Loaded(creator) => {
                let block = Block::default().borders(Borders::ALL).title("Creator");

                let portrait_line = if creator.has_image() {
                    Line::from(vec![
                        Span::styled("◉ ", Style::default().fg(Color::Cyan)),
                        Span::raw(truncate_text(
                            creator.image_url.as_deref().unwrap_or_default(),
                            LINK_DISPLAY_CHARS,
                        )),
                    ])
                } else {
                    Line::from(Span::styled(
                        "○ no image",
                        Style::default().fg(Color::DarkGray),
                    ))
                };

                let lines = vec![
                    Line::from(Span::styled(
                        creator.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    portrait_line,
                    Line::from(""),
                    Line::from(creator.description.clone()),
                    Line::from(""),
                    link_line(&creator.url),
                ];

                let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
                frame.render_widget(paragraph, area);
            }
        }
    }

    /// Render the edit screen: the prefilled form once loaded, otherwise the
    /// fetch notices.
    fn draw_edit(&self, frame: &mut Frame, area: Rect, edit: &EditScreen) {
        match &edit.view {
            RemoteView::Loading => {
                draw_notice(frame, area, vec![Line::from("Loading creator for editing…")])
            }
            RemoteView::Failed(message) => draw_failure(
                frame,
                area,
                message,
                "Press R to retry or Esc for all creators.",
            ),
            RemoteView::Loaded(form) => {
                self.draw_creator_form(frame, area, "Edit Creator", form);
            }
        }
    }

    /// Render the four-field draft form centered in the content area, with
    /// the cursor placed at the end of the focused field.
    fn draw_creator_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &CreatorForm) {
        let popup_area = centered_rect(70, 60, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title.to_string()).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![
            form.build_line("Name", CreatorField::Name),
            form.build_line("URL", CreatorField::Url),
            form.build_line("Image URL", CreatorField::ImageUrl),
            form.build_line("Description", CreatorField::Description),
            Line::from(""),
        ];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Tab to switch fields • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (prefix, row) = match form.active {
            CreatorField::Name => ("Name: ", 0u16),
            CreatorField::Url => ("URL: ", 1),
            CreatorField::ImageUrl => ("Image URL: ", 2),
            CreatorField::Description => ("Description: ", 3),
        };
        let cursor_x = inner.x + prefix.len() as u16 + form.value_len(form.active) as u16;
        frame.set_cursor_position((cursor_x, inner.y + row));
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Confirm Deletion")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!("Delete {}?", confirm.name)),
            Line::from("This cannot be undone."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let hints: &[(&str, &str)] = match (&self.screen, &self.mode) {
            (_, Mode::ConfirmDelete(_)) => &[("[Y]", " Delete   "), ("[N/Esc]", " Cancel")],
            (Screen::List(_), _) => &[
                ("[↑↓←→]", " Navigate   "),
                ("[Enter]", " View   "),
                ("[E]", " Edit   "),
                ("[N]", " New   "),
                ("[O]", " Visit   "),
                ("[R]", " Reload   "),
                ("[Q]", " Quit"),
            ],
            (Screen::Detail(_), _) => &[
                ("[E]", " Edit   "),
                ("[D]", " Delete   "),
                ("[O]", " Visit   "),
                ("[R]", " Reload   "),
                ("[Esc]", " All Creators   "),
                ("[Q]", " Quit"),
            ],
            (Screen::Create(_), _) => &[
                ("[Enter]", " Save   "),
                ("[Tab]", " Next Field   "),
                ("[Esc]", " Cancel"),
            ],
            (Screen::Edit(edit), _) => {
                if edit.view.loaded().is_some() {
                    &[
                        ("[Enter]", " Save   "),
                        ("[Tab]", " Next Field   "),
                        ("[Esc]", " Cancel"),
                    ]
                } else {
                    &[("[R]", " Retry   "), ("[Esc]", " All Creators")]
                }
            }
        };

        let mut spans = Vec::with_capacity(hints.len() * 2);
        for (key, action) in hints {
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::raw(*action));
        }
        Line::from(spans)
    }
}

/// Route a non-submit key into a draft form: focus cycling, editing, and
/// typing. Typing clears the last error so stale messages do not linger.
fn apply_form_key(form: &mut CreatorForm, code: KeyCode) {
    match code {
        KeyCode::Tab => form.cycle_field(),
        KeyCode::BackTab => form.cycle_field_back(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(ch) => {
            if form.push_char(ch) {
                form.error = None;
            }
        }
        _ => {}
    }
}

/// Centered informational paragraph used for loading and empty states.
fn draw_notice(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Centered failure paragraph with a recovery hint underneath.
fn draw_failure(frame: &mut Frame, area: Rect, message: &str, hint: &str) {
    draw_notice(
        frame,
        area,
        vec![
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red),
            )),
            Line::from(Span::styled(
                hint.to_string(),
                Style::default().fg(Color::Gray),
            )),
        ],
    );
}

/// One creator card in the list grid: name in the border title, an image
/// marker (placeholder glyph when absent), the truncated description, and
/// the visit affordance.
fn draw_card(frame: &mut Frame, area: Rect, creator: &Creator, selected: bool) {
    let title_budget = area.width.saturating_sub(4) as usize;
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(truncate_text(&creator.name, title_budget.max(1)));
    if selected {
        block = block.style(Style::default().fg(Color::Yellow));
    }

    let image_line = if creator.has_image() {
        Line::from(Span::styled("◉ portrait", Style::default().fg(Color::Cyan)))
    } else {
        Line::from(Span::styled(
            "○ no image",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let lines = vec![
        image_line,
        Line::from(truncate_text(&creator.description, CARD_DESCRIPTION_CHARS)),
        link_line(&creator.url),
        Line::from(Span::styled(
            "Enter view • E edit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(card, area);
}

/// The visit affordance shared by cards and the detail panel.
fn link_line(url: &str) -> Line<'static> {
    if url.trim().is_empty() {
        Line::from(Span::styled(
            "No link available",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled("Visit: ", Style::default().fg(Color::Blue)),
            Span::raw(truncate_text(url, LINK_DISPLAY_CHARS)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crossterm::event::KeyCode;

    use super::{App, Mode, Screen, StatusKind};
    use crate::models::{Creator, CreatorDraft};
    use crate::nav::Route;
    use crate::store::{CreatorStore, MemoryStore, StoreError, StoreResult};
    use crate::ui::remote::RemoteView;

    fn draft(name: &str, url: &str, image_url: Option<&str>, description: &str) -> CreatorDraft {
        CreatorDraft {
            name: name.to_string(),
            url: url.to_string(),
            image_url: image_url.map(str::to_string),
            description: description.to_string(),
        }
    }

    /// App over a store seeded with one creator, whose id is 1.
    fn seeded_app() -> App {
        let store = MemoryStore::new();
        store
            .insert(&draft("Ana", "https://x.test", None, "d"))
            .expect("seed insert");
        let mut app = App::new(Box::new(store));
        app.navigate(Route::List);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code).expect("key handling");
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    /// Store wrapper that counts write calls, for asserting that local
    /// validation never reaches the store.
    struct CountingStore {
        inner: MemoryStore,
        writes: Rc<Cell<usize>>,
    }

    impl CreatorStore for CountingStore {
        fn list_all(&self) -> StoreResult<Vec<Creator>> {
            self.inner.list_all()
        }

        fn get_by_id(&self, id: i64) -> StoreResult<Creator> {
            self.inner.get_by_id(id)
        }

        fn insert(&self, draft: &CreatorDraft) -> StoreResult<Creator> {
            self.writes.set(self.writes.get() + 1);
            self.inner.insert(draft)
        }

        fn update(&self, id: i64, patch: &CreatorDraft) -> StoreResult<Creator> {
            self.writes.set(self.writes.get() + 1);
            self.inner.update(id, patch)
        }

        fn delete_by_id(&self, id: i64) -> StoreResult<()> {
            self.writes.set(self.writes.get() + 1);
            self.inner.delete_by_id(id)
        }
    }

    /// Store whose every call fails, for exercising the failure paths.
    struct DownStore;

    fn down() -> StoreError {
        StoreError::Unavailable("connection refused".to_string())
    }

    impl CreatorStore for DownStore {
        fn list_all(&self) -> StoreResult<Vec<Creator>> {
            Err(down())
        }

        fn get_by_id(&self, _id: i64) -> StoreResult<Creator> {
            Err(down())
        }

        fn insert(&self, _draft: &CreatorDraft) -> StoreResult<Creator> {
            Err(down())
        }

        fn update(&self, _id: i64, _patch: &CreatorDraft) -> StoreResult<Creator> {
            Err(down())
        }

        fn delete_by_id(&self, _id: i64) -> StoreResult<()> {
            Err(down())
        }
    }

    #[test]
    fn empty_store_shows_the_empty_list_not_an_error() {
        let mut app = App::new(Box::new(MemoryStore::new()));
        app.navigate(Route::List);

        match &app.screen {
            Screen::List(list) => assert_eq!(list.view, RemoteView::Loaded(Vec::new())),
            _ => panic!("expected the list screen"),
        }
    }

    #[test]
    fn list_fetch_failure_reaches_the_failed_state() {
        let mut app = App::new(Box::new(DownStore));
        app.navigate(Route::List);

        match &app.screen {
            Screen::List(list) => match &list.view {
                RemoteView::Failed(message) => assert!(message.contains("connection refused")),
                other => panic!("expected a failed view, got {other:?}"),
            },
            _ => panic!("expected the list screen"),
        }
    }

    #[test]
    fn missing_creator_detail_fails_with_a_not_found_message() {
        let mut app = App::new(Box::new(MemoryStore::new()));
        app.navigate(Route::Creator(999));

        match &app.screen {
            Screen::Detail(detail) => {
                assert_eq!(detail.id, 999);
                match &detail.view {
                    RemoteView::Failed(message) => assert!(message.contains("not found")),
                    other => panic!("expected a failed view, got {other:?}"),
                }
            }
            _ => panic!("expected the detail screen"),
        }
    }

    #[test]
    fn missing_creator_edit_fails_with_a_not_found_message() {
        let mut app = App::new(Box::new(MemoryStore::new()));
        app.navigate(Route::Edit(42));

        match &app.screen {
            Screen::Edit(edit) => match &edit.view {
                RemoteView::Failed(message) => assert!(message.contains("not found")),
                other => panic!("expected a failed view, got {other:?}"),
            },
            _ => panic!("expected the edit screen"),
        }
    }

    #[test]
    fn create_flow_inserts_and_returns_to_the_list() {
        let mut app = App::new(Box::new(MemoryStore::new()));
        app.navigate(Route::New);

        type_text(&mut app, "Ana");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "https://x.test");
        press(&mut app, KeyCode::Tab); // leave the image URL blank
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "d");
        press(&mut app, KeyCode::Enter);

        match &app.screen {
            Screen::List(list) => {
                let creators = list.creators();
                assert_eq!(creators.len(), 1);
                assert_eq!(creators[0].name, "Ana");
                // Blank image URL renders the placeholder marker.
                assert!(!creators[0].has_image());
            }
            _ => panic!("expected the list screen after a successful insert"),
        }
    }

    #[test]
    fn create_submit_with_a_missing_field_never_calls_the_store() {
        let writes = Rc::new(Cell::new(0));
        let store = CountingStore {
            inner: MemoryStore::new(),
            writes: Rc::clone(&writes),
        };
        let mut app = App::new(Box::new(store));
        app.navigate(Route::New);

        type_text(&mut app, "Ana"); // url and description left blank
        press(&mut app, KeyCode::Enter);

        assert_eq!(writes.get(), 0);
        match &app.screen {
            Screen::Create(create) => {
                let error = create.form.error.as_deref().expect("validation message");
                assert!(error.contains("required"));
                assert_eq!(create.form.name, "Ana");
            }
            _ => panic!("expected to stay on the create screen"),
        }
        let status = app.status.as_ref().expect("footer alert");
        assert!(matches!(status.kind, StatusKind::Error));
    }

    #[test]
    fn create_store_failure_preserves_the_draft() {
        let mut app = App::new(Box::new(DownStore));
        app.navigate(Route::New);

        type_text(&mut app, "Ana");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "https://x.test");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "d");
        press(&mut app, KeyCode::Enter);

        match &app.screen {
            Screen::Create(create) => {
                assert_eq!(create.form.name, "Ana");
                assert_eq!(create.form.url, "https://x.test");
                assert!(create.form.error.is_some());
            }
            _ => panic!("expected to stay on the create screen after a store failure"),
        }
    }

    #[test]
    fn delete_flow_requires_confirmation_and_returns_to_the_list() {
        let mut app = seeded_app();
        app.navigate(Route::Creator(1));

        press(&mut app, KeyCode::Char('d'));
        assert!(matches!(app.mode, Mode::ConfirmDelete(_)));
        // Still on the detail screen while the dialog is open.
        assert!(matches!(app.screen, Screen::Detail(_)));

        press(&mut app, KeyCode::Enter);
        match &app.screen {
            Screen::List(list) => assert!(list.creators().is_empty()),
            _ => panic!("expected the list screen after deletion"),
        }
    }

    #[test]
    fn cancelled_delete_keeps_the_record() {
        let mut app = seeded_app();
        app.navigate(Route::Creator(1));

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Esc);

        assert!(matches!(app.mode, Mode::Normal));
        assert!(matches!(app.screen, Screen::Detail(_)));

        app.navigate(Route::List);
        match &app.screen {
            Screen::List(list) => assert_eq!(list.creators().len(), 1),
            _ => panic!("expected the list screen"),
        }
    }

    #[test]
    fn delete_failure_stays_on_the_detail_screen() {
        let mut app = seeded_app();
        app.navigate(Route::Creator(1));
        press(&mut app, KeyCode::Char('d'));

        // Swap in a failing store underneath the open dialog.
        app.store = Box::new(DownStore);
        press(&mut app, KeyCode::Char('y'));

        assert!(matches!(app.screen, Screen::Detail(_)));
        let status = app.status.as_ref().expect("footer alert");
        assert!(matches!(status.kind, StatusKind::Error));
    }

    #[test]
    fn edit_flow_updates_and_lands_on_the_detail_screen() {
        let mut app = seeded_app();
        app.navigate(Route::Edit(1));

        match &app.screen {
            Screen::Edit(edit) => {
                let form = edit.view.loaded().expect("prefilled form");
                assert_eq!(form.name, "Ana");
            }
            _ => panic!("expected the edit screen"),
        }

        // Focus starts on the name field; extend it and save.
        type_text(&mut app, "bel");
        press(&mut app, KeyCode::Enter);

        match &app.screen {
            Screen::Detail(detail) => {
                assert_eq!(detail.id, 1);
                let creator = detail.creator().expect("updated record");
                assert_eq!(creator.name, "Anabel");
            }
            _ => panic!("expected the detail screen after a successful update"),
        }
    }

    #[test]
    fn edit_submit_with_a_missing_field_never_calls_the_store() {
        let store = MemoryStore::new();
        store
            .insert(&draft("Ana", "https://x.test", None, "d"))
            .expect("seed insert");
        let writes = Rc::new(Cell::new(0));
        let counting = CountingStore {
            inner: store,
            writes: Rc::clone(&writes),
        };
        let mut app = App::new(Box::new(counting));
        app.navigate(Route::Edit(1));

        // Erase the name, then try to save.
        for _ in 0..3 {
            press(&mut app, KeyCode::Backspace);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(writes.get(), 0);
        match &app.screen {
            Screen::Edit(edit) => {
                let form = edit.view.loaded().expect("draft still on screen");
                assert!(form.error.as_deref().is_some_and(|e| e.contains("required")));
            }
            _ => panic!("expected to stay on the edit screen"),
        }
    }

    #[test]
    fn quit_key_exits_from_the_list() {
        let mut app = seeded_app();
        let exit = app.handle_key(KeyCode::Char('q')).expect("key handling");
        assert!(exit);
    }
}
