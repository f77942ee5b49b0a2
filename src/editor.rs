// src/editor.rs - Core editor coordinator

use crate::buffer::{BufferError, Document};
use crate::clipboard::Clipboard;
use crate::command::Command;
use crate::config::JotterConfig;
use crate::cursor::Cursor;
use crate::dialog::{ConfirmChoice, Dialog, PromptKind, parse_prompt_path};
use crate::history::{DocumentHistory, History, Snapshot};
use crate::menu::MenuState;
use crate::mode::Mode;
use crate::motion::{self, Position};
use crate::view::{GutterView, StatusView};
use crate::viewport::Viewport;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Lines moved per mouse wheel notch
const SCROLL_STEP: isize = 3;

/// Destructive action waiting behind the unsaved-changes dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    NewFile,
    OpenFile,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// No path was bound; the Save As prompt is now open
    Prompted,
    Failed,
}

pub struct Editor {
    pub document: Document,
    pub cursor: Cursor,
    /// Selection runs from the anchor to the cursor
    pub anchor: Option<Position>,
    pub viewport: Viewport,
    pub gutter: GutterView,
    pub status: StatusView,
    pub status_message: Option<String>,
    pub menu: Option<MenuState>,
    pub dialog: Option<Dialog>,
    pending: Option<PendingAction>,
    history: DocumentHistory,
    clipboard: Clipboard,
    tab_width: usize,
    coalesce_typing: bool,
    should_quit: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Editor with default settings and a clipboard that stays in-process
    pub fn new() -> Self {
        Self::with_config(&JotterConfig::default(), Clipboard::detached())
    }

    pub fn with_config(config: &JotterConfig, clipboard: Clipboard) -> Self {
        let mut editor = Self {
            document: Document::new(),
            cursor: Cursor::new(),
            anchor: None,
            viewport: Viewport::new(20, 80),
            gutter: GutterView::new(),
            status: StatusView::new(),
            status_message: None,
            menu: None,
            dialog: None,
            pending: None,
            history: History::with_max_size(config.undo_depth),
            clipboard,
            tab_width: config.tab_width.max(1),
            coalesce_typing: false,
            should_quit: false,
        };
        editor.refresh_views();
        editor
    }

    pub fn mode(&self) -> Mode {
        match &self.dialog {
            Some(Dialog::Confirm { .. }) => Mode::Confirm,
            Some(Dialog::Prompt { .. }) => Mode::Prompt,
            Some(Dialog::Error { .. }) => Mode::Alert,
            None if self.menu.is_some() => Mode::Menu,
            None => Mode::Edit,
        }
    }

    pub fn pending_action(&self) -> Option<PendingAction> {
        self.pending
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs one command and refreshes the derived views. Returns true when the window
    /// should close.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        if cmd != Command::Hover {
            self.status_message = None;
        }
        let continues_typing = std::mem::take(&mut self.coalesce_typing);
        let mut follow_cursor = true;

        match cmd {
            Command::MoveLeft { select } => {
                let pos = motion::left(&self.document, self.cursor.position());
                self.move_to(pos, select);
            }
            Command::MoveRight { select } => {
                let pos = motion::right(&self.document, self.cursor.position());
                self.move_to(pos, select);
            }
            Command::MoveUp { select } => {
                let pos = motion::up(
                    &self.document,
                    self.cursor.position(),
                    self.cursor.desired_col,
                    1,
                );
                self.move_vertical(pos, select);
            }
            Command::MoveDown { select } => {
                let pos = motion::down(
                    &self.document,
                    self.cursor.position(),
                    self.cursor.desired_col,
                    1,
                );
                self.move_vertical(pos, select);
            }
            Command::PageUp { select } => {
                let pos = motion::up(
                    &self.document,
                    self.cursor.position(),
                    self.cursor.desired_col,
                    self.viewport.rows.max(1),
                );
                self.move_vertical(pos, select);
            }
            Command::PageDown { select } => {
                let pos = motion::down(
                    &self.document,
                    self.cursor.position(),
                    self.cursor.desired_col,
                    self.viewport.rows.max(1),
                );
                self.move_vertical(pos, select);
            }
            Command::MoveWordLeft { select } => {
                let pos = motion::word_left(&self.document, self.cursor.position());
                self.move_to(pos, select);
            }
            Command::MoveWordRight { select } => {
                let pos = motion::word_right(&self.document, self.cursor.position());
                self.move_to(pos, select);
            }
            Command::MoveLineStart { select } => {
                self.move_to(motion::line_start(self.cursor.position()), select);
            }
            Command::MoveLineEnd { select } => {
                let pos = motion::line_end(&self.document, self.cursor.position());
                self.move_to(pos, select);
            }
            Command::MoveFileStart { select } => self.move_to(motion::file_start(), select),
            Command::MoveFileEnd { select } => {
                self.move_to(motion::file_end(&self.document), select);
            }
            Command::SelectAll => {
                self.anchor = Some(motion::file_start());
                self.cursor.set_position(motion::file_end(&self.document));
            }

            Command::InsertChar(c) => {
                let word_char = !c.is_whitespace();
                self.insert_char(c, continues_typing && word_char);
                self.coalesce_typing = word_char;
            }
            Command::InsertNewline => self.insert_text("\n", false),
            Command::InsertTab => {
                let width = self.tab_width - self.cursor.col % self.tab_width;
                self.insert_text(&" ".repeat(width), false);
            }
            Command::DeleteChar => self.backspace(),
            Command::DeleteForward => self.delete_forward(),

            Command::NewFile => self.request(PendingAction::NewFile),
            Command::OpenFile => self.request(PendingAction::OpenFile),
            Command::SaveFile => {
                self.menu = None;
                self.save();
            }
            Command::SaveFileAs => {
                self.menu = None;
                self.prompt_save_as();
            }
            Command::Exit => self.request(PendingAction::Exit),

            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::Cut => self.cut(),
            Command::Copy => self.copy(),
            Command::Paste => self.paste(),

            Command::Click { row, col } => {
                self.menu = None;
                let pos = self.screen_to_position(row, col);
                self.move_to(pos, false);
            }
            Command::Drag { row, col } => {
                let pos = self.screen_to_position(row, col);
                self.move_to(pos, true);
            }
            Command::Hover => follow_cursor = false,
            Command::ScrollUp => {
                self.viewport
                    .scroll_by(-SCROLL_STEP, self.document.line_count());
                follow_cursor = false;
            }
            Command::ScrollDown => {
                self.viewport
                    .scroll_by(SCROLL_STEP, self.document.line_count());
                follow_cursor = false;
            }

            Command::OpenMenu(id) => {
                self.menu = Some(MenuState::new(id));
                follow_cursor = false;
            }
            Command::MenuUp => {
                if let Some(menu) = &mut self.menu {
                    menu.select_prev();
                }
                follow_cursor = false;
            }
            Command::MenuDown => {
                if let Some(menu) = &mut self.menu {
                    menu.select_next();
                }
                follow_cursor = false;
            }
            Command::MenuLeft => {
                if let Some(menu) = &mut self.menu {
                    menu.open_prev();
                }
                follow_cursor = false;
            }
            Command::MenuRight => {
                if let Some(menu) = &mut self.menu {
                    menu.open_next();
                }
                follow_cursor = false;
            }
            Command::MenuActivate => {
                if let Some(cmd) = self.menu.take().and_then(|menu| menu.selected_command()) {
                    return self.execute_command(cmd);
                }
            }
            Command::MenuPick(idx) => {
                let mut picked = None;
                if let Some(menu) = self.menu.as_mut()
                    && menu.select(idx)
                {
                    picked = menu.selected_command();
                }
                if let Some(cmd) = picked {
                    self.menu = None;
                    return self.execute_command(cmd);
                }
                follow_cursor = false;
            }
            Command::CloseMenu => {
                self.menu = None;
                follow_cursor = false;
            }

            Command::DialogChoose(choice) => {
                if matches!(self.dialog, Some(Dialog::Confirm { .. })) {
                    self.answer_confirm(choice);
                }
            }
            Command::DialogNextButton | Command::DialogPrevButton => {
                if let Some(Dialog::Confirm { selected, .. }) = &mut self.dialog {
                    *selected = if cmd == Command::DialogNextButton {
                        selected.next()
                    } else {
                        selected.prev()
                    };
                }
                follow_cursor = false;
            }
            Command::DialogAccept => match self.mode() {
                Mode::Confirm => {
                    if let Some(Dialog::Confirm { selected, .. }) = &self.dialog {
                        let choice = *selected;
                        self.answer_confirm(choice);
                    }
                }
                Mode::Prompt => self.accept_prompt(),
                Mode::Alert => self.dialog = None,
                Mode::Edit | Mode::Menu => {}
            },
            Command::DialogCancel => match self.mode() {
                Mode::Confirm => self.answer_confirm(ConfirmChoice::Cancel),
                Mode::Prompt => {
                    self.dialog = None;
                    if let Some(action) = self.pending.take() {
                        log::debug!("save-as dismissed, dropping pending {:?}", action);
                    }
                }
                Mode::Alert => self.dialog = None,
                Mode::Edit | Mode::Menu => {}
            },
            Command::PromptInput(c) => {
                if let Some(Dialog::Prompt { input, .. }) = &mut self.dialog {
                    input.push(c);
                }
                follow_cursor = false;
            }
            Command::PromptBackspace => {
                if let Some(Dialog::Prompt { input, .. }) = &mut self.dialog {
                    input.pop();
                }
                follow_cursor = false;
            }
        }

        self.after_command(follow_cursor);
        self.should_quit
    }

    fn after_command(&mut self, follow_cursor: bool) {
        let pos = motion::clamp(&self.document, self.cursor.position());
        self.cursor.line = pos.line;
        self.cursor.col = pos.col;
        if let Some(anchor) = self.anchor {
            self.anchor = Some(motion::clamp(&self.document, anchor));
        }
        if follow_cursor {
            self.viewport
                .scroll_to_cursor(self.cursor.line, self.cursor_cell());
        }
        self.refresh_views();
    }

    /// Recompute the gutter, status text and title from the current state
    pub fn refresh_views(&mut self) {
        self.gutter.refresh(&self.document, &self.viewport);
        self.refresh_status();
    }

    pub fn refresh_status(&mut self) {
        self.status
            .refresh(&self.document, &self.cursor, self.status_message.as_deref());
    }

    /// Periodic refresh keeping the gutter in step with the buffer and its scroll offset
    pub fn tick(&mut self) {
        self.gutter.refresh(&self.document, &self.viewport);
    }

    /// Size of the text area in cells
    pub fn handle_resize(&mut self, rows: u16, cols: u16) {
        self.viewport.resize(rows as usize, cols as usize);
        self.viewport
            .scroll_to_cursor(self.cursor.line, self.cursor_cell());
        self.refresh_views();
    }

    /// Screen column of the cursor within its line, counting wide glyphs as two cells
    pub fn cursor_cell(&self) -> usize {
        self.document.display_col(self.cursor.line, self.cursor.col)
    }

    fn screen_to_position(&self, row: u16, col: u16) -> Position {
        let last = self.document.line_count().saturating_sub(1);
        let line = (self.viewport.offset_line + row as usize).min(last);
        let col = self
            .document
            .col_at_display(line, self.viewport.offset_col + col as usize);
        Position::new(line, col)
    }

    // Selection

    /// Ordered selection bounds, or `None` when nothing is selected
    pub fn selection(&self) -> Option<(Position, Position)> {
        let anchor = self.anchor?;
        let cursor = self.cursor.position();
        match anchor.cmp(&cursor) {
            std::cmp::Ordering::Less => Some((anchor, cursor)),
            std::cmp::Ordering::Greater => Some((cursor, anchor)),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn selected_text(&self) -> Option<String> {
        let (start, end) = self.selection()?;
        self.document.slice(start, end).ok()
    }

    fn update_anchor(&mut self, select: bool) {
        if !select {
            self.anchor = None;
        } else if self.anchor.is_none() {
            self.anchor = Some(self.cursor.position());
        }
    }

    fn move_to(&mut self, pos: Position, select: bool) {
        self.update_anchor(select);
        self.cursor.set_position(pos);
    }

    // Vertical moves keep aiming for the remembered column.
    fn move_vertical(&mut self, pos: Position, select: bool) {
        self.update_anchor(select);
        self.cursor.line = pos.line;
        self.cursor.col = pos.col;
    }

    fn delete_selection(&mut self) -> Option<String> {
        let (start, end) = self.selection()?;
        self.anchor = None;
        match self.document.remove_range(start, end) {
            Ok(removed) => {
                self.cursor.set_position(start);
                Some(removed)
            }
            Err(e) => {
                log::warn!("failed to remove selection {:?}..{:?}: {}", start, end, e);
                None
            }
        }
    }

    // Editing

    fn checkpoint(&mut self) {
        self.history.checkpoint(Snapshot {
            text: self.document.text(),
            cursor: self.cursor.position(),
        });
    }

    // Replaces the selection, if any, and returns where the insertion goes.
    fn begin_insert(&mut self, coalesce: bool) -> Position {
        if !coalesce || self.selection().is_some() {
            self.checkpoint();
        }
        self.delete_selection();
        self.anchor = None;
        self.cursor.position()
    }

    fn insert_char(&mut self, c: char, coalesce: bool) {
        let pos = self.begin_insert(coalesce);
        match self.document.insert_char(c, pos.line, pos.col) {
            Ok(end) => self.cursor.set_position(end),
            Err(e) => log::warn!("insert at {:?} failed: {}", pos, e),
        }
    }

    fn insert_text(&mut self, text: &str, coalesce: bool) {
        let pos = self.begin_insert(coalesce);
        match self.document.insert_text(text, pos.line, pos.col) {
            Ok(end) => self.cursor.set_position(end),
            Err(e) => log::warn!("insert at {:?} failed: {}", pos, e),
        }
    }

    fn backspace(&mut self) {
        if self.selection().is_some() {
            self.checkpoint();
            self.delete_selection();
            return;
        }
        self.anchor = None;
        let pos = self.cursor.position();
        if pos == motion::file_start() {
            return;
        }
        self.checkpoint();
        match self.document.delete_char(pos.line, pos.col) {
            Ok(new_pos) => self.cursor.set_position(new_pos),
            Err(e) => log::warn!("backspace at {:?} failed: {}", pos, e),
        }
    }

    fn delete_forward(&mut self) {
        if self.selection().is_some() {
            self.checkpoint();
            self.delete_selection();
            return;
        }
        self.anchor = None;
        let pos = self.cursor.position();
        if pos == self.document.end_position() {
            return;
        }
        self.checkpoint();
        if let Err(e) = self.document.delete_forward(pos.line, pos.col) {
            log::warn!("delete at {:?} failed: {}", pos, e);
        }
    }

    fn undo(&mut self) {
        let current = Snapshot {
            text: self.document.text(),
            cursor: self.cursor.position(),
        };
        match self.history.undo(current) {
            Some(previous) => self.restore(previous),
            None => self.status_message = Some("Nothing to undo".to_string()),
        }
    }

    fn redo(&mut self) {
        let current = Snapshot {
            text: self.document.text(),
            cursor: self.cursor.position(),
        };
        match self.history.redo(current) {
            Some(next) => self.restore(next),
            None => self.status_message = Some("Nothing to redo".to_string()),
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.document.restore(&snapshot.text);
        self.anchor = None;
        self.cursor
            .set_position(motion::clamp(&self.document, snapshot.cursor));
    }

    fn copy(&mut self) {
        if let Some(text) = self.selected_text() {
            self.store_clipboard(&text);
        }
    }

    fn cut(&mut self) {
        if let Some(text) = self.selected_text() {
            self.checkpoint();
            self.delete_selection();
            self.store_clipboard(&text);
        }
    }

    fn paste(&mut self) {
        let text = self.clipboard.get_text();
        if !text.is_empty() {
            self.insert_text(&text, false);
        }
    }

    fn store_clipboard(&mut self, text: &str) {
        if let Err(e) = self.clipboard.set_text(text) {
            log::warn!("{}", e);
            self.status_message = Some("Copied to internal clipboard only".to_string());
        }
    }

    // File operations

    // Runs `action` now, or asks first when there are unsaved changes.
    fn request(&mut self, action: PendingAction) {
        self.menu = None;
        if self.document.is_modified() {
            log::debug!("{:?} waits on the unsaved-changes dialog", action);
            self.pending = Some(action);
            self.dialog = Some(Dialog::unsaved_changes());
        } else {
            self.perform(action);
        }
    }

    fn perform(&mut self, action: PendingAction) {
        match action {
            PendingAction::NewFile => self.new_file(),
            PendingAction::OpenFile => {
                let initial = self.prompt_default(PromptKind::Open);
                self.dialog = Some(Dialog::prompt(PromptKind::Open, initial));
            }
            PendingAction::Exit => self.should_quit = true,
        }
    }

    fn answer_confirm(&mut self, choice: ConfirmChoice) {
        self.dialog = None;
        let Some(action) = self.pending.take() else {
            return;
        };
        match choice {
            ConfirmChoice::Save => match self.save() {
                SaveOutcome::Saved => self.perform(action),
                SaveOutcome::Prompted => self.pending = Some(action),
                SaveOutcome::Failed => log::debug!("save failed, {:?} aborted", action),
            },
            ConfirmChoice::Discard => self.perform(action),
            ConfirmChoice::Cancel => log::debug!("{:?} cancelled", action),
        }
    }

    /// Empty, unbound document. Does not ask about unsaved changes; `Command::NewFile` does.
    pub fn new_file(&mut self) {
        self.document.reset();
        self.reset_view_state();
        log::info!("new document");
    }

    fn reset_view_state(&mut self) {
        self.cursor = Cursor::new();
        self.anchor = None;
        self.viewport.offset_line = 0;
        self.viewport.offset_col = 0;
        self.history.clear();
        self.coalesce_typing = false;
        self.refresh_views();
    }

    /// Replace the document with the file at `path`. On failure an error dialog is shown
    /// and the current document is left as it was.
    pub fn open_file(&mut self, path: impl AsRef<Path>) -> Result<(), BufferError> {
        let path = path.as_ref();
        match self.document.load_from_file(path) {
            Ok(()) => {
                log::info!("opened {}", path.display());
                self.reset_view_state();
                Ok(())
            }
            Err(e) => {
                log::warn!("could not open {}: {}", path.display(), e);
                self.dialog = Some(Dialog::error(format!("Could not open file:\n{}", e)));
                Err(e)
            }
        }
    }

    /// Save to the bound path, or open the Save As prompt if there is none
    pub fn save(&mut self) -> SaveOutcome {
        let Some(path) = self.document.file_path().map(Path::to_path_buf) else {
            self.prompt_save_as();
            return SaveOutcome::Prompted;
        };
        match self.write_to(&path) {
            Ok(()) => SaveOutcome::Saved,
            Err(_) => SaveOutcome::Failed,
        }
    }

    /// Save to `path` and bind the document to it
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<(), BufferError> {
        self.write_to(path.as_ref())
    }

    fn write_to(&mut self, path: &Path) -> Result<(), BufferError> {
        match self.document.save_to_file(path) {
            Ok(()) => {
                log::info!("saved {}", path.display());
                self.status_message = Some(format!("Saved {}", self.document.display_name()));
                Ok(())
            }
            Err(e) => {
                log::warn!("could not save {}: {}", path.display(), e);
                self.dialog = Some(Dialog::error(format!("Could not save file:\n{}", e)));
                Err(e)
            }
        }
    }

    fn prompt_save_as(&mut self) {
        let initial = self.prompt_default(PromptKind::SaveAs);
        self.dialog = Some(Dialog::prompt(PromptKind::SaveAs, initial));
    }

    // Save As starts from the bound path; Open starts from its directory. Unbound documents
    // start from the working directory.
    fn prompt_default(&self, kind: PromptKind) -> String {
        let dir_of = |dir: &Path| format!("{}{}", dir.display(), MAIN_SEPARATOR);
        match (self.document.file_path(), kind) {
            (Some(path), PromptKind::SaveAs) => path.display().to_string(),
            (Some(path), PromptKind::Open) => path.parent().map(dir_of).unwrap_or_default(),
            (None, _) => std::env::current_dir()
                .map(|dir| dir_of(&dir))
                .unwrap_or_default(),
        }
    }

    fn accept_prompt(&mut self) {
        let Some(Dialog::Prompt { kind, input }) = self.dialog.take() else {
            return;
        };
        let Some(path) = parse_prompt_path(&input) else {
            self.pending = None;
            return;
        };
        match kind {
            PromptKind::Open => {
                self.open_file(&path).ok();
            }
            PromptKind::SaveAs => {
                let path = with_default_extension(path);
                match self.save_as(&path) {
                    Ok(()) => {
                        if let Some(action) = self.pending.take() {
                            self.perform(action);
                        }
                    }
                    Err(_) => self.pending = None,
                }
            }
        }
    }
}

/// Names typed without an extension are saved as `.txt`
fn with_default_extension(mut path: PathBuf) -> PathBuf {
    if path.extension().is_none() && !path.as_os_str().to_string_lossy().ends_with(MAIN_SEPARATOR)
    {
        path.set_extension("txt");
    }
    path
}
