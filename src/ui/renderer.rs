// ui/renderer.rs - Ratatui-based renderer for the notepad window

use crossterm::terminal::SetTitle;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};

use crate::editor::Editor;
use crate::mode::Mode;
use crate::ui::layout::ScreenLayout;
use crate::ui::theme::Theme;
use crate::ui::widgets::dialog::DialogWidget;
use crate::ui::widgets::editor_pane::EditorPane;
use crate::ui::widgets::gutter::Gutter;
use crate::ui::widgets::menu::{MenuBar, MenuDropdown};
use crate::ui::widgets::status_bar::StatusBar;

/// Ratatui-based renderer for the editor window
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    last_title: Option<String>,
}

impl TuiRenderer {
    pub fn new(theme: Theme) -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            theme,
            last_title: None,
        })
    }

    /// Screen regions for the current terminal size
    pub fn layout(&self, editor: &Editor) -> io::Result<ScreenLayout> {
        let size = self.terminal.size()?;
        Ok(ScreenLayout::new(size, editor.gutter.width()))
    }

    /// Draw the editor UI and keep the terminal title in sync
    pub fn draw(&mut self, editor: &Editor, layout: &ScreenLayout) -> io::Result<()> {
        let title = editor.status.title.clone();
        if self.last_title.as_deref() != Some(title.as_str()) {
            crossterm::execute!(io::stdout(), SetTitle(&title))?;
            self.last_title = Some(title);
        }

        let theme = &self.theme;
        self.terminal.draw(|f| {
            let open_menu = editor.menu.as_ref().map(|menu| menu.open);
            f.render_widget(
                MenuBar::new(open_menu, &editor.status.title, theme),
                layout.menu_bar,
            );
            f.render_widget(Gutter::new(editor, theme), layout.gutter);
            f.render_widget(EditorPane::new(editor, theme), layout.text);
            f.render_widget(StatusBar::new(editor, theme), layout.status);

            if let Some(menu) = editor.menu {
                let area = MenuDropdown::area(menu.open, layout.screen);
                f.render_widget(MenuDropdown::new(menu, theme), area);
            }

            if let Some(dialog) = &editor.dialog {
                let area = DialogWidget::area(dialog, layout.screen);
                f.render_widget(DialogWidget::new(dialog, theme), area);
            }

            match editor.mode() {
                Mode::Edit => {
                    if let Some((x, y)) = text_cursor(editor, layout.text) {
                        f.set_cursor(x, y);
                    }
                }
                Mode::Prompt => {
                    if let Some(dialog) = &editor.dialog
                        && let Some((x, y)) = DialogWidget::prompt_cursor(dialog, layout.screen)
                    {
                        f.set_cursor(x, y);
                    }
                }
                // The terminal cursor stays hidden behind menus and alerts
                Mode::Menu | Mode::Confirm | Mode::Alert => {}
            }
        })?;
        Ok(())
    }
}

/// Screen cell of the text cursor, if it is scrolled into view
fn text_cursor(editor: &Editor, text: Rect) -> Option<(u16, u16)> {
    let viewport = &editor.viewport;
    let (line, col) = (editor.cursor.line, editor.cursor_cell());
    if !viewport.is_visible(line, col) {
        return None;
    }
    let row = (line - viewport.offset_line) as u16;
    let col = (col - viewport.offset_col) as u16;
    (row < text.height && col < text.width).then(|| (text.x + col, text.y + row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    #[test]
    fn test_text_cursor_tracks_viewport() {
        let mut editor = Editor::new();
        editor.handle_resize(10, 40);
        editor.execute_command(Command::InsertChar('a'));
        editor.execute_command(Command::InsertChar('b'));
        let text = Rect::new(5, 1, 40, 10);
        assert_eq!(text_cursor(&editor, text), Some((7, 1)));

        editor.viewport.offset_line = 3;
        assert_eq!(text_cursor(&editor, text), None);
    }

    #[test]
    fn test_text_cursor_counts_wide_glyphs() {
        let mut editor = Editor::new();
        editor.handle_resize(10, 40);
        for c in "中中a".chars() {
            editor.execute_command(Command::InsertChar(c));
        }
        assert_eq!(editor.cursor.col, 3);
        let text = Rect::new(5, 1, 40, 10);
        assert_eq!(text_cursor(&editor, text), Some((10, 1)));
    }
}
