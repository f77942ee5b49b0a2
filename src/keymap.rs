// src/keymap.rs - Translate terminal input into editor commands

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::command::Command;
use crate::dialog::ConfirmChoice;
use crate::menu::{MenuId, MenuState};
use crate::mode::Mode;
use crate::ui::layout::ScreenLayout;
use crate::ui::widgets::menu::MenuDropdown;

pub fn key_to_command(key_event: KeyEvent, mode: Mode) -> Option<Command> {
    // Terminals with key-release reporting send a second event per key
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match mode {
        Mode::Edit => edit_key(key_event),
        Mode::Menu => match key_event.code {
            KeyCode::Up => Some(Command::MenuUp),
            KeyCode::Down => Some(Command::MenuDown),
            KeyCode::Left => Some(Command::MenuLeft),
            KeyCode::Right => Some(Command::MenuRight),
            KeyCode::Enter => Some(Command::MenuActivate),
            KeyCode::Esc | KeyCode::F(10) => Some(Command::CloseMenu),
            _ => None,
        },
        Mode::Confirm => match key_event.code {
            KeyCode::Left | KeyCode::BackTab => Some(Command::DialogPrevButton),
            KeyCode::Right | KeyCode::Tab => Some(Command::DialogNextButton),
            KeyCode::Enter => Some(Command::DialogAccept),
            KeyCode::Esc => Some(Command::DialogCancel),
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'y' => Some(Command::DialogChoose(ConfirmChoice::Save)),
                'n' => Some(Command::DialogChoose(ConfirmChoice::Discard)),
                c => ConfirmChoice::ALL
                    .into_iter()
                    .find(|choice| choice.hotkey() == c)
                    .map(Command::DialogChoose),
            },
            _ => None,
        },
        Mode::Prompt => match key_event.code {
            KeyCode::Enter => Some(Command::DialogAccept),
            KeyCode::Esc => Some(Command::DialogCancel),
            KeyCode::Backspace => Some(Command::PromptBackspace),
            KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Command::PromptInput(c))
            }
            _ => None,
        },
        Mode::Alert => match key_event.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Command::DialogAccept),
            _ => None,
        },
    }
}

fn edit_key(key_event: KeyEvent) -> Option<Command> {
    let mods = key_event.modifiers;
    let ctrl = mods.contains(KeyModifiers::CONTROL);
    let shift = mods.contains(KeyModifiers::SHIFT);
    let alt = mods.contains(KeyModifiers::ALT);
    let select = shift;

    if ctrl && let KeyCode::Char(c) = key_event.code {
        let shifted = shift || c.is_ascii_uppercase();
        return match c.to_ascii_lowercase() {
            'n' => Some(Command::NewFile),
            'o' => Some(Command::OpenFile),
            's' if shifted => Some(Command::SaveFileAs),
            's' => Some(Command::SaveFile),
            'q' => Some(Command::Exit),
            'z' if shifted => Some(Command::Redo),
            'z' => Some(Command::Undo),
            'y' => Some(Command::Redo),
            'x' => Some(Command::Cut),
            'c' => Some(Command::Copy),
            'v' => Some(Command::Paste),
            'a' => Some(Command::SelectAll),
            _ => None,
        };
    }

    if alt && let KeyCode::Char(c) = key_event.code {
        return match c.to_ascii_lowercase() {
            'f' => Some(Command::OpenMenu(MenuId::File)),
            'e' => Some(Command::OpenMenu(MenuId::Edit)),
            _ => None,
        };
    }

    match key_event.code {
        KeyCode::F(10) => Some(Command::OpenMenu(MenuId::File)),
        KeyCode::F(12) => Some(Command::SaveFileAs),

        KeyCode::Left if ctrl => Some(Command::MoveWordLeft { select }),
        KeyCode::Right if ctrl => Some(Command::MoveWordRight { select }),
        KeyCode::Left => Some(Command::MoveLeft { select }),
        KeyCode::Right => Some(Command::MoveRight { select }),
        KeyCode::Up => Some(Command::MoveUp { select }),
        KeyCode::Down => Some(Command::MoveDown { select }),
        KeyCode::Home if ctrl => Some(Command::MoveFileStart { select }),
        KeyCode::End if ctrl => Some(Command::MoveFileEnd { select }),
        KeyCode::Home => Some(Command::MoveLineStart { select }),
        KeyCode::End => Some(Command::MoveLineEnd { select }),
        KeyCode::PageUp => Some(Command::PageUp { select }),
        KeyCode::PageDown => Some(Command::PageDown { select }),

        KeyCode::Enter => Some(Command::InsertNewline),
        KeyCode::Tab => Some(Command::InsertTab),
        KeyCode::Backspace => Some(Command::DeleteChar),
        KeyCode::Delete => Some(Command::DeleteForward),
        KeyCode::Char(c) if !ctrl => Some(Command::InsertChar(c)),
        _ => None,
    }
}

/// Pointer input. Coordinates in the returned commands are relative to the text area.
pub fn mouse_to_command(
    mouse_event: MouseEvent,
    mode: Mode,
    layout: &ScreenLayout,
    menu: Option<&MenuState>,
) -> Option<Command> {
    let (column, row) = (mouse_event.column, mouse_event.row);
    match mode {
        Mode::Edit => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if layout.in_menu_bar(column, row) {
                    return MenuId::at_bar_column(column - layout.menu_bar.x).map(Command::OpenMenu);
                }
                let (row, col) = layout.text_cell(column, row)?;
                Some(Command::Click { row, col })
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let (row, col) = layout.text_cell(column, row)?;
                Some(Command::Drag { row, col })
            }
            MouseEventKind::ScrollUp => Some(Command::ScrollUp),
            MouseEventKind::ScrollDown => Some(Command::ScrollDown),
            MouseEventKind::Moved => Some(Command::Hover),
            _ => None,
        },
        Mode::Menu => {
            let open = menu?.open;
            match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(idx) = MenuDropdown::entry_at(open, layout.screen, column, row) {
                        return Some(Command::MenuPick(idx));
                    }
                    if MenuDropdown::contains(open, layout.screen, column, row) {
                        // Border of the drop-down
                        return None;
                    }
                    if layout.in_menu_bar(column, row) {
                        return match MenuId::at_bar_column(column - layout.menu_bar.x) {
                            Some(id) if id != open => Some(Command::OpenMenu(id)),
                            _ => Some(Command::CloseMenu),
                        };
                    }
                    Some(Command::CloseMenu)
                }
                _ => None,
            }
        }
        // Dialogs are answered from the keyboard
        Mode::Confirm | Mode::Prompt | Mode::Alert => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_accelerators() {
        let ctrl = KeyModifiers::CONTROL;
        assert_eq!(
            key_to_command(key(KeyCode::Char('s'), ctrl), Mode::Edit),
            Some(Command::SaveFile)
        );
        assert_eq!(
            key_to_command(
                key(KeyCode::Char('S'), ctrl | KeyModifiers::SHIFT),
                Mode::Edit
            ),
            Some(Command::SaveFileAs)
        );
        assert_eq!(
            key_to_command(key(KeyCode::Char('q'), ctrl), Mode::Edit),
            Some(Command::Exit)
        );
        assert_eq!(
            key_to_command(key(KeyCode::Char('y'), ctrl), Mode::Edit),
            Some(Command::Redo)
        );
        // Unbound control chords never reach the document
        assert_eq!(key_to_command(key(KeyCode::Char('k'), ctrl), Mode::Edit), None);
    }

    #[test]
    fn test_typing_and_selection_keys() {
        assert_eq!(
            key_to_command(key(KeyCode::Char('A'), KeyModifiers::SHIFT), Mode::Edit),
            Some(Command::InsertChar('A'))
        );
        assert_eq!(
            key_to_command(key(KeyCode::Right, KeyModifiers::SHIFT), Mode::Edit),
            Some(Command::MoveRight { select: true })
        );
        assert_eq!(
            key_to_command(key(KeyCode::Home, KeyModifiers::CONTROL), Mode::Edit),
            Some(Command::MoveFileStart { select: false })
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let mut event = key(KeyCode::Char('a'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        event.state = KeyEventState::NONE;
        assert_eq!(key_to_command(event, Mode::Edit), None);
    }

    #[test]
    fn test_confirm_hotkeys() {
        let none = KeyModifiers::NONE;
        assert_eq!(
            key_to_command(key(KeyCode::Char('d'), none), Mode::Confirm),
            Some(Command::DialogChoose(ConfirmChoice::Discard))
        );
        assert_eq!(
            key_to_command(key(KeyCode::Char('Y'), none), Mode::Confirm),
            Some(Command::DialogChoose(ConfirmChoice::Save))
        );
        assert_eq!(
            key_to_command(key(KeyCode::Esc, none), Mode::Confirm),
            Some(Command::DialogCancel)
        );
        assert_eq!(key_to_command(key(KeyCode::Char('z'), none), Mode::Confirm), None);
    }

    #[test]
    fn test_prompt_keys_type_into_input() {
        let none = KeyModifiers::NONE;
        assert_eq!(
            key_to_command(key(KeyCode::Char('q'), none), Mode::Prompt),
            Some(Command::PromptInput('q'))
        );
        assert_eq!(
            key_to_command(key(KeyCode::Backspace, none), Mode::Prompt),
            Some(Command::PromptBackspace)
        );
    }

    #[test]
    fn test_mouse_in_edit_mode() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24), 5);
        assert_eq!(
            mouse_to_command(
                mouse(MouseEventKind::Down(MouseButton::Left), 8, 2),
                Mode::Edit,
                &layout,
                None
            ),
            Some(Command::Click { row: 1, col: 3 })
        );
        assert_eq!(
            mouse_to_command(
                mouse(MouseEventKind::Down(MouseButton::Left), 7, 0),
                Mode::Edit,
                &layout,
                None
            ),
            Some(Command::OpenMenu(MenuId::Edit))
        );
        assert_eq!(
            mouse_to_command(mouse(MouseEventKind::ScrollDown, 8, 2), Mode::Edit, &layout, None),
            Some(Command::ScrollDown)
        );
    }

    #[test]
    fn test_mouse_in_menu_mode() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24), 5);
        let menu = MenuState::new(MenuId::File);
        let area = MenuDropdown::area(MenuId::File, layout.screen);
        let click = |column, row| {
            mouse_to_command(
                mouse(MouseEventKind::Down(MouseButton::Left), column, row),
                Mode::Menu,
                &layout,
                Some(&menu),
            )
        };
        assert_eq!(click(area.x + 2, area.y + 1), Some(Command::MenuPick(0)));
        assert_eq!(click(7, 0), Some(Command::OpenMenu(MenuId::Edit)));
        assert_eq!(click(1, 0), Some(Command::CloseMenu));
        assert_eq!(click(70, 20), Some(Command::CloseMenu));
    }
}
