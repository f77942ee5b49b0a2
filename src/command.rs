use crate::dialog::ConfirmChoice;
use crate::menu::MenuId;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // Cursor movement; `select` extends the selection instead of clearing it
    MoveLeft { select: bool },
    MoveRight { select: bool },
    MoveUp { select: bool },
    MoveDown { select: bool },
    MoveWordLeft { select: bool },
    MoveWordRight { select: bool },
    MoveLineStart { select: bool },
    MoveLineEnd { select: bool },
    MoveFileStart { select: bool },
    MoveFileEnd { select: bool },
    PageUp { select: bool },
    PageDown { select: bool },
    SelectAll,

    // Editing
    InsertChar(char),
    InsertNewline,
    InsertTab,
    DeleteChar,
    DeleteForward,

    // File menu
    NewFile,
    OpenFile,
    SaveFile,
    SaveFileAs,
    Exit,

    // Edit menu
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,

    // Pointer, in text-area coordinates
    Click { row: u16, col: u16 },
    Drag { row: u16, col: u16 },
    Hover,
    ScrollUp,
    ScrollDown,

    // Menu bar
    OpenMenu(MenuId),
    MenuUp,
    MenuDown,
    MenuLeft,
    MenuRight,
    MenuActivate,
    /// Highlight and activate entry `n` of the open menu
    MenuPick(usize),
    CloseMenu,

    // Dialogs
    DialogChoose(ConfirmChoice),
    DialogNextButton,
    DialogPrevButton,
    DialogAccept,
    DialogCancel,
    PromptInput(char),
    PromptBackspace,
}
