// src/menu.rs - File and Edit menus

use crate::command::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuId {
    File,
    Edit,
}

pub enum MenuEntry {
    Item {
        label: &'static str,
        accelerator: &'static str,
        command: Command,
    },
    Separator,
}

const FILE_MENU: &[MenuEntry] = &[
    MenuEntry::Item {
        label: "New",
        accelerator: "Ctrl+N",
        command: Command::NewFile,
    },
    MenuEntry::Item {
        label: "Open...",
        accelerator: "Ctrl+O",
        command: Command::OpenFile,
    },
    MenuEntry::Separator,
    MenuEntry::Item {
        label: "Save",
        accelerator: "Ctrl+S",
        command: Command::SaveFile,
    },
    MenuEntry::Item {
        label: "Save As...",
        accelerator: "Ctrl+Shift+S",
        command: Command::SaveFileAs,
    },
    MenuEntry::Separator,
    MenuEntry::Item {
        label: "Exit",
        accelerator: "Ctrl+Q",
        command: Command::Exit,
    },
];

const EDIT_MENU: &[MenuEntry] = &[
    MenuEntry::Item {
        label: "Undo",
        accelerator: "Ctrl+Z",
        command: Command::Undo,
    },
    MenuEntry::Item {
        label: "Redo",
        accelerator: "Ctrl+Y",
        command: Command::Redo,
    },
    MenuEntry::Separator,
    MenuEntry::Item {
        label: "Cut",
        accelerator: "Ctrl+X",
        command: Command::Cut,
    },
    MenuEntry::Item {
        label: "Copy",
        accelerator: "Ctrl+C",
        command: Command::Copy,
    },
    MenuEntry::Item {
        label: "Paste",
        accelerator: "Ctrl+V",
        command: Command::Paste,
    },
];

impl MenuId {
    pub const ALL: [MenuId; 2] = [MenuId::File, MenuId::Edit];

    pub fn title(self) -> &'static str {
        match self {
            MenuId::File => "File",
            MenuId::Edit => "Edit",
        }
    }

    pub fn entries(self) -> &'static [MenuEntry] {
        match self {
            MenuId::File => FILE_MENU,
            MenuId::Edit => EDIT_MENU,
        }
    }

    /// Column where the title starts on the menu bar. Titles are drawn as ` Title ` in order.
    pub fn bar_offset(self) -> u16 {
        MenuId::ALL
            .iter()
            .take_while(|&&id| id != self)
            .map(|id| id.title().len() as u16 + 2)
            .sum()
    }

    /// Menu whose title covers column `x` of the menu bar
    pub fn at_bar_column(x: u16) -> Option<MenuId> {
        MenuId::ALL.into_iter().find(|id| {
            let start = id.bar_offset();
            x >= start && x < start + id.title().len() as u16 + 2
        })
    }

    fn neighbour(self, step: isize) -> MenuId {
        let idx = MenuId::ALL.iter().position(|&id| id == self).unwrap_or(0) as isize;
        let len = MenuId::ALL.len() as isize;
        MenuId::ALL[(idx + step).rem_euclid(len) as usize]
    }
}

/// An open drop-down and its highlighted entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub open: MenuId,
    pub selected: usize,
}

impl MenuState {
    pub fn new(open: MenuId) -> Self {
        let selected = open
            .entries()
            .iter()
            .position(|entry| matches!(entry, MenuEntry::Item { .. }))
            .unwrap_or(0);
        Self { open, selected }
    }

    pub fn select_next(&mut self) {
        self.step(1);
    }

    pub fn select_prev(&mut self) {
        self.step(-1);
    }

    // Moves the highlight, skipping separators and wrapping around.
    fn step(&mut self, step: isize) {
        let entries = self.open.entries();
        let len = entries.len() as isize;
        let mut idx = self.selected as isize;
        for _ in 0..len {
            idx = (idx + step).rem_euclid(len);
            if matches!(entries[idx as usize], MenuEntry::Item { .. }) {
                self.selected = idx as usize;
                return;
            }
        }
    }

    pub fn open_next(&mut self) {
        *self = MenuState::new(self.open.neighbour(1));
    }

    pub fn open_prev(&mut self) {
        *self = MenuState::new(self.open.neighbour(-1));
    }

    /// Highlights entry `idx` if it is an item; returns whether it is one
    pub fn select(&mut self, idx: usize) -> bool {
        match self.open.entries().get(idx) {
            Some(MenuEntry::Item { .. }) => {
                self.selected = idx;
                true
            }
            _ => false,
        }
    }

    pub fn selected_command(&self) -> Option<Command> {
        match self.open.entries().get(self.selected) {
            Some(MenuEntry::Item { command, .. }) => Some(command.clone()),
            _ => None,
        }
    }
}
