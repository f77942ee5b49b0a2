// src/dialog.rs - Modal dialogs: unsaved-changes confirmation, path prompts, errors

use std::path::PathBuf;

/// Answer to the unsaved-changes question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Save,
    Discard,
    Cancel,
}

impl ConfirmChoice {
    pub const ALL: [ConfirmChoice; 3] = [Self::Save, Self::Discard, Self::Cancel];

    pub fn label(self) -> &'static str {
        match self {
            Self::Save => "Save",
            Self::Discard => "Don't Save",
            Self::Cancel => "Cancel",
        }
    }

    /// Keyboard shortcut shown underlined on the button
    pub fn hotkey(self) -> char {
        match self {
            Self::Save => 's',
            Self::Discard => 'd',
            Self::Cancel => 'c',
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Save => Self::Discard,
            Self::Discard => Self::Cancel,
            Self::Cancel => Self::Save,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Save => Self::Cancel,
            Self::Discard => Self::Save,
            Self::Cancel => Self::Discard,
        }
    }
}

/// What a path prompt is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Open,
    SaveAs,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::SaveAs => "Save As",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Confirm {
        title: String,
        message: String,
        selected: ConfirmChoice,
    },
    Prompt {
        kind: PromptKind,
        input: String,
    },
    Error {
        title: String,
        message: String,
    },
}

impl Dialog {
    pub fn unsaved_changes() -> Self {
        Dialog::Confirm {
            title: "Unsaved Changes".to_string(),
            message: "Do you want to save the changes?".to_string(),
            selected: ConfirmChoice::Save,
        }
    }

    /// Path prompt pre-filled with `initial`
    pub fn prompt(kind: PromptKind, initial: String) -> Self {
        Dialog::Prompt {
            kind,
            input: initial,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Dialog::Error {
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Dialog::Confirm { title, .. } | Dialog::Error { title, .. } => title,
            Dialog::Prompt { kind, .. } => kind.title(),
        }
    }
}

/// Turns prompt input into a path; blank input means the prompt was dismissed
pub fn parse_prompt_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(rest) = trimmed.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return Some(home.join(rest));
    }
    Some(PathBuf::from(trimmed))
}
