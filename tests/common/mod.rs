// Common test utilities for driving the editor through commands

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use jotter::command::Command;
use jotter::dialog::Dialog;
use jotter::editor::Editor;

/// Type `text` the way a user would: one command per key
#[allow(dead_code)]
pub fn type_text(editor: &mut Editor, text: &str) {
    for c in text.chars() {
        let cmd = match c {
            '\n' => Command::InsertNewline,
            c => Command::InsertChar(c),
        };
        editor.execute_command(cmd);
    }
}

/// Editor whose document holds `text`, typed in from empty
#[allow(dead_code)]
pub fn editor_with_text(text: &str) -> Editor {
    let mut editor = Editor::new();
    type_text(&mut editor, text);
    editor
}

/// Temporary directory with one file written into it
#[allow(dead_code)]
pub fn temp_file(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

/// Replace whatever the open path prompt holds with `path` and press Enter
#[allow(dead_code)]
pub fn answer_prompt(editor: &mut Editor, path: &Path) {
    match &mut editor.dialog {
        Some(Dialog::Prompt { input, .. }) => *input = path.display().to_string(),
        other => panic!("expected a path prompt, found {:?}", other),
    }
    editor.execute_command(Command::DialogAccept);
}

/// Labels the gutter must show for the editor's current document
#[allow(dead_code)]
pub fn expected_labels(editor: &Editor) -> Vec<String> {
    (1..=editor.document.line_count()).map(|n| n.to_string()).collect()
}
