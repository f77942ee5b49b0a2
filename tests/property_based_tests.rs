// Property-based tests using proptest
// Random command sequences must never break the editor's invariants

mod common;

use common::expected_labels;
use jotter::buffer::Document;
use jotter::command::Command;
use jotter::editor::Editor;
use jotter::motion::{self, Position};
use proptest::prelude::*;

fn editing_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        any::<bool>().prop_map(|select| Command::MoveLeft { select }),
        any::<bool>().prop_map(|select| Command::MoveRight { select }),
        any::<bool>().prop_map(|select| Command::MoveUp { select }),
        any::<bool>().prop_map(|select| Command::MoveDown { select }),
        any::<bool>().prop_map(|select| Command::MoveWordLeft { select }),
        any::<bool>().prop_map(|select| Command::MoveWordRight { select }),
        any::<bool>().prop_map(|select| Command::MoveLineEnd { select }),
        any::<bool>().prop_map(|select| Command::PageDown { select }),
        prop::char::range('a', 'z').prop_map(Command::InsertChar),
        Just(Command::InsertChar(' ')),
        Just(Command::InsertChar('é')),
        Just(Command::InsertNewline),
        Just(Command::InsertTab),
        Just(Command::DeleteChar),
        Just(Command::DeleteForward),
        Just(Command::SelectAll),
        Just(Command::Undo),
        Just(Command::Redo),
        Just(Command::Cut),
        Just(Command::Copy),
        Just(Command::Paste),
        Just(Command::ScrollUp),
        Just(Command::ScrollDown),
        (0u16..12, 0u16..30).prop_map(|(row, col)| Command::Click { row, col }),
        (0u16..12, 0u16..30).prop_map(|(row, col)| Command::Drag { row, col }),
    ]
}

fn is_valid(doc: &Document, pos: Position) -> bool {
    pos.line < doc.line_count() && pos.col <= doc.line_len(pos.line)
}

// Property: after any command the cursor is inside the document and every derived
// view agrees with the document
proptest! {
    #[test]
    fn commands_preserve_view_invariants(
        commands in prop::collection::vec(editing_command(), 0..60)
    ) {
        let mut editor = Editor::new();
        editor.handle_resize(8, 24);
        for cmd in commands {
            editor.execute_command(cmd);

            prop_assert!(is_valid(&editor.document, editor.cursor.position()));
            if let Some(anchor) = editor.anchor {
                prop_assert!(is_valid(&editor.document, anchor));
            }
            let labels = expected_labels(&editor);
            prop_assert_eq!(editor.gutter.labels(), labels.as_slice());
            prop_assert_eq!(editor.gutter.offset_line(), editor.viewport.offset_line);
            let expected_status = format!(
                "Ready | Line {}, Column {}",
                editor.cursor.line + 1,
                editor.cursor.col
            );
            prop_assert!(editor.status.text.starts_with(&expected_status));
            prop_assert_eq!(
                editor.status.title.starts_with('*'),
                editor.document.is_modified()
            );
        }
    }
}

// Property: the cursor stays on screen after every command that follows it
proptest! {
    #[test]
    fn cursor_stays_visible_after_typing(text in "[a-z \\n]{0,200}") {
        let mut editor = Editor::new();
        editor.handle_resize(5, 10);
        common::type_text(&mut editor, &text);

        let viewport = &editor.viewport;
        prop_assert!(editor.cursor.line >= viewport.offset_line);
        prop_assert!(editor.cursor.line < viewport.offset_line + viewport.rows);
        prop_assert!(editor.cursor_cell() >= viewport.offset_col);
        prop_assert!(editor.cursor_cell() < viewport.offset_col + viewport.cols);
    }
}

// Property: undoing every step of a typing session restores the empty document
proptest! {
    #[test]
    fn undo_all_restores_empty(text in "[a-z \\n]{1,40}") {
        let mut editor = Editor::new();
        common::type_text(&mut editor, &text);
        prop_assert_eq!(editor.document.text(), text.clone());

        for _ in 0..text.len() {
            editor.execute_command(Command::Undo);
        }
        prop_assert_eq!(editor.document.text(), "");
    }
}

// Property: saving and reopening gives back exactly the typed content
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]
    #[test]
    fn save_then_open_is_lossless(text in "[a-zA-Z0-9 \\né中]{0,80}") {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("roundtrip.txt");

        let mut editor = Editor::new();
        common::type_text(&mut editor, &text);
        editor.save_as(&path).unwrap();
        prop_assert!(!editor.document.is_modified());

        let mut reopened = Editor::new();
        reopened.open_file(&path).unwrap();
        prop_assert_eq!(reopened.document.text(), text);
        prop_assert_eq!(
            reopened.gutter.line_count(),
            reopened.document.line_count()
        );
    }
}

// Property: motions never leave the document
proptest! {
    #[test]
    fn word_motions_stay_in_bounds(
        text in "[a-z .,\\n]{0,60}",
        line in 0usize..10,
        col in 0usize..20
    ) {
        let doc = Document::from_text(&text);
        let pos = motion::clamp(&doc, Position::new(line, col));
        prop_assert!(is_valid(&doc, motion::word_right(&doc, pos)));
        prop_assert!(is_valid(&doc, motion::word_left(&doc, pos)));
        prop_assert!(motion::word_right(&doc, pos) >= pos);
        prop_assert!(motion::word_left(&doc, pos) <= pos);
    }
}
