use crate::motion::Position;
use ropey::{Rope, RopeSlice};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Error)]
pub enum BufferError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("'{}' is not valid UTF-8: {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("position {line}:{col} is outside the document")]
    OutOfBounds { line: usize, col: usize },
}

/// The text being edited, with its file binding and modified flag.
///
/// The modified flag is cleared by `load_from_file`, `save_to_file` and `reset`,
/// and set by every operation that changes the content.
#[derive(Debug, Clone)]
pub struct Document {
    rope: Rope,
    file_path: Option<PathBuf>,
    modified: bool,
}

impl Document {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            file_path: None,
            modified: false,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            ..Self::new()
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal cells used to draw `ch`. Tabs and control characters are drawn as one blank cell.
pub fn char_cells(ch: char) -> usize {
    if ch.is_control() {
        1
    } else {
        UnicodeWidthChar::width(ch).unwrap_or(0)
    }
}

// Number of chars taken by the line break at the end of `line` (0 on the last line).
fn line_break_len(line: RopeSlice<'_>) -> usize {
    let len = line.len_chars();
    if len == 0 {
        return 0;
    }
    let last = line.char(len - 1);
    if last == '\n' && len >= 2 && line.char(len - 2) == '\r' {
        2
    } else if matches!(
        last,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    ) {
        1
    } else {
        0
    }
}

impl Document {
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// File name shown in the title bar, or `Untitled` for a never-saved document.
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Line content without its line break.
    pub fn line(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx);
        let content_len = line.len_chars() - line_break_len(line);
        Some(line.slice(..content_len).to_string())
    }

    /// Number of chars on the line, excluding the line break.
    pub fn line_len(&self, line_idx: usize) -> usize {
        if line_idx < self.rope.len_lines() {
            let line = self.rope.line(line_idx);
            line.len_chars() - line_break_len(line)
        } else {
            0
        }
    }

    /// Screen cells taken by the first `col` chars of a line.
    pub fn display_col(&self, line_idx: usize, col: usize) -> usize {
        if line_idx >= self.rope.len_lines() {
            return 0;
        }
        self.rope
            .line(line_idx)
            .chars()
            .take(col.min(self.line_len(line_idx)))
            .map(char_cells)
            .sum()
    }

    /// Char column of the character drawn at screen cell `cell`. Cells past the end of the
    /// line map to the line end.
    pub fn col_at_display(&self, line_idx: usize, cell: usize) -> usize {
        let len = self.line_len(line_idx);
        if line_idx >= self.rope.len_lines() {
            return 0;
        }
        let mut start = 0;
        for (col, ch) in self.rope.line(line_idx).chars().take(len).enumerate() {
            let end = start + char_cells(ch);
            if cell < end {
                return col;
            }
            start = end;
        }
        len
    }

    pub fn char_index(&self, pos: Position) -> Result<usize, BufferError> {
        if pos.line >= self.rope.len_lines() || pos.col > self.line_len(pos.line) {
            return Err(BufferError::OutOfBounds {
                line: pos.line,
                col: pos.col,
            });
        }
        Ok(self.rope.line_to_char(pos.line) + pos.col)
    }

    pub fn position_of(&self, char_idx: usize) -> Position {
        let char_idx = char_idx.min(self.rope.len_chars());
        let line = self.rope.char_to_line(char_idx);
        let col = (char_idx - self.rope.line_to_char(line)).min(self.line_len(line));
        Position::new(line, col)
    }

    /// Position just past the last character.
    pub fn end_position(&self) -> Position {
        let last = self.rope.len_lines().saturating_sub(1);
        Position::new(last, self.line_len(last))
    }

    fn touch(&mut self) {
        self.modified = true;
    }

    pub fn insert_char(&mut self, ch: char, line: usize, col: usize) -> Result<Position, BufferError> {
        let char_idx = self.char_index(Position::new(line, col))?;
        self.rope.insert_char(char_idx, ch);
        self.touch();
        Ok(self.position_of(char_idx + 1))
    }

    /// Inserts `text` and returns the position right after it.
    pub fn insert_text(&mut self, text: &str, line: usize, col: usize) -> Result<Position, BufferError> {
        let char_idx = self.char_index(Position::new(line, col))?;
        if text.is_empty() {
            return Ok(Position::new(line, col));
        }
        self.rope.insert(char_idx, text);
        self.touch();
        Ok(self.position_of(char_idx + text.chars().count()))
    }

    /// Backspace at `(line, col)`: removes the char before the position, joining lines at
    /// column 0. Returns the new cursor position.
    pub fn delete_char(&mut self, line: usize, col: usize) -> Result<Position, BufferError> {
        let char_idx = self.char_index(Position::new(line, col))?;
        if col > 0 {
            self.rope.remove(char_idx - 1..char_idx);
            self.touch();
            Ok(Position::new(line, col - 1))
        } else if line > 0 {
            let prev_len = self.line_len(line - 1);
            let join_idx = self.rope.line_to_char(line - 1) + prev_len;
            self.rope.remove(join_idx..char_idx);
            self.touch();
            Ok(Position::new(line - 1, prev_len))
        } else {
            Ok(Position::new(0, 0))
        }
    }

    /// Delete key at `(line, col)`: removes the char under the position, or the line break
    /// when at the end of a line.
    pub fn delete_forward(&mut self, line: usize, col: usize) -> Result<(), BufferError> {
        let char_idx = self.char_index(Position::new(line, col))?;
        if col < self.line_len(line) {
            self.rope.remove(char_idx..char_idx + 1);
            self.touch();
        } else if line + 1 < self.rope.len_lines() {
            let next_start = self.rope.line_to_char(line + 1);
            self.rope.remove(char_idx..next_start);
            self.touch();
        }
        Ok(())
    }

    pub fn slice(&self, start: Position, end: Position) -> Result<String, BufferError> {
        let (start, end) = (self.char_index(start)?, self.char_index(end)?);
        let (lo, hi) = (start.min(end), start.max(end));
        Ok(self.rope.slice(lo..hi).to_string())
    }

    /// Removes the text between two positions (in either order) and returns it.
    pub fn remove_range(&mut self, start: Position, end: Position) -> Result<String, BufferError> {
        let removed = self.slice(start, end)?;
        if !removed.is_empty() {
            let (start, end) = (self.char_index(start)?, self.char_index(end)?);
            self.rope.remove(start.min(end)..start.max(end));
            self.touch();
        }
        Ok(removed)
    }

    /// Replaces the whole content, as undo/redo do. Counts as an edit.
    pub fn restore(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.touch();
    }

    /// Empties the document and unbinds its file.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), BufferError> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|source| BufferError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        self.rope = Rope::from_str(&content);
        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// Writes the content as-is to `path` and binds the document to it.
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), BufferError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(fs::File::create(path)?);
        self.rope.write_to(&mut writer)?;
        writer.flush()?;
        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_insert_char() {
        let mut doc = Document::new();
        let pos = doc.insert_char('a', 0, 0).unwrap();
        assert_eq!(doc.line(0).unwrap(), "a");
        assert_eq!(pos, Position::new(0, 1));
        assert!(doc.is_modified());
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let mut doc = Document::from_text("ab");
        assert!(matches!(
            doc.insert_char('x', 0, 3),
            Err(BufferError::OutOfBounds { line: 0, col: 3 })
        ));
        assert!(doc.insert_text("x", 1, 0).is_err());
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_insert_text_returns_end() {
        let mut doc = Document::new();
        let end = doc.insert_text("one\ntwo", 0, 0).unwrap();
        assert_eq!(end, Position::new(1, 3));
        assert_eq!(doc.line_count(), 2);
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut doc = Document::from_text("ab\ncd");
        let pos = doc.delete_char(1, 0).unwrap();
        assert_eq!(pos, Position::new(0, 2));
        assert_eq!(doc.text(), "abcd");
    }

    #[test]
    fn test_backspace_joins_crlf() {
        let mut doc = Document::from_text("ab\r\ncd");
        assert_eq!(doc.line_len(0), 2);
        doc.delete_char(1, 0).unwrap();
        assert_eq!(doc.text(), "abcd");
    }

    #[test]
    fn test_backspace_at_origin_is_noop() {
        let mut doc = Document::from_text("ab");
        let pos = doc.delete_char(0, 0).unwrap();
        assert_eq!(pos, Position::new(0, 0));
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_delete_forward() {
        let mut doc = Document::from_text("ab\ncd");
        doc.delete_forward(0, 2).unwrap();
        assert_eq!(doc.text(), "abcd");
        doc.delete_forward(0, 0).unwrap();
        assert_eq!(doc.text(), "bcd");
        doc.delete_forward(0, 3).unwrap();
        assert_eq!(doc.text(), "bcd");
    }

    #[test]
    fn test_remove_range_any_order() {
        let mut doc = Document::from_text("hello\nworld");
        let removed = doc
            .remove_range(Position::new(1, 2), Position::new(0, 3))
            .unwrap();
        assert_eq!(removed, "lo\nwo");
        assert_eq!(doc.text(), "helrld");
    }

    #[test]
    fn test_line_excludes_break() {
        let doc = Document::from_text("hello\nworld\n");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line(0).unwrap(), "hello");
        assert_eq!(doc.line_len(1), 5);
        assert_eq!(doc.line(2).unwrap(), "");
        assert!(doc.line(3).is_none());
    }

    #[test]
    fn test_display_name() {
        let mut doc = Document::new();
        assert_eq!(doc.display_name(), "Untitled");
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        doc.save_to_file(&path).unwrap();
        assert_eq!(doc.display_name(), "notes.txt");
    }

    #[test]
    fn test_load_and_save() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "hello\nworld").unwrap();

        let mut doc = Document::new();
        doc.load_from_file(temp_file.path()).unwrap();
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.line(0).unwrap(), "hello");
        assert!(!doc.is_modified());
        assert_eq!(doc.file_path(), Some(temp_file.path()));

        let save_file = NamedTempFile::new().unwrap();
        doc.save_to_file(save_file.path()).unwrap();
        let content = fs::read_to_string(save_file.path()).unwrap();
        assert_eq!(content, "hello\nworld");
    }

    #[test]
    fn test_load_invalid_utf8_leaves_document() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), [0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let mut doc = Document::from_text("keep me");
        doc.insert_char('!', 0, 7).unwrap();
        let err = doc.load_from_file(temp_file.path()).unwrap_err();
        assert!(matches!(err, BufferError::Decode { .. }));
        assert_eq!(doc.text(), "keep me!");
        assert!(doc.is_modified());
        assert!(doc.file_path().is_none());
    }

    #[test]
    fn test_save_failure_keeps_modified() {
        let dir = TempDir::new().unwrap();
        let mut doc = Document::from_text("x");
        doc.insert_char('y', 0, 1).unwrap();
        let target = dir.path().join("missing").join("file.txt");
        assert!(doc.save_to_file(&target).is_err());
        assert!(doc.is_modified());
        assert!(doc.file_path().is_none());
    }

    #[test]
    fn test_display_columns_count_wide_chars() {
        let doc = Document::from_text("中中a\tb\nx");
        assert_eq!(doc.display_col(0, 0), 0);
        assert_eq!(doc.display_col(0, 2), 4);
        assert_eq!(doc.display_col(0, 3), 5);
        assert_eq!(doc.display_col(0, 4), 6);
        assert_eq!(doc.display_col(0, 99), 7);
        assert_eq!(doc.display_col(5, 1), 0);

        assert_eq!(doc.col_at_display(0, 0), 0);
        assert_eq!(doc.col_at_display(0, 1), 0);
        assert_eq!(doc.col_at_display(0, 3), 1);
        assert_eq!(doc.col_at_display(0, 4), 2);
        assert_eq!(doc.col_at_display(0, 40), 5);
        assert_eq!(doc.col_at_display(1, 3), 1);
    }

    #[test]
    fn test_reset() {
        let mut doc = Document::from_text("abc");
        doc.insert_char('d', 0, 3).unwrap();
        doc.reset();
        assert!(doc.is_empty());
        assert!(!doc.is_modified());
        assert_eq!(doc.line_count(), 1);
    }
}
