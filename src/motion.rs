// src/motion.rs - Cursor motions over a document

use crate::buffer::Document;
use unicode_segmentation::UnicodeSegmentation;

/// A position in the document (line, column), both 0-based and counted in chars
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Pull a position back inside the document
pub fn clamp(doc: &Document, pos: Position) -> Position {
    let line = pos.line.min(doc.line_count().saturating_sub(1));
    Position::new(line, pos.col.min(doc.line_len(line)))
}

/// One char left, wrapping to the end of the previous line
pub fn left(doc: &Document, pos: Position) -> Position {
    if pos.col > 0 {
        Position::new(pos.line, pos.col - 1)
    } else if pos.line > 0 {
        Position::new(pos.line - 1, doc.line_len(pos.line - 1))
    } else {
        pos
    }
}

/// One char right, wrapping to the start of the next line
pub fn right(doc: &Document, pos: Position) -> Position {
    if pos.col < doc.line_len(pos.line) {
        Position::new(pos.line, pos.col + 1)
    } else if pos.line + 1 < doc.line_count() {
        Position::new(pos.line + 1, 0)
    } else {
        pos
    }
}

/// Up `count` lines, aiming for `desired_col`
pub fn up(doc: &Document, pos: Position, desired_col: usize, count: usize) -> Position {
    let line = pos.line.saturating_sub(count);
    Position::new(line, desired_col.min(doc.line_len(line)))
}

/// Down `count` lines, aiming for `desired_col`
pub fn down(doc: &Document, pos: Position, desired_col: usize, count: usize) -> Position {
    let last = doc.line_count().saturating_sub(1);
    let line = pos.line.saturating_add(count).min(last);
    Position::new(line, desired_col.min(doc.line_len(line)))
}

pub fn line_start(pos: Position) -> Position {
    Position::new(pos.line, 0)
}

pub fn line_end(doc: &Document, pos: Position) -> Position {
    Position::new(pos.line, doc.line_len(pos.line))
}

pub fn file_start() -> Position {
    Position::new(0, 0)
}

pub fn file_end(doc: &Document) -> Position {
    doc.end_position()
}

/// Char offsets of every word start on a line, using Unicode word boundaries
fn word_starts(line: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut char_idx = 0;
    for segment in line.split_word_bounds() {
        if segment.chars().any(|c| !c.is_whitespace()) {
            starts.push(char_idx);
        }
        char_idx += segment.chars().count();
    }
    starts
}

/// Start of the next word, stopping at the end of the line before wrapping
pub fn word_right(doc: &Document, pos: Position) -> Position {
    let line = doc.line(pos.line).unwrap_or_default();
    if let Some(&start) = word_starts(&line).iter().find(|&&s| s > pos.col) {
        return Position::new(pos.line, start);
    }
    let len = doc.line_len(pos.line);
    if pos.col < len {
        Position::new(pos.line, len)
    } else if pos.line + 1 < doc.line_count() {
        let next = doc.line(pos.line + 1).unwrap_or_default();
        let first = word_starts(&next).first().copied().unwrap_or(0);
        Position::new(pos.line + 1, first)
    } else {
        pos
    }
}

/// Start of the current or previous word, wrapping to the end of the previous line
pub fn word_left(doc: &Document, pos: Position) -> Position {
    let line = doc.line(pos.line).unwrap_or_default();
    if let Some(&start) = word_starts(&line).iter().rev().find(|&&s| s < pos.col) {
        return Position::new(pos.line, start);
    }
    if pos.col > 0 {
        Position::new(pos.line, 0)
    } else if pos.line > 0 {
        Position::new(pos.line - 1, doc.line_len(pos.line - 1))
    } else {
        pos
    }
}
