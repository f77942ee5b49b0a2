// src/view.rs - Derived views: gutter line labels, status text, window title

use crate::buffer::Document;
use crate::cursor::Cursor;
use crate::viewport::Viewport;

pub const APP_NAME: &str = "Jotter";

/// Line labels for the gutter, kept in step with the document and its scroll offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GutterView {
    line_count: usize,
    offset_line: usize,
    labels: Vec<String>,
}

impl GutterView {
    pub fn new() -> Self {
        Self {
            line_count: 1,
            offset_line: 0,
            labels: vec!["1".to_string()],
        }
    }

    /// Recompute the line count and labels, and sync the vertical offset with the viewport.
    /// Labels are only rebuilt when the line count changed.
    pub fn refresh(&mut self, doc: &Document, viewport: &Viewport) {
        let line_count = doc.line_count();
        if line_count != self.line_count || self.labels.len() != line_count {
            self.labels = (1..=line_count).map(|n| n.to_string()).collect();
            self.line_count = line_count;
        }
        self.offset_line = viewport.offset_line;
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn offset_line(&self) -> usize {
        self.offset_line
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Labels for `rows` screen rows starting at the scroll offset
    pub fn visible(&self, rows: usize) -> impl Iterator<Item = &str> {
        self.labels
            .iter()
            .skip(self.offset_line)
            .take(rows)
            .map(String::as_str)
    }

    /// Columns needed for the widest label plus padding
    pub fn width(&self) -> u16 {
        let digits = self.line_count.max(1).ilog10() as u16 + 1;
        digits.max(3) + 2
    }
}

impl Default for GutterView {
    fn default() -> Self {
        Self::new()
    }
}

/// Cursor location, status text and window title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    /// 1-based line
    pub line: usize,
    /// 0-based column
    pub column: usize,
    pub text: String,
    pub title: String,
}

impl StatusView {
    pub fn new() -> Self {
        Self {
            line: 1,
            column: 0,
            text: "Ready | Line 1, Column 0".to_string(),
            title: format!("Untitled - {}", APP_NAME),
        }
    }

    pub fn refresh(&mut self, doc: &Document, cursor: &Cursor, message: Option<&str>) {
        self.line = cursor.line + 1;
        self.column = cursor.col;
        self.text = format!("Ready | Line {}, Column {}", self.line, self.column);
        if let Some(msg) = message {
            self.text.push_str(" | ");
            self.text.push_str(msg);
        }
        self.title = window_title(doc);
    }
}

impl Default for StatusView {
    fn default() -> Self {
        Self::new()
    }
}

/// `name - Jotter`, prefixed with `*` while there are unsaved changes
pub fn window_title(doc: &Document) -> String {
    let marker = if doc.is_modified() { "*" } else { "" };
    format!("{}{} - {}", marker, doc.display_name(), APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gutter_follows_line_count() {
        let mut doc = Document::new();
        let viewport = Viewport::new(10, 40);
        let mut gutter = GutterView::new();
        gutter.refresh(&doc, &viewport);
        assert_eq!(gutter.labels(), ["1"]);

        doc.insert_text("a\nb\nc", 0, 0).unwrap();
        gutter.refresh(&doc, &viewport);
        assert_eq!(gutter.labels(), ["1", "2", "3"]);
        assert_eq!(gutter.line_count(), 3);
    }

    #[test]
    fn test_gutter_visible_window() {
        let doc = Document::from_text(&"x\n".repeat(20));
        let mut viewport = Viewport::new(5, 40);
        viewport.offset_line = 10;
        let mut gutter = GutterView::new();
        gutter.refresh(&doc, &viewport);
        let visible: Vec<&str> = gutter.visible(5).collect();
        assert_eq!(visible, ["11", "12", "13", "14", "15"]);
        assert_eq!(gutter.offset_line(), 10);
    }

    #[test]
    fn test_gutter_width() {
        let mut gutter = GutterView::new();
        assert_eq!(gutter.width(), 5);
        let doc = Document::from_text(&"\n".repeat(12_345));
        gutter.refresh(&doc, &Viewport::new(10, 10));
        assert_eq!(gutter.width(), 7);
    }

    #[test]
    fn test_status_text_and_title() {
        let mut doc = Document::new();
        let mut cursor = Cursor::new();
        let mut status = StatusView::new();
        status.refresh(&doc, &cursor, None);
        assert_eq!(status.text, "Ready | Line 1, Column 0");
        assert_eq!(status.title, "Untitled - Jotter");

        let end = doc.insert_text("ab\ncde", 0, 0).unwrap();
        cursor.set_position(end);
        status.refresh(&doc, &cursor, Some("Pasted"));
        assert_eq!(status.text, "Ready | Line 2, Column 3 | Pasted");
        assert_eq!(status.title, "*Untitled - Jotter");
        assert_eq!((status.line, status.column), (2, 3));
    }

    proptest! {
        #[test]
        fn gutter_labels_match_line_count(text in "[a-z\\n]{0,200}") {
            let doc = Document::from_text(&text);
            let mut gutter = GutterView::new();
            gutter.refresh(&doc, &Viewport::new(10, 10));
            let expected: Vec<String> = (1..=doc.line_count()).map(|n| n.to_string()).collect();
            prop_assert_eq!(gutter.labels(), expected.as_slice());
        }
    }
}
