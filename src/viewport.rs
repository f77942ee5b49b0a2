// src/viewport.rs - Scroll window over the document, in text-area cells

use std::ops::Range;

/// The part of the document shown in the text area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line
    pub offset_line: usize,
    /// First visible column
    pub offset_col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            offset_line: 0,
            offset_col: 0,
            rows,
            cols,
        }
    }

    /// Scrolls the minimum amount needed to keep the cursor on screen.
    pub fn scroll_to_cursor(&mut self, cursor_line: usize, cursor_col: usize) {
        self.offset_line = follow(self.offset_line, self.rows, cursor_line);
        self.offset_col = follow(self.offset_col, self.cols, cursor_col);
    }

    /// Scrolls vertically by `delta` lines without moving past the last line.
    pub fn scroll_by(&mut self, delta: isize, line_count: usize) {
        let max_offset = line_count.saturating_sub(1);
        self.offset_line = self
            .offset_line
            .saturating_add_signed(delta)
            .min(max_offset);
    }

    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }

    /// Document lines that land on screen rows
    pub fn visible_lines(&self, line_count: usize) -> Range<usize> {
        let start = self.offset_line.min(line_count);
        start..self.offset_line.saturating_add(self.rows).min(line_count)
    }

    pub fn is_visible(&self, line: usize, col: usize) -> bool {
        (self.offset_line..self.offset_line + self.rows).contains(&line)
            && (self.offset_col..self.offset_col + self.cols).contains(&col)
    }
}

// New offset along one axis so that `target` falls inside `[offset, offset + len)`.
fn follow(offset: usize, len: usize, target: usize) -> usize {
    let len = len.max(1);
    if target < offset {
        target
    } else if target >= offset + len {
        target + 1 - len
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cursor_inside_does_not_scroll() {
        let mut viewport = Viewport::new(10, 20);
        viewport.scroll_to_cursor(7, 10);
        assert_eq!((viewport.offset_line, viewport.offset_col), (0, 0));
    }

    #[test]
    fn test_scrolls_just_enough() {
        let mut viewport = Viewport::new(10, 20);
        viewport.scroll_to_cursor(15, 25);
        assert_eq!(viewport.offset_line, 6);
        assert_eq!(viewport.offset_col, 6);

        viewport.offset_line = 30;
        viewport.scroll_to_cursor(12, 0);
        assert_eq!(viewport.offset_line, 12);
        assert_eq!(viewport.offset_col, 0);
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut viewport = Viewport::new(10, 20);
        viewport.scroll_by(-3, 50);
        assert_eq!(viewport.offset_line, 0);
        viewport.scroll_by(100, 50);
        assert_eq!(viewport.offset_line, 49);
        viewport.scroll_by(-9, 50);
        assert_eq!(viewport.offset_line, 40);
    }

    #[test]
    fn test_visible_lines() {
        let mut viewport = Viewport::new(5, 20);
        assert_eq!(viewport.visible_lines(3), 0..3);
        assert_eq!(viewport.visible_lines(100), 0..5);
        viewport.offset_line = 98;
        assert_eq!(viewport.visible_lines(100), 98..100);
        assert!(viewport.is_visible(99, 0));
        assert!(!viewport.is_visible(97, 0));
        assert!(!viewport.is_visible(99, 20));
    }

    proptest! {
        #[test]
        fn cursor_is_visible_after_follow(
            rows in 1..100usize,
            cols in 1..100usize,
            start_line in 0..300usize,
            line in 0..200usize,
            col in 0..200usize
        ) {
            let mut viewport = Viewport::new(rows, cols);
            viewport.offset_line = start_line;
            viewport.scroll_to_cursor(line, col);
            prop_assert!(viewport.is_visible(line, col));
        }
    }
}
