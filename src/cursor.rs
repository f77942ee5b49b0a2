use crate::motion::Position;

pub struct Cursor {
    pub line: usize,
    pub col: usize,
    /// Column to return to when moving vertically through shorter lines.
    pub desired_col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            line: 0,
            col: 0,
            desired_col: 0,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }

    /// Moves to `pos` and makes its column the one kept across vertical moves.
    pub fn set_position(&mut self, pos: Position) {
        self.line = pos.line;
        self.col = pos.col;
        self.desired_col = pos.col;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cursor_new() {
        let cursor = Cursor::new();
        assert_eq!(cursor.line, 0);
        assert_eq!(cursor.col, 0);
        assert_eq!(cursor.desired_col, 0);
    }

    proptest! {
        #[test]
        fn set_position_syncs_desired_col(line in 0..1000usize, col in 0..1000usize) {
            let mut cursor = Cursor::new();
            cursor.set_position(Position::new(line, col));
            prop_assert_eq!(cursor.position(), Position::new(line, col));
            prop_assert_eq!(cursor.desired_col, col);
        }
    }
}
