//! Linear undo/redo over whole-document snapshots

use crate::motion::Position;

/// Bounded undo/redo stacks for any snapshot type
pub struct History<T> {
    undo: Vec<T>,
    redo: Vec<T>,
    max_size: usize,
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self::with_max_size(100)
    }

    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            max_size: max_size.max(1),
        }
    }

    /// Record the state from before an edit. Any redo branch is dropped.
    pub fn checkpoint(&mut self, item: T) {
        self.undo.push(item);
        self.redo.clear();

        if self.undo.len() > self.max_size {
            self.undo.remove(0);
        }
    }

    pub fn undo(&mut self, current: T) -> Option<T> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    pub fn redo(&mut self, current: T) -> Option<T> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Document content plus where the cursor was
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub text: String,
    pub cursor: Position,
}

pub type DocumentHistory = History<Snapshot>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_redo_roundtrip() {
        let mut history = History::new();
        history.checkpoint("a");
        history.checkpoint("ab");

        assert_eq!(history.undo("abc"), Some("ab"));
        assert_eq!(history.undo("ab"), Some("a"));
        assert_eq!(history.undo("a"), None);
        assert_eq!(history.redo("a"), Some("ab"));
        assert_eq!(history.redo("ab"), Some("abc"));
        assert_eq!(history.redo("abc"), None);
    }

    #[test]
    fn test_checkpoint_clears_redo() {
        let mut history = History::new();
        history.checkpoint(1);
        assert_eq!(history.undo(2), Some(1));
        history.checkpoint(1);
        assert_eq!(history.redo(1), None);
    }

    #[test]
    fn test_max_size_drops_oldest() {
        let mut history = History::with_max_size(2);
        history.checkpoint(1);
        history.checkpoint(2);
        history.checkpoint(3);
        assert_eq!(history.undo(4), Some(3));
        assert_eq!(history.undo(3), Some(2));
        assert_eq!(history.undo(2), None);
    }
}
