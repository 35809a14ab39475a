//! Linear undo/redo history of committed marks.

use super::mark::Mark;

/// Committed marks plus the buffer of marks that were undone.
///
/// The undo sequence is also the paint order (first = bottom layer, last = top
/// layer). Redo is only meaningful right after an undo: committing, starting a
/// new mark, or clearing invalidates it. Neither sequence has a depth limit.
///
/// Empty-stack undo and redo are silent no-ops; the returned `bool` only tells
/// the caller whether a repaint is needed.
#[derive(Debug, Default, Clone)]
pub struct HistoryStack {
    undo: Vec<Mark>,
    redo: Vec<Mark>,
}

impl HistoryStack {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a finished mark on top and drops any pending redo.
    pub fn commit(&mut self, mark: Mark) {
        self.undo.push(mark);
        self.redo.clear();
    }

    /// Moves the most recently committed mark to the redo buffer.
    pub fn undo(&mut self) -> bool {
        match self.undo.pop() {
            Some(mark) => {
                self.redo.push(mark);
                true
            }
            None => false,
        }
    }

    /// Moves the most recently undone mark back on top.
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(mark) => {
                self.undo.push(mark);
                true
            }
            None => false,
        }
    }

    /// Empties both sequences.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Invalidates pending redo without touching committed marks.
    pub fn discard_redo(&mut self) {
        self.redo.clear();
    }

    /// Committed marks in paint order.
    pub fn items(&self) -> &[Mark] {
        &self.undo
    }

    /// Undone marks, oldest undo first (the next redo is the last element).
    pub fn redo_items(&self) -> &[Mark] {
        &self.redo
    }

    pub fn len(&self) -> usize {
        self.undo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}
