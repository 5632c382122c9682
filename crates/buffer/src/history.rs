// Chunk: docs/chunks/undo_history - Bounded undo/redo history of edit steps

//! Undo/redo history.
//!
//! The history stores edit deltas rather than snapshots. One user-visible
//! step (typing a string, pasting over a selection, clearing the buffer) may
//! consist of several [`Edit`]s; undo reverts them in reverse order.

/// Maximum number of undo steps kept; the oldest step is dropped first.
pub const MAX_UNDO_STEPS: usize = 100;

/// A single primitive edit, in char offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Insert { offset: usize, text: String },
    Delete { offset: usize, text: String },
}

impl Edit {
    /// Returns the edit that undoes this one.
    pub fn inverse(&self) -> Edit {
        match self {
            Edit::Insert { offset, text } => Edit::Delete {
                offset: *offset,
                text: text.clone(),
            },
            Edit::Delete { offset, text } => Edit::Insert {
                offset: *offset,
                text: text.clone(),
            },
        }
    }

    /// Cursor offset after this edit has been applied.
    pub fn cursor_after(&self) -> usize {
        match self {
            Edit::Insert { offset, text } => offset + text.chars().count(),
            Edit::Delete { offset, .. } => *offset,
        }
    }
}

/// One undoable step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    pub edits: Vec<Edit>,
}

impl Step {
    pub fn new(edits: Vec<Edit>) -> Self {
        Self { edits }
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

/// Undo and redo stacks.
#[derive(Debug, Default)]
pub struct History {
    undo: Vec<Step>,
    redo: Vec<Step>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a fresh step. Clears the redo stack.
    pub fn record(&mut self, step: Step) {
        if step.is_empty() {
            return;
        }
        self.redo.clear();
        self.push_undo(step);
    }

    fn push_undo(&mut self, step: Step) {
        self.undo.push(step);
        if self.undo.len() > MAX_UNDO_STEPS {
            self.undo.remove(0);
        }
    }

    /// Pops the most recent step for undoing and parks it on the redo stack.
    pub fn undo(&mut self) -> Option<Step> {
        let step = self.undo.pop()?;
        self.redo.push(step.clone());
        Some(step)
    }

    /// Pops the most recently undone step and moves it back onto the undo stack.
    pub fn redo(&mut self) -> Option<Step> {
        let step = self.redo.pop()?;
        self.push_undo(step.clone());
        Some(step)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(offset: usize, text: &str) -> Step {
        Step::new(vec![Edit::Insert {
            offset,
            text: text.to_string(),
        }])
    }

    #[test]
    fn test_inverse_swaps_kind() {
        let edit = Edit::Insert {
            offset: 3,
            text: "ab".into(),
        };
        assert_eq!(
            edit.inverse(),
            Edit::Delete {
                offset: 3,
                text: "ab".into()
            }
        );
        assert_eq!(edit.inverse().inverse(), edit);
    }

    #[test]
    fn test_cursor_after_counts_chars() {
        let edit = Edit::Insert {
            offset: 1,
            text: "äö".into(),
        };
        assert_eq!(edit.cursor_after(), 3);
        assert_eq!(edit.inverse().cursor_after(), 1);
    }

    #[test]
    fn test_undo_then_redo_moves_step_between_stacks() {
        let mut history = History::new();
        history.record(insert(0, "a"));
        assert!(history.can_undo());
        assert!(!history.can_redo());

        assert_eq!(history.undo(), Some(insert(0, "a")));
        assert!(!history.can_undo());
        assert!(history.can_redo());

        assert_eq!(history.redo(), Some(insert(0, "a")));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new();
        history.record(insert(0, "a"));
        history.undo();
        history.record(insert(0, "b"));
        assert!(!history.can_redo());
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn test_empty_step_not_recorded() {
        let mut history = History::new();
        history.record(Step::default());
        assert!(!history.can_undo());
    }

    #[test]
    fn test_depth_is_bounded() {
        let mut history = History::new();
        for i in 0..MAX_UNDO_STEPS + 10 {
            history.record(insert(i, "x"));
        }
        let mut count = 0;
        let mut oldest = None;
        while let Some(step) = history.undo() {
            oldest = Some(step);
            count += 1;
        }
        assert_eq!(count, MAX_UNDO_STEPS);
        assert_eq!(oldest, Some(insert(10, "x")));
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.record(insert(0, "a"));
        history.record(insert(1, "b"));
        history.undo();
        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
