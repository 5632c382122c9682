// Chunk: docs/chunks/text_selection_model - Anchor/cursor selection in char offsets

use std::ops::Range;

/// Anchor-cursor selection, in char offsets.
///
/// The anchor may sit before or after the cursor; [`Selection::range`]
/// always returns the span in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub anchor: usize,
    pub cursor: usize,
}

impl Selection {
    /// A collapsed selection (caret) at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self {
            anchor: offset,
            cursor: offset,
        }
    }

    pub fn new(anchor: usize, cursor: usize) -> Self {
        Self { anchor, cursor }
    }

    /// True when anchor and cursor coincide.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.cursor
    }

    /// The selected span in document order.
    pub fn range(&self) -> Range<usize> {
        self.anchor.min(self.cursor)..self.anchor.max(self.cursor)
    }

    /// Clamps both ends to `len`.
    pub fn clamped(self, len: usize) -> Self {
        Self {
            anchor: self.anchor.min(len),
            cursor: self.cursor.min(len),
        }
    }
}
