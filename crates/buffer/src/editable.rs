// Chunk: docs/chunks/editable_capability - Capability interface shared by all text areas

//! The capability interface every text area exposes to the editor.
//!
//! The document controller and the Edit menu only ever talk to a text area
//! through [`EditableText`]. [`crate::TextBuffer`] is the in-process
//! implementation; a platform shell can implement the same trait over a native
//! text widget.
//!
//! All offsets are char offsets (Unicode scalar values) into the full content.

use std::ops::Range;

/// Editing primitives with defined pre/postconditions.
pub trait EditableText {
    /// Inserts `text` at `offset` (clamped to the length).
    ///
    /// Afterwards the cursor sits at the end of the inserted text and the
    /// selection is collapsed. Records one undo step unless `text` is empty.
    fn insert_at(&mut self, offset: usize, text: &str);

    /// Deletes `range` (clamped) and returns the removed text.
    ///
    /// Empty or reversed ranges delete nothing. Records one undo step when
    /// something was removed; the cursor ends at `range.start`.
    fn delete_range(&mut self, range: Range<usize>) -> String;

    /// Returns the full content, exactly as stored.
    fn read_all(&self) -> String;

    /// Number of chars in the content.
    fn len_chars(&self) -> usize;

    /// Replaces the content wholesale without recording an undo step, and
    /// forgets the undo/redo history. Used when a document is loaded or reset.
    fn load(&mut self, text: &str);

    /// Selects the entire content.
    fn select_all(&mut self);

    /// Moves the selection to the clipboard. Returns false when nothing is selected.
    fn cut(&mut self) -> bool;

    /// Copies the selection to the clipboard. Returns false when nothing is selected.
    fn copy(&mut self) -> bool;

    /// Replaces the selection (or inserts at the cursor) with the clipboard text.
    /// Returns false when the clipboard holds no text.
    fn paste(&mut self) -> bool;

    /// Reverts the most recent undo step. Returns false when there is none.
    fn undo(&mut self) -> bool;

    /// Re-applies the most recently undone step. Returns false when there is none.
    fn redo(&mut self) -> bool;

    /// Deletes the whole content as one undoable step.
    fn clear_all(&mut self) {
        let len = self.len_chars();
        self.delete_range(0..len);
    }

    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }
}

/// Where cut/copy/paste put and take text.
pub trait Clipboard {
    fn write_text(&mut self, text: &str);
    fn read_text(&self) -> Option<String>;
}

/// In-memory clipboard register.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Register {
    text: Option<String>,
}

impl Register {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for Register {
    fn write_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }

    fn read_text(&self) -> Option<String> {
        self.text.clone()
    }
}
