// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing
// Chunk: docs/chunks/undo_history - Undo/redo over recorded edit steps

//! TextBuffer is the in-process implementation of [`EditableText`].
//!
//! It combines a gap buffer (char storage), an anchor/cursor selection, an
//! undo/redo [`History`] of edit deltas, and a [`Clipboard`] for
//! cut/copy/paste. Every mutation that goes through the public API records
//! exactly one undo step; [`EditableText::load`] records none and forgets the
//! history.

use std::fmt;
use std::ops::Range;

use crate::editable::{Clipboard, EditableText, Register};
use crate::gap_buffer::GapBuffer;
use crate::history::{Edit, History, Step};
use crate::types::Selection;

/// A text buffer with selection, undo/redo, and clipboard support.
pub struct TextBuffer {
    buffer: GapBuffer,
    selection: Selection,
    history: History,
    clipboard: Box<dyn Clipboard>,
}

impl TextBuffer {
    /// Creates an empty buffer with an in-memory clipboard.
    pub fn new() -> Self {
        Self {
            buffer: GapBuffer::new(),
            selection: Selection::default(),
            history: History::new(),
            clipboard: Box::new(Register::new()),
        }
    }

    /// Creates a buffer holding `content`, cursor at the start, no history.
    ///
    /// Not `FromStr`: building a buffer from a string cannot fail.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        Self {
            buffer: GapBuffer::from_str(content),
            ..Self::new()
        }
    }

    /// Replaces the clipboard the buffer cuts to and pastes from.
    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    // ==================== Accessors ====================

    /// Total char count.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The entire content as a String.
    pub fn content(&self) -> String {
        self.buffer.to_string()
    }

    /// Cursor offset.
    pub fn cursor(&self) -> usize {
        self.selection.cursor
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// The selected text, or `None` when the selection is collapsed.
    pub fn selected_text(&self) -> Option<String> {
        if self.selection.is_empty() {
            return None;
        }
        let range = self.selection.range();
        Some(self.buffer.slice(range.start, range.end))
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ==================== Selection ====================

    /// Collapses the selection to a caret at `offset` (clamped).
    pub fn set_cursor(&mut self, offset: usize) {
        self.selection = Selection::caret(offset.min(self.len()));
    }

    /// Selects `range` (clamped); the cursor ends at `range.end`.
    pub fn select(&mut self, range: Range<usize>) {
        self.selection = Selection::new(range.start, range.end).clamped(self.len());
    }

    // ==================== Mutations ====================

    /// Types `text` at the cursor, replacing the selection if there is one.
    ///
    /// Replacing a selection is a single undo step.
    pub fn insert_str(&mut self, text: &str) {
        let range = self.selection.range();
        let mut edits = Vec::with_capacity(2);
        if let Some(edit) = self.apply_delete(range.clone()) {
            edits.push(edit);
        }
        if let Some(edit) = self.apply_insert(range.start, text) {
            edits.push(edit);
        }
        self.commit(edits);
    }

    /// Removes `range` from storage and returns the matching edit, if any.
    fn apply_delete(&mut self, range: Range<usize>) -> Option<Edit> {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        let text = self.buffer.delete_range(start, end);
        if text.is_empty() {
            return None;
        }
        Some(Edit::Delete {
            offset: start,
            text,
        })
    }

    /// Inserts into storage and returns the matching edit, if any.
    fn apply_insert(&mut self, offset: usize, text: &str) -> Option<Edit> {
        if text.is_empty() {
            return None;
        }
        let offset = offset.min(self.len());
        self.buffer.insert_str_at(offset, text);
        Some(Edit::Insert {
            offset,
            text: text.to_string(),
        })
    }

    /// Replays an edit without recording it.
    fn replay(&mut self, edit: &Edit) {
        match edit {
            Edit::Insert { offset, text } => {
                self.buffer.insert_str_at(*offset, text);
            }
            Edit::Delete { offset, text } => {
                self.buffer
                    .delete_range(*offset, offset + text.chars().count());
            }
        }
        self.selection = Selection::caret(edit.cursor_after());
    }

    /// Records applied edits as one step and places the caret after the last one.
    fn commit(&mut self, edits: Vec<Edit>) {
        if let Some(last) = edits.last() {
            self.selection = Selection::caret(last.cursor_after());
        }
        self.history.record(Step::new(edits));
    }
}

impl EditableText for TextBuffer {
    fn insert_at(&mut self, offset: usize, text: &str) {
        let edits = self.apply_insert(offset, text).into_iter().collect();
        self.commit(edits);
    }

    fn delete_range(&mut self, range: Range<usize>) -> String {
        match self.apply_delete(range) {
            Some(edit) => {
                let removed = match &edit {
                    Edit::Delete { text, .. } => text.clone(),
                    Edit::Insert { .. } => String::new(),
                };
                self.commit(vec![edit]);
                removed
            }
            None => String::new(),
        }
    }

    fn read_all(&self) -> String {
        self.content()
    }

    fn len_chars(&self) -> usize {
        self.len()
    }

    fn load(&mut self, text: &str) {
        self.buffer = GapBuffer::from_str(text);
        self.selection = Selection::default();
        self.history.clear();
        tracing::trace!(chars = self.len(), "buffer loaded");
    }

    fn select_all(&mut self) {
        self.selection = Selection::new(0, self.len());
    }

    fn cut(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        let range = self.selection.range();
        let removed = self.delete_range(range);
        self.clipboard.write_text(&removed);
        true
    }

    fn copy(&mut self) -> bool {
        match self.selected_text() {
            Some(text) => {
                self.clipboard.write_text(&text);
                true
            }
            None => false,
        }
    }

    fn paste(&mut self) -> bool {
        match self.clipboard.read_text() {
            Some(text) => {
                self.insert_str(&text);
                true
            }
            None => false,
        }
    }

    fn undo(&mut self) -> bool {
        let Some(step) = self.history.undo() else {
            return false;
        };
        tracing::trace!(edits = step.edits.len(), "undo");
        for edit in step.edits.iter().rev() {
            self.replay(&edit.inverse());
        }
        true
    }

    fn redo(&mut self) -> bool {
        let Some(step) = self.history.redo() else {
            return false;
        };
        tracing::trace!(edits = step.edits.len(), "redo");
        for edit in &step.edits {
            self.replay(edit);
        }
        true
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBuffer")
            .field("buffer", &self.buffer)
            .field("selection", &self.selection)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}
