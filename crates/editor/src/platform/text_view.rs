// Chunk: docs/chunks/appkit_shell - NSTextView-backed text area
//!
//! [`EditableText`] over an `NSTextView`.
//!
//! `NSTextView` stores UTF-16; the capability trait speaks char offsets. Every
//! programmatic edit goes through `shouldChangeTextInRange:replacementString:`
//! and `didChangeText` so the view's undo manager records it like typing.

use std::ops::Range;

use editx_buffer::EditableText;
use objc2::rc::Retained;
use objc2_app_kit::NSTextView;
use objc2_foundation::{NSRange, NSString};

use super::pasteboard::{self, GeneralPasteboard};

pub struct TextViewArea {
    view: Retained<NSTextView>,
}

/// UTF-16 offset of char `offset` in `text` (clamped to the end).
fn utf16_offset(text: &str, offset: usize) -> usize {
    text.chars().take(offset).map(char::len_utf16).sum()
}

/// UTF-16 range covering chars `range` of `text`.
fn utf16_range(text: &str, range: &Range<usize>) -> NSRange {
    let start = utf16_offset(text, range.start);
    let end = utf16_offset(text, range.end);
    NSRange::new(start, end.saturating_sub(start))
}

impl TextViewArea {
    pub fn new(view: Retained<NSTextView>) -> Self {
        Self { view }
    }

    fn has_selection(&self) -> bool {
        self.view.selectedRange().length > 0
    }

    /// Replaces `range` (UTF-16) with `text` as one undoable user edit.
    fn replace(&self, range: NSRange, text: &str) {
        let replacement = NSString::from_str(text);
        if !self
            .view
            .shouldChangeTextInRange_replacementString(range, Some(&replacement))
        {
            tracing::debug!(?range, "text view refused edit");
            return;
        }
        self.view.replaceCharactersInRange_withString(range, &replacement);
        self.view.didChangeText();
    }
}

impl EditableText for TextViewArea {
    fn insert_at(&mut self, offset: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let current = self.read_all();
        let at = utf16_offset(&current, offset);
        self.replace(NSRange::new(at, 0), text);
        let caret = at + text.encode_utf16().count();
        self.view.setSelectedRange(NSRange::new(caret, 0));
    }

    fn delete_range(&mut self, range: Range<usize>) -> String {
        let current = self.read_all();
        let len = current.chars().count();
        let end = range.end.min(len);
        let start = range.start.min(end);
        if start == end {
            return String::new();
        }
        let removed: String = current.chars().skip(start).take(end - start).collect();
        self.replace(utf16_range(&current, &(start..end)), "");
        removed
    }

    fn read_all(&self) -> String {
        self.view.string().to_string()
    }

    fn len_chars(&self) -> usize {
        self.read_all().chars().count()
    }

    fn load(&mut self, text: &str) {
        self.view.setString(&NSString::from_str(text));
        self.view.setSelectedRange(NSRange::new(0, 0));
        if let Some(undo_manager) = self.view.undoManager() {
            undo_manager.removeAllActions();
        }
    }

    fn select_all(&mut self) {
        // SAFETY: NSText accepts a nil sender.
        unsafe { self.view.selectAll(None) };
    }

    fn cut(&mut self) -> bool {
        if !self.has_selection() {
            return false;
        }
        // SAFETY: NSText accepts a nil sender.
        unsafe { self.view.cut(None) };
        true
    }

    fn copy(&mut self) -> bool {
        if !self.has_selection() {
            return false;
        }
        // SAFETY: NSText accepts a nil sender.
        unsafe { self.view.copy(None) };
        true
    }

    fn paste(&mut self) -> bool {
        if !pasteboard::has_text(&GeneralPasteboard) {
            return false;
        }
        // SAFETY: NSText accepts a nil sender.
        unsafe { self.view.paste(None) };
        true
    }

    fn undo(&mut self) -> bool {
        match self.view.undoManager() {
            Some(undo_manager) if undo_manager.canUndo() => {
                undo_manager.undo();
                true
            }
            _ => false,
        }
    }

    fn redo(&mut self) -> bool {
        match self.view.undoManager() {
            Some(undo_manager) if undo_manager.canRedo() => {
                undo_manager.redo();
                true
            }
            _ => false,
        }
    }
}
