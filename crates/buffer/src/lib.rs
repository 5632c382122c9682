// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing

//! editx-buffer: the text buffer behind the EditX editor.
//!
//! This crate provides [`TextBuffer`], a gap buffer-backed text buffer with an
//! anchor/cursor selection, bounded undo/redo history and clipboard support,
//! and the [`EditableText`] capability trait through which the editor drives
//! any text area.
//!
//! # Example
//!
//! ```
//! use editx_buffer::{EditableText, TextBuffer};
//!
//! let mut buffer = TextBuffer::new();
//! buffer.insert_at(0, "Hello, world!");
//! buffer.delete_range(5..12);
//! assert_eq!(buffer.read_all(), "Hello!");
//!
//! buffer.undo();
//! assert_eq!(buffer.read_all(), "Hello, world!");
//! ```
//!
//! # Offsets
//!
//! Every offset in the public API is a char offset (Unicode scalar values),
//! never a byte offset.

mod editable;
mod gap_buffer;
mod history;
mod text_buffer;
mod types;

pub use editable::{Clipboard, EditableText, Register};
pub use history::MAX_UNDO_STEPS;
pub use text_buffer::TextBuffer;
pub use types::Selection;
