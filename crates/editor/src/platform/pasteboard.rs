// Chunk: docs/chunks/appkit_shell - General pasteboard access
//!
//! [`Clipboard`] over the macOS general pasteboard.
//!
//! `NSTextView` performs the actual cut/copy/paste; this wrapper only lets the
//! shell ask whether there is text to paste.

use editx_buffer::Clipboard;
use objc2_app_kit::{NSPasteboard, NSPasteboardTypeString};
use objc2_foundation::NSString;

pub struct GeneralPasteboard;

impl Clipboard for GeneralPasteboard {
    fn write_text(&mut self, text: &str) {
        unsafe {
            let pasteboard = NSPasteboard::generalPasteboard();
            pasteboard.clearContents();
            pasteboard.setString_forType(&NSString::from_str(text), NSPasteboardTypeString);
        }
    }

    fn read_text(&self) -> Option<String> {
        unsafe {
            let pasteboard = NSPasteboard::generalPasteboard();
            let text = pasteboard.stringForType(NSPasteboardTypeString)?;
            Some(text.to_string())
        }
    }
}

/// True when `clipboard` holds non-empty text.
pub fn has_text(clipboard: &dyn Clipboard) -> bool {
    clipboard.read_text().is_some_and(|text| !text.is_empty())
}
