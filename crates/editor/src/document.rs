// Chunk: docs/chunks/document_model - File association and last-saved snapshot

//! The document being edited.
//!
//! A [`Document`] knows which file the buffer belongs to and what the buffer
//! looked like at the last successful load or save. The live text is owned by
//! the buffer; dirtiness is always derived by comparing the two.

use std::path::{Path, PathBuf};

use crate::config::UNTITLED_NAME;
use crate::dialogs::base_name;

/// Where the document lives on disk.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DocumentPath {
    /// Never saved, or reset by New / a cancelled picker.
    #[default]
    Untitled,
    Named(PathBuf),
}

impl DocumentPath {
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            DocumentPath::Untitled => None,
            DocumentPath::Named(path) => Some(path),
        }
    }

    pub fn is_untitled(&self) -> bool {
        matches!(self, DocumentPath::Untitled)
    }
}

/// The four states of the file lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
    UntitledClean,
    UntitledDirty,
    NamedClean,
    NamedDirty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: DocumentPath,
    saved_content: String,
    untitled_name: String,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(UNTITLED_NAME)
    }
}

impl Document {
    /// An untitled document with empty saved content.
    pub fn new(untitled_name: impl Into<String>) -> Self {
        Self {
            path: DocumentPath::Untitled,
            saved_content: String::new(),
            untitled_name: untitled_name.into(),
        }
    }

    pub fn path(&self) -> &DocumentPath {
        &self.path
    }

    pub fn saved_content(&self) -> &str {
        &self.saved_content
    }

    /// True when `current` differs from the saved snapshot, ignoring leading
    /// and trailing whitespace on both sides.
    pub fn is_dirty(&self, current: &str) -> bool {
        current.trim() != self.saved_content.trim()
    }

    /// Base name of the file, or the untitled name.
    pub fn display_name(&self) -> String {
        match &self.path {
            DocumentPath::Untitled => self.untitled_name.clone(),
            DocumentPath::Named(path) => base_name(path),
        }
    }

    pub fn state(&self, current: &str) -> DocumentState {
        match (self.path.is_untitled(), self.is_dirty(current)) {
            (true, false) => DocumentState::UntitledClean,
            (true, true) => DocumentState::UntitledDirty,
            (false, false) => DocumentState::NamedClean,
            (false, true) => DocumentState::NamedDirty,
        }
    }

    /// Records a successful load or save of `content` at `path`.
    pub fn mark_saved(&mut self, content: impl Into<String>, path: PathBuf) {
        self.saved_content = content.into();
        self.path = DocumentPath::Named(path);
    }

    /// Forgets the file and the saved snapshot (File > New).
    pub fn reset_untitled(&mut self) {
        self.path = DocumentPath::Untitled;
        self.saved_content.clear();
    }

    /// Drops the file association but keeps the saved snapshot.
    ///
    /// Used when a picker is cancelled or a Save As fails.
    pub fn detach_path(&mut self) {
        self.path = DocumentPath::Untitled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_untitled_and_clean() {
        let doc = Document::default();
        assert!(doc.path().is_untitled());
        assert_eq!(doc.display_name(), "Untitled.txt");
        assert!(!doc.is_dirty(""));
        assert_eq!(doc.state(""), DocumentState::UntitledClean);
    }

    #[test]
    fn test_dirty_ignores_surrounding_whitespace() {
        let mut doc = Document::default();
        doc.mark_saved("hello", "/tmp/a.txt".into());
        assert!(!doc.is_dirty("hello\n"));
        assert!(!doc.is_dirty("  hello  "));
        assert!(doc.is_dirty("hello world"));
        assert!(doc.is_dirty("hel lo"));
    }

    #[test]
    fn test_whitespace_only_untitled_is_clean() {
        let doc = Document::default();
        assert!(!doc.is_dirty("\n\n   \t"));
    }

    #[test]
    fn test_display_name_is_base_name() {
        let mut doc = Document::default();
        doc.mark_saved("", "/some/dir/notes.txt".into());
        assert_eq!(doc.display_name(), "notes.txt");
        assert_eq!(
            doc.path().as_path(),
            Some(Path::new("/some/dir/notes.txt"))
        );
    }

    #[test]
    fn test_state_machine() {
        let mut doc = Document::default();
        assert_eq!(doc.state("x"), DocumentState::UntitledDirty);
        doc.mark_saved("x", "/tmp/x.txt".into());
        assert_eq!(doc.state("x"), DocumentState::NamedClean);
        assert_eq!(doc.state("xy"), DocumentState::NamedDirty);
    }

    #[test]
    fn test_reset_untitled_clears_snapshot() {
        let mut doc = Document::new("Scratch");
        doc.mark_saved("text", "/tmp/t.txt".into());
        doc.reset_untitled();
        assert_eq!(doc.display_name(), "Scratch");
        assert_eq!(doc.saved_content(), "");
    }

    #[test]
    fn test_detach_path_keeps_snapshot() {
        let mut doc = Document::default();
        doc.mark_saved("text", "/tmp/t.txt".into());
        doc.detach_path();
        assert!(doc.path().is_untitled());
        assert_eq!(doc.saved_content(), "text");
        assert!(!doc.is_dirty("text"));
    }
}
