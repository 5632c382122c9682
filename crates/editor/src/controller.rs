// Chunk: docs/chunks/document_controller - New/Open/Save/Save As and the unsaved-changes guard

//! Document state controller.
//!
//! [`EditorContext`] bundles everything a command needs: the document, the
//! text buffer, the dialog port and the configuration. It is a humble object:
//! it never touches AppKit directly, so every file operation can be driven
//! from tests with a [`TextBuffer`](editx_buffer::TextBuffer) and
//! [`ScriptedDialogs`](crate::dialogs::ScriptedDialogs).
//!
//! Every operation that could discard edits first runs
//! [`EditorContext::check_unsaved_changes`].

use std::fs;
use std::path::PathBuf;

use editx_buffer::EditableText;

use crate::config::EditorConfig;
use crate::dialogs::{base_name, ConfirmChoice, Dialogs};
use crate::document::{Document, DocumentState};
use crate::error::DocumentError;
use crate::media_type;

/// Title of the error shown when a non-text file is chosen in Open.
pub const UNEXPECTED_TYPE_TITLE: &str = "Unexpected File Type";
/// Body of the error shown when a non-text file is chosen in Open.
pub const UNEXPECTED_TYPE_MESSAGE: &str =
    "EditX can only open text files.\n\nChoose a different app to open this file.";
/// Title of the confirmation shown after a successful save.
pub const SAVED_TITLE: &str = "Saved";

/// Result of File > Open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The unsaved-changes check was cancelled, or saving first failed.
    Aborted,
    /// The picker was dismissed.
    Cancelled,
    /// The chosen file is not a text file.
    Rejected(PathBuf),
    Opened(PathBuf),
}

/// Result of File > Save and File > Save As.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// Picker dismissed or Save As write failed; the document is untitled.
    Unsaved,
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved(_))
    }
}

/// The editor's state, passed explicitly to every command handler.
pub struct EditorContext<B, D> {
    document: Document,
    buffer: B,
    dialogs: D,
    config: EditorConfig,
    /// Set once the user agreed to quit.
    pub(crate) quit_confirmed: bool,
}

impl<B: EditableText, D: Dialogs> EditorContext<B, D> {
    /// A fresh untitled document over `buffer`.
    ///
    /// Whatever the buffer already holds counts as unsaved.
    pub fn new(buffer: B, dialogs: D, config: EditorConfig) -> Self {
        Self {
            document: Document::new(config.untitled_name.clone()),
            buffer,
            dialogs,
            config,
            quit_confirmed: false,
        }
    }

    // ==================== Accessors ====================

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut B {
        &mut self.buffer
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn dialogs_mut(&mut self) -> &mut D {
        &mut self.dialogs
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_dirty(&self) -> bool {
        self.document.is_dirty(&self.buffer.read_all())
    }

    pub fn state(&self) -> DocumentState {
        self.document.state(&self.buffer.read_all())
    }

    /// Text of the status bar: the document's display name.
    pub fn status_text(&self) -> String {
        self.document.display_name()
    }

    pub fn window_title(&self) -> String {
        format!("{} - {}", self.document.display_name(), self.config.app_name)
    }

    // ==================== File operations ====================

    /// Returns whether it is safe to discard the buffer.
    ///
    /// A clean document is always safe. A dirty one asks the user; choosing
    /// Save is only safe if the save actually completes.
    pub fn check_unsaved_changes(&mut self) -> Result<bool, DocumentError> {
        if !self.is_dirty() {
            return Ok(true);
        }

        let name = self.document.display_name();
        match self.dialogs.confirm_unsaved(&name) {
            ConfirmChoice::Save => {
                let outcome = self.save_document()?;
                Ok(outcome.is_saved())
            }
            ConfirmChoice::Discard => {
                tracing::debug!(document = %name, "discarding unsaved changes");
                Ok(true)
            }
            ConfirmChoice::Cancel => Ok(false),
        }
    }

    /// File > New. Returns whether the document was reset.
    pub fn new_document(&mut self) -> Result<bool, DocumentError> {
        if !self.check_unsaved_changes()? {
            return Ok(false);
        }

        self.buffer.load("");
        self.document.reset_untitled();
        tracing::info!("new untitled document");
        Ok(true)
    }

    /// File > Open.
    pub fn open_document(&mut self) -> Result<OpenOutcome, DocumentError> {
        if !self.check_unsaved_changes()? {
            return Ok(OpenOutcome::Aborted);
        }

        let Some(path) = self.dialogs.pick_open_path(&self.config.open_request) else {
            self.document.detach_path();
            return Ok(OpenOutcome::Cancelled);
        };

        if !media_type::is_text_file(&path) {
            tracing::warn!(
                path = %path.display(),
                media_type = ?media_type::classify(&path).map(|m| m.as_str()),
                "refusing to open non-text file"
            );
            self.dialogs
                .show_error(UNEXPECTED_TYPE_TITLE, UNEXPECTED_TYPE_MESSAGE);
            return Ok(OpenOutcome::Rejected(path));
        }

        let content = fs::read_to_string(&path).map_err(|source| DocumentError::Read {
            path: path.clone(),
            source,
        })?;

        self.buffer.load(&content);
        tracing::info!(path = %path.display(), chars = self.buffer.len_chars(), "opened file");
        self.document.mark_saved(content, path.clone());
        Ok(OpenOutcome::Opened(path))
    }

    /// File > Save. Untitled documents go through Save As.
    pub fn save_document(&mut self) -> Result<SaveOutcome, DocumentError> {
        let Some(path) = self.document.path().as_path().map(|p| p.to_path_buf()) else {
            return self.save_as_document();
        };

        let content = self.buffer.read_all();
        fs::write(&path, content.as_bytes()).map_err(|source| DocumentError::Write {
            path: path.clone(),
            source,
        })?;

        self.finish_save(content, path.clone());
        Ok(SaveOutcome::Saved(path))
    }

    /// File > Save As.
    ///
    /// Failures leave the document untitled rather than returning an error:
    /// the user picked the path, so the problem is reported in a dialog.
    pub fn save_as_document(&mut self) -> Result<SaveOutcome, DocumentError> {
        let request = &self.config.save_request;
        let Some(chosen) = self.dialogs.pick_save_path(request) else {
            self.document.detach_path();
            return Ok(SaveOutcome::Unsaved);
        };
        let path = request.resolve(chosen);

        let content = self.buffer.read_all();
        if let Err(source) = fs::write(&path, content.as_bytes()) {
            let err = DocumentError::Write {
                path: path.clone(),
                source,
            };
            tracing::warn!(error = %err, "save as failed");
            self.document.detach_path();
            self.dialogs.show_error("Save Failed", &err.to_string());
            return Ok(SaveOutcome::Unsaved);
        }

        self.finish_save(content, path.clone());
        Ok(SaveOutcome::Saved(path))
    }

    fn finish_save(&mut self, content: String, path: PathBuf) {
        let name = base_name(&path);
        tracing::info!(path = %path.display(), bytes = content.len(), "saved file");
        self.document.mark_saved(content, path);
        self.dialogs
            .show_info(SAVED_TITLE, &format!("{name} has successfully saved"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::{Prompt, ScriptedDialogs};
    use editx_buffer::TextBuffer;
    use tempfile::TempDir;

    fn context() -> EditorContext<TextBuffer, ScriptedDialogs> {
        EditorContext::new(TextBuffer::new(), ScriptedDialogs::new(), EditorConfig::default())
    }

    #[test]
    fn test_clean_document_needs_no_prompt() {
        let mut ctx = context();
        assert!(ctx.check_unsaved_changes().unwrap());
        assert_eq!(ctx.dialogs().confirm_count(), 0);
    }

    #[test]
    fn test_dirty_document_cancel_is_unsafe() {
        let mut ctx = context();
        ctx.buffer_mut().insert_at(0, "draft");
        ctx.dialogs_mut().answer_confirm(ConfirmChoice::Cancel);
        assert!(!ctx.check_unsaved_changes().unwrap());
        assert_eq!(
            ctx.dialogs().shown(),
            &[Prompt::ConfirmUnsaved {
                document_name: "Untitled.txt".into()
            }]
        );
    }

    #[test]
    fn test_dirty_document_discard_is_safe() {
        let mut ctx = context();
        ctx.buffer_mut().insert_at(0, "draft");
        ctx.dialogs_mut().answer_confirm(ConfirmChoice::Discard);
        assert!(ctx.check_unsaved_changes().unwrap());
    }

    #[test]
    fn test_save_choice_with_cancelled_picker_is_unsafe() {
        let mut ctx = context();
        ctx.buffer_mut().insert_at(0, "draft");
        ctx.dialogs_mut()
            .answer_confirm(ConfirmChoice::Save)
            .answer_save(None);
        assert!(!ctx.check_unsaved_changes().unwrap());
        assert!(ctx.document().path().is_untitled());
    }

    #[test]
    fn test_save_choice_that_saves_is_safe() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("draft.txt");
        let mut ctx = context();
        ctx.buffer_mut().insert_at(0, "draft");
        ctx.dialogs_mut()
            .answer_confirm(ConfirmChoice::Save)
            .answer_save(Some(target.clone()));
        assert!(ctx.check_unsaved_changes().unwrap());
        assert_eq!(fs::read_to_string(&target).unwrap(), "draft");
    }

    #[test]
    fn test_whitespace_edits_are_not_dirty() {
        let mut ctx = context();
        ctx.buffer_mut().insert_at(0, "\n  \n");
        assert!(!ctx.is_dirty());
        assert_eq!(ctx.state(), DocumentState::UntitledClean);
    }

    #[test]
    fn test_save_named_overwrites_exact_bytes() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a.txt");
        fs::write(&target, "old").unwrap();

        let mut ctx = context();
        ctx.dialogs_mut().answer_open(Some(target.clone()));
        ctx.open_document().unwrap();
        ctx.buffer_mut().select_all();
        ctx.buffer_mut().clear_all();
        ctx.buffer_mut().insert_at(0, "line one\nline two\n");

        assert_eq!(ctx.save_document().unwrap(), SaveOutcome::Saved(target.clone()));
        assert_eq!(fs::read_to_string(&target).unwrap(), "line one\nline two\n");
        assert_eq!(ctx.dialogs().confirm_count(), 0);
        assert!(ctx.dialogs().shown().contains(&Prompt::Info {
            title: "Saved".into(),
            message: "a.txt has successfully saved".into(),
        }));
    }

    #[test]
    fn test_save_as_write_failure_detaches_and_reports() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("missing").join("a.txt");
        let mut ctx = context();
        ctx.buffer_mut().insert_at(0, "text");
        ctx.dialogs_mut().answer_save(Some(target));

        assert_eq!(ctx.save_as_document().unwrap(), SaveOutcome::Unsaved);
        assert!(ctx.document().path().is_untitled());
        assert_eq!(ctx.dialogs().errors().len(), 1);
        assert!(ctx.is_dirty());
    }

    #[test]
    fn test_save_named_write_failure_is_an_error() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a.txt");
        fs::write(&target, "hello").unwrap();

        let mut ctx = context();
        ctx.dialogs_mut().answer_open(Some(target.clone()));
        ctx.open_document().unwrap();
        // A directory cannot be written as a file.
        fs::remove_file(&target).unwrap();
        fs::create_dir(&target).unwrap();

        let err = ctx.save_document().unwrap_err();
        assert!(matches!(err, DocumentError::Write { .. }));
        assert_eq!(err.path(), &target);
    }

    #[test]
    fn test_open_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("gone.txt");
        let mut ctx = context();
        ctx.dialogs_mut().answer_open(Some(target));

        let err = ctx.open_document().unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
        assert!(ctx.document().path().is_untitled());
    }

    #[test]
    fn test_open_cancelled_detaches_path_keeps_buffer() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a.txt");
        fs::write(&target, "hello").unwrap();

        let mut ctx = context();
        ctx.dialogs_mut().answer_open(Some(target)).answer_open(None);
        ctx.open_document().unwrap();

        assert_eq!(ctx.open_document().unwrap(), OpenOutcome::Cancelled);
        assert!(ctx.document().path().is_untitled());
        assert_eq!(ctx.buffer().read_all(), "hello");
        assert_eq!(ctx.status_text(), "Untitled.txt");
    }

    #[test]
    fn test_window_title() {
        let ctx = context();
        assert_eq!(ctx.window_title(), "Untitled.txt - EditX");
    }
}
