// Chunk: docs/chunks/dialog_ports - Modal dialogs as typed request/response calls

//! Modal dialog ports.
//!
//! Every modal dialog the editor shows is a synchronous call on [`Dialogs`]
//! returning a typed answer. The AppKit shell implements the trait with
//! native alerts and panels; [`ScriptedDialogs`] answers from a queue so the
//! document controller can be exercised without a UI.

use std::path::{Path, PathBuf};

/// Title of the unsaved-changes confirmation.
pub const UNSAVED_TITLE: &str = "Unsaved Changes";
/// Question asked by the unsaved-changes confirmation.
pub const UNSAVED_MESSAGE: &str = "Do you want to save these changes?";

/// Answer to the unsaved-changes confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    /// Save first, then continue with the pending action.
    Save,
    /// Continue without saving.
    Discard,
    /// Abandon the pending action (also: dialog dismissed).
    Cancel,
}

/// A named file-name pattern offered by a file picker, e.g. `Text Documents (*.txt)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub label: String,
    pub pattern: String,
}

impl FileFilter {
    pub fn new(label: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pattern: pattern.into(),
        }
    }

    /// The extension this filter restricts to, or `None` for wildcards.
    pub fn extension(&self) -> Option<&str> {
        self.pattern
            .strip_prefix("*.")
            .filter(|ext| !ext.is_empty() && *ext != "*")
    }
}

/// The extension a picker restricts to while `filters[selected]` is chosen.
///
/// `None` accepts every file type: a wildcard filter, or no filter at that
/// index.
pub fn allowed_extension(filters: &[FileFilter], selected: usize) -> Option<&str> {
    filters.get(selected).and_then(FileFilter::extension)
}

/// Parameters for the open-file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    pub title: String,
    pub initial_dir: PathBuf,
    /// The first filter is selected initially.
    pub filters: Vec<FileFilter>,
}

/// Parameters for the save-file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub title: String,
    pub initial_dir: PathBuf,
    pub initial_name: String,
    /// Appended to a chosen name that has no extension. `.*` means "keep
    /// whatever the user typed".
    pub default_extension: Option<String>,
    pub filters: Vec<FileFilter>,
}

impl SaveRequest {
    /// Applies the default extension to a path returned by the picker.
    pub fn resolve(&self, chosen: PathBuf) -> PathBuf {
        let Some(ext) = self.default_extension.as_deref() else {
            return chosen;
        };
        let ext = ext.trim_start_matches('.');
        if ext.is_empty() || ext == "*" || chosen.extension().is_some() {
            return chosen;
        }
        chosen.with_extension(ext)
    }
}

/// Modal dialogs the document controller needs.
///
/// Every call blocks until the user answers.
pub trait Dialogs {
    /// Asks whether to save `document_name` before a destructive action.
    fn confirm_unsaved(&mut self, document_name: &str) -> ConfirmChoice;

    /// Asks for a file to open. `None` when the picker was cancelled.
    fn pick_open_path(&mut self, request: &OpenRequest) -> Option<PathBuf>;

    /// Asks for a file to save to. `None` when the picker was cancelled.
    fn pick_save_path(&mut self, request: &SaveRequest) -> Option<PathBuf>;

    fn show_info(&mut self, title: &str, message: &str);

    fn show_error(&mut self, title: &str, message: &str);
}

/// Base name of `path` for display, falling back to the whole path.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ── scripted dialogs (test support) ─────────────────────────────────────────

#[cfg(any(test, feature = "test-support"))]
pub use scripted::{Prompt, ScriptedDialogs};

#[cfg(any(test, feature = "test-support"))]
mod scripted {
    use std::collections::VecDeque;
    use std::path::PathBuf;

    use super::{ConfirmChoice, Dialogs, OpenRequest, SaveRequest};

    /// A dialog that was shown, in order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Prompt {
        ConfirmUnsaved { document_name: String },
        PickOpen { title: String },
        PickSave { title: String },
        Info { title: String, message: String },
        Error { title: String, message: String },
    }

    /// [`Dialogs`] implementation answering from queued responses.
    ///
    /// An empty queue answers like a dismissed dialog: `Cancel` for
    /// confirmations, `None` for pickers.
    #[derive(Debug, Default)]
    pub struct ScriptedDialogs {
        confirms: VecDeque<ConfirmChoice>,
        open_paths: VecDeque<Option<PathBuf>>,
        save_paths: VecDeque<Option<PathBuf>>,
        shown: Vec<Prompt>,
    }

    impl ScriptedDialogs {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queues the answer to the next unsaved-changes confirmation.
        pub fn answer_confirm(&mut self, choice: ConfirmChoice) -> &mut Self {
            self.confirms.push_back(choice);
            self
        }

        /// Queues the result of the next open picker.
        pub fn answer_open(&mut self, path: Option<PathBuf>) -> &mut Self {
            self.open_paths.push_back(path);
            self
        }

        /// Queues the result of the next save picker.
        pub fn answer_save(&mut self, path: Option<PathBuf>) -> &mut Self {
            self.save_paths.push_back(path);
            self
        }

        /// Every dialog shown so far.
        pub fn shown(&self) -> &[Prompt] {
            &self.shown
        }

        /// Drains the record of shown dialogs.
        pub fn take_shown(&mut self) -> Vec<Prompt> {
            std::mem::take(&mut self.shown)
        }

        pub fn confirm_count(&self) -> usize {
            self.shown
                .iter()
                .filter(|p| matches!(p, Prompt::ConfirmUnsaved { .. }))
                .count()
        }

        pub fn errors(&self) -> Vec<&Prompt> {
            self.shown
                .iter()
                .filter(|p| matches!(p, Prompt::Error { .. }))
                .collect()
        }

        pub fn infos(&self) -> Vec<&Prompt> {
            self.shown
                .iter()
                .filter(|p| matches!(p, Prompt::Info { .. }))
                .collect()
        }
    }

    impl Dialogs for ScriptedDialogs {
        fn confirm_unsaved(&mut self, document_name: &str) -> ConfirmChoice {
            self.shown.push(Prompt::ConfirmUnsaved {
                document_name: document_name.to_string(),
            });
            self.confirms.pop_front().unwrap_or(ConfirmChoice::Cancel)
        }

        fn pick_open_path(&mut self, request: &OpenRequest) -> Option<PathBuf> {
            self.shown.push(Prompt::PickOpen {
                title: request.title.clone(),
            });
            self.open_paths.pop_front().flatten()
        }

        fn pick_save_path(&mut self, request: &SaveRequest) -> Option<PathBuf> {
            self.shown.push(Prompt::PickSave {
                title: request.title.clone(),
            });
            self.save_paths.pop_front().flatten()
        }

        fn show_info(&mut self, title: &str, message: &str) {
            self.shown.push(Prompt::Info {
                title: title.to_string(),
                message: message.to_string(),
            });
        }

        fn show_error(&mut self, title: &str, message: &str) {
            self.shown.push(Prompt::Error {
                title: title.to_string(),
                message: message.to_string(),
            });
        }
    }
}
