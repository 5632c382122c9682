// Chunk: docs/chunks/menu_commands - Fixed command set and its dispatcher

//! Menu commands.
//!
//! [`MenuCommand`] is the complete set of actions reachable from the menu bar.
//! The platform shell maps a clicked item back to a command and calls
//! [`EditorContext::dispatch`]; it never inspects editor state itself.

use editx_buffer::EditableText;

use crate::controller::EditorContext;
use crate::dialogs::Dialogs;
use crate::error::DocumentError;

/// Every action reachable from the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    // File
    New,
    Open,
    Save,
    SaveAs,
    Exit,
    // Edit
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,
    ClearAll,
    // Help
    About,
}

impl MenuCommand {
    /// All commands in menu order. A command's position here is its tag.
    pub const ALL: [MenuCommand; 13] = [
        MenuCommand::New,
        MenuCommand::Open,
        MenuCommand::Save,
        MenuCommand::SaveAs,
        MenuCommand::Exit,
        MenuCommand::Undo,
        MenuCommand::Redo,
        MenuCommand::Cut,
        MenuCommand::Copy,
        MenuCommand::Paste,
        MenuCommand::SelectAll,
        MenuCommand::ClearAll,
        MenuCommand::About,
    ];

    /// Stable integer identifier, used as the native menu item tag.
    pub fn tag(self) -> isize {
        Self::ALL
            .iter()
            .position(|command| *command == self)
            .map_or(-1, |index| index as isize)
    }

    pub fn from_tag(tag: isize) -> Option<Self> {
        usize::try_from(tag)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

/// What the shell should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Quit,
}

impl<B: EditableText, D: Dialogs> EditorContext<B, D> {
    /// Runs one menu command to completion.
    pub fn dispatch(&mut self, command: MenuCommand) -> Result<CommandOutcome, DocumentError> {
        tracing::debug!(?command, "dispatch");

        match command {
            MenuCommand::New => {
                self.new_document()?;
            }
            MenuCommand::Open => {
                self.open_document()?;
            }
            MenuCommand::Save => {
                self.save_document()?;
            }
            MenuCommand::SaveAs => {
                self.save_as_document()?;
            }
            MenuCommand::Exit => return self.request_quit(),
            MenuCommand::Undo => {
                self.buffer_mut().undo();
            }
            MenuCommand::Redo => {
                self.buffer_mut().redo();
            }
            MenuCommand::Cut => {
                self.buffer_mut().cut();
            }
            MenuCommand::Copy => {
                self.buffer_mut().copy();
            }
            MenuCommand::Paste => {
                self.buffer_mut().paste();
            }
            MenuCommand::SelectAll => self.buffer_mut().select_all(),
            MenuCommand::ClearAll => self.buffer_mut().clear_all(),
            MenuCommand::About => self.show_about(),
        }

        Ok(CommandOutcome::Continue)
    }

    /// File > Exit and the window close button.
    pub fn request_quit(&mut self) -> Result<CommandOutcome, DocumentError> {
        if self.check_unsaved_changes()? {
            tracing::info!("quitting");
            self.quit_confirmed = true;
            Ok(CommandOutcome::Quit)
        } else {
            Ok(CommandOutcome::Continue)
        }
    }

    /// Application termination (Dock > Quit, logout).
    ///
    /// Skips the check when Exit or the close button already confirmed it.
    pub fn request_termination(&mut self) -> Result<CommandOutcome, DocumentError> {
        if self.quit_confirmed {
            return Ok(CommandOutcome::Quit);
        }
        self.request_quit()
    }

    fn show_about(&mut self) {
        let title = self.config().app_name.clone();
        let message = self.config().about_message();
        self.dialogs_mut().show_info(&title, &message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::dialogs::{ConfirmChoice, Prompt, ScriptedDialogs};
    use crate::document::DocumentState;
    use editx_buffer::TextBuffer;
    use std::fs;
    use tempfile::TempDir;

    fn context() -> EditorContext<TextBuffer, ScriptedDialogs> {
        EditorContext::new(TextBuffer::new(), ScriptedDialogs::new(), EditorConfig::default())
    }

    #[test]
    fn test_tags_round_trip() {
        for command in MenuCommand::ALL {
            assert_eq!(MenuCommand::from_tag(command.tag()), Some(command));
        }
        assert_eq!(MenuCommand::from_tag(-1), None);
        assert_eq!(MenuCommand::from_tag(13), None);
    }

    #[test]
    fn test_exit_clean_quits_without_prompt() {
        let mut ctx = context();
        assert_eq!(ctx.dispatch(MenuCommand::Exit).unwrap(), CommandOutcome::Quit);
        assert_eq!(ctx.dialogs().confirm_count(), 0);
    }

    #[test]
    fn test_exit_dirty_cancel_continues() {
        let mut ctx = context();
        ctx.buffer_mut().insert_at(0, "unsaved");
        ctx.dialogs_mut().answer_confirm(ConfirmChoice::Cancel);
        assert_eq!(
            ctx.dispatch(MenuCommand::Exit).unwrap(),
            CommandOutcome::Continue
        );
        assert_eq!(ctx.buffer().read_all(), "unsaved");
    }

    #[test]
    fn test_exit_dirty_discard_quits() {
        let mut ctx = context();
        ctx.buffer_mut().insert_at(0, "unsaved");
        ctx.dialogs_mut().answer_confirm(ConfirmChoice::Discard);
        assert_eq!(ctx.dispatch(MenuCommand::Exit).unwrap(), CommandOutcome::Quit);
    }

    #[test]
    fn test_about_shows_version() {
        let mut ctx = context();
        ctx.dispatch(MenuCommand::About).unwrap();
        match ctx.dialogs().shown() {
            [Prompt::Info { title, message }] => {
                assert_eq!(title, "EditX");
                assert!(message.starts_with("Version : "));
            }
            other => panic!("unexpected prompts: {other:?}"),
        }
    }

    #[test]
    fn test_clear_all_makes_document_dirty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "hello").unwrap();
        let mut ctx = context();
        ctx.dialogs_mut().answer_open(Some(path));
        ctx.dispatch(MenuCommand::Open).unwrap();
        assert_eq!(ctx.state(), DocumentState::NamedClean);

        ctx.dispatch(MenuCommand::ClearAll).unwrap();
        assert_eq!(ctx.buffer().read_all(), "");
        assert_eq!(ctx.state(), DocumentState::NamedDirty);
        assert_eq!(ctx.document().saved_content(), "hello");

        ctx.dispatch(MenuCommand::Undo).unwrap();
        assert_eq!(ctx.buffer().read_all(), "hello");
        assert_eq!(ctx.state(), DocumentState::NamedClean);
    }

    #[test]
    fn test_termination_after_confirmed_exit_does_not_ask_again() {
        let mut ctx = context();
        ctx.buffer_mut().insert_at(0, "unsaved");
        ctx.dialogs_mut().answer_confirm(ConfirmChoice::Discard);
        assert_eq!(ctx.dispatch(MenuCommand::Exit).unwrap(), CommandOutcome::Quit);

        assert_eq!(ctx.request_termination().unwrap(), CommandOutcome::Quit);
        assert_eq!(ctx.dialogs().confirm_count(), 1);
    }

    #[test]
    fn test_termination_of_dirty_document_runs_unsaved_check() {
        let mut ctx = context();
        ctx.buffer_mut().insert_at(0, "unsaved");
        ctx.dialogs_mut().answer_confirm(ConfirmChoice::Cancel);
        assert_eq!(
            ctx.request_termination().unwrap(),
            CommandOutcome::Continue
        );
        assert_eq!(ctx.dialogs().confirm_count(), 1);

        ctx.dialogs_mut().answer_confirm(ConfirmChoice::Discard);
        assert_eq!(ctx.request_termination().unwrap(), CommandOutcome::Quit);
    }

    #[test]
    fn test_edit_commands_forward_to_buffer() {
        let mut ctx = context();
        ctx.buffer_mut().insert_at(0, "abc");
        ctx.dispatch(MenuCommand::SelectAll).unwrap();
        ctx.dispatch(MenuCommand::Cut).unwrap();
        assert_eq!(ctx.buffer().read_all(), "");
        ctx.dispatch(MenuCommand::Paste).unwrap();
        ctx.dispatch(MenuCommand::Paste).unwrap();
        assert_eq!(ctx.buffer().read_all(), "abcabc");
        ctx.dispatch(MenuCommand::Undo).unwrap();
        assert_eq!(ctx.buffer().read_all(), "abc");
        ctx.dispatch(MenuCommand::Redo).unwrap();
        assert_eq!(ctx.buffer().read_all(), "abcabc");
        assert!(ctx.dialogs().shown().is_empty());
    }
}
