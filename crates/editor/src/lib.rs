// Chunk: docs/chunks/document_controller - Document state controller + dialog ports
//!
//! EditX library interface.
//!
//! Everything that decides what happens to the document lives here and is
//! free of platform code: the [`controller::EditorContext`], the menu
//! [`commands`], the [`dialogs`] port and file-type classification. The
//! AppKit shell in [`platform`] (macOS only) only wires native widgets to
//! these types.

pub mod commands;
pub mod config;
pub mod controller;
pub mod dialogs;
pub mod document;
pub mod error;
pub mod logging;
pub mod media_type;
pub mod menu;

#[cfg(target_os = "macos")]
pub mod platform;

pub use commands::{CommandOutcome, MenuCommand};
pub use config::EditorConfig;
pub use controller::{EditorContext, OpenOutcome, SaveOutcome};
pub use dialogs::{ConfirmChoice, Dialogs, FileFilter, OpenRequest, SaveRequest};
pub use document::{Document, DocumentPath, DocumentState};
pub use error::DocumentError;
pub use media_type::MediaType;

#[cfg(any(test, feature = "test-support"))]
pub use dialogs::{Prompt, ScriptedDialogs};
