// Chunk: docs/chunks/document_errors - Read/write failures of document commands

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A file-system failure that ends the triggering command.
///
/// Cancelled dialogs and rejected file types are not errors; they are
/// reported through the command outcomes.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DocumentError {
    /// The file the failed command was working on.
    pub fn path(&self) -> &PathBuf {
        match self {
            DocumentError::Read { path, .. } | DocumentError::Write { path, .. } => path,
        }
    }
}
