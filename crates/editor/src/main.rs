// Chunk: docs/chunks/appkit_shell - NSTextView window, menu bar, native dialogs
//!
//! EditX: a minimal plain-text editor for macOS.
//!
//! The binary installs logging and hands control to the AppKit run loop. On
//! any other platform it exits with an error.

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = editx::logging::init() {
        eprintln!("editx: failed to initialise logging: {err}");
    }

    run()
}

#[cfg(target_os = "macos")]
fn run() -> ExitCode {
    match editx::platform::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "failed to start");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_os = "macos"))]
fn run() -> ExitCode {
    tracing::error!(os = std::env::consts::OS, "EditX only runs on macOS");
    ExitCode::FAILURE
}
