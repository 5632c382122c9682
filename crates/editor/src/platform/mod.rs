// Chunk: docs/chunks/appkit_shell - NSTextView window, menu bar, native dialogs
//!
//! AppKit shell.
//!
//! Thin wrappers only: the window, the text view, the status bar, the menu
//! bar and the native dialogs. Every decision is delegated to
//! [`EditorContext`](crate::controller::EditorContext).

mod app_delegate;
mod menu_bar;
mod native_dialogs;
mod pasteboard;
mod text_view;

pub use native_dialogs::NativeDialogs;
pub use text_view::TextViewArea;

use objc2::runtime::ProtocolObject;
use objc2_app_kit::{NSApplication, NSApplicationActivationPolicy, NSApplicationDelegate};
use objc2_foundation::MainThreadMarker;
use thiserror::Error;

use crate::config::EditorConfig;

use app_delegate::AppDelegate;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("EditX must be started on the main thread")]
    NotMainThread,
}

/// Runs the application until the user quits.
pub fn run() -> Result<(), LaunchError> {
    let mtm = MainThreadMarker::new().ok_or(LaunchError::NotMainThread)?;

    let app = NSApplication::sharedApplication(mtm);
    app.setActivationPolicy(NSApplicationActivationPolicy::Regular);

    let delegate = AppDelegate::new(mtm, EditorConfig::default());
    let delegate_obj: &ProtocolObject<dyn NSApplicationDelegate> =
        ProtocolObject::from_ref(&*delegate);
    app.setDelegate(Some(delegate_obj));

    tracing::info!("starting run loop");
    app.run();
    Ok(())
}
