// Chunk: docs/chunks/editor_config - In-code editor defaults

//! Editor configuration.
//!
//! All values are compiled-in defaults; nothing is read from or written to
//! disk. Callers (mainly tests) override individual values with the `with_*`
//! builders.

use crate::dialogs::{FileFilter, OpenRequest, SaveRequest};

/// Application name shown in the window title and the About box.
pub const APP_NAME: &str = "EditX";

/// Display name of a document that has never been saved.
pub const UNTITLED_NAME: &str = "Untitled.txt";

/// Editor-wide settings consumed by the controller and the shell.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub app_name: String,
    pub untitled_name: String,
    /// Extra lines shown under the version in the About box.
    pub about_text: String,
    /// Initial content size of the main window, in points.
    pub window_size: (f64, f64),
    /// Smallest size the window may be resized to, in points.
    pub min_window_size: (f64, f64),
    pub font_size: f64,
    pub open_request: OpenRequest,
    pub save_request: SaveRequest,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let filters = vec![
            FileFilter::new("Text Documents", "*.txt"),
            FileFilter::new("All Files", "*.*"),
        ];

        Self {
            app_name: APP_NAME.to_string(),
            untitled_name: UNTITLED_NAME.to_string(),
            about_text: "A minimal plain-text editor.".to_string(),
            window_size: (800.0, 600.0),
            min_window_size: (400.0, 300.0),
            font_size: 14.0,
            open_request: OpenRequest {
                title: "Select a File".to_string(),
                initial_dir: ".".into(),
                filters: filters.clone(),
            },
            save_request: SaveRequest {
                title: "Save File".to_string(),
                initial_dir: ".".into(),
                initial_name: "*.txt".to_string(),
                default_extension: Some(".*".to_string()),
                filters,
            },
        }
    }
}

impl EditorConfig {
    pub fn with_untitled_name(mut self, name: impl Into<String>) -> Self {
        self.untitled_name = name.into();
        self
    }

    pub fn with_about_text(mut self, text: impl Into<String>) -> Self {
        self.about_text = text.into();
        self
    }

    pub fn with_default_extension(mut self, extension: Option<&str>) -> Self {
        self.save_request.default_extension = extension.map(str::to_string);
        self
    }

    /// Body of the About box: version line, blank line, about text.
    pub fn about_message(&self) -> String {
        format!(
            "Version : {}\n\n{}",
            env!("CARGO_PKG_VERSION"),
            self.about_text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dialog_requests() {
        let config = EditorConfig::default();
        assert_eq!(config.untitled_name, "Untitled.txt");
        assert_eq!(config.open_request.filters[0].pattern, "*.txt");
        assert_eq!(config.open_request.filters[1].pattern, "*.*");
        assert_eq!(config.save_request.initial_name, "*.txt");
        assert_eq!(config.save_request.default_extension.as_deref(), Some(".*"));
    }

    #[test]
    fn test_about_message_has_version_line() {
        let config = EditorConfig::default().with_about_text("hello");
        let message = config.about_message();
        assert!(message.starts_with("Version : "));
        assert!(message.ends_with("\n\nhello"));
    }

    #[test]
    fn test_builders_override() {
        let config = EditorConfig::default()
            .with_untitled_name("New.txt")
            .with_default_extension(Some(".md"));
        assert_eq!(config.untitled_name, "New.txt");
        assert_eq!(config.save_request.default_extension.as_deref(), Some(".md"));
    }
}
