// Chunk: docs/chunks/media_type - Extension-based file type guessing

//! File type classification.
//!
//! Maps a file extension to a MIME-style media type. Only types whose
//! top-level type is `text` may be opened in the editor.

use std::fmt;
use std::path::Path;

/// Extension (lowercase, without leading dot) to media type.
const EXTENSION_TABLE: &[(&str, &str)] = &[
    // text
    ("txt", "text/plain"),
    ("text", "text/plain"),
    ("log", "text/plain"),
    ("conf", "text/plain"),
    ("ini", "text/plain"),
    ("cfg", "text/plain"),
    ("md", "text/markdown"),
    ("markdown", "text/markdown"),
    ("csv", "text/csv"),
    ("tsv", "text/tab-separated-values"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("xml", "text/xml"),
    ("js", "text/javascript"),
    ("mjs", "text/javascript"),
    ("py", "text/x-python"),
    ("c", "text/x-c"),
    ("h", "text/x-c"),
    ("cpp", "text/x-c++"),
    ("hpp", "text/x-c++"),
    ("java", "text/x-java"),
    ("rs", "text/x-rust"),
    ("sh", "text/x-sh"),
    ("rtf", "text/rtf"),
    ("ics", "text/calendar"),
    ("vcf", "text/vcard"),
    // images
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("ico", "image/vnd.microsoft.icon"),
    ("svg", "image/svg+xml"),
    ("webp", "image/webp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    // audio / video
    ("mp3", "audio/mpeg"),
    ("wav", "audio/x-wav"),
    ("mp4", "video/mp4"),
    ("mov", "video/quicktime"),
    // application
    ("json", "application/json"),
    ("pdf", "application/pdf"),
    ("zip", "application/zip"),
    ("gz", "application/gzip"),
    ("tar", "application/x-tar"),
    ("doc", "application/msword"),
    ("xls", "application/vnd.ms-excel"),
    ("exe", "application/octet-stream"),
    ("bin", "application/octet-stream"),
    ("wasm", "application/wasm"),
    ("toml", "application/toml"),
    ("yaml", "application/yaml"),
    ("yml", "application/yaml"),
];

/// A media type such as `text/plain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaType(&'static str);

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// The part before the `/`, e.g. `text`.
    pub fn top_level(&self) -> &'static str {
        self.0.split('/').next().unwrap_or(self.0)
    }

    pub fn is_text(&self) -> bool {
        self.top_level() == "text"
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Guesses the media type of `path` from its extension.
///
/// Returns `None` for unknown or missing extensions.
pub fn classify(path: &Path) -> Option<MediaType> {
    let ext = path.extension()?.to_str()?;
    let ext = ext.strip_prefix('.').unwrap_or(ext).to_ascii_lowercase();
    EXTENSION_TABLE
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, media_type)| MediaType(media_type))
}

/// True when `path` classifies as a `text/*` type.
pub fn is_text_file(path: &Path) -> bool {
    classify(path).is_some_and(|media_type| media_type.is_text())
}
