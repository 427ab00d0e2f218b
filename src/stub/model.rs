use std::path::{Path, PathBuf};

/// A media item that may stand in for absent physical media.
///
/// Immutable while a prompt runs; the caller keeps ownership.
#[derive(Clone, Debug)]
pub struct DiscItem {
    pub path: PathBuf,
    pub label: String,
    pub disc_stub: bool,
}

impl DiscItem {
    /// Build an item from `path`, deriving the label from the file stem and
    /// classifying it against the configured stub `extensions`.
    pub fn from_path(path: &Path, extensions: &[String]) -> Self {
        let label = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string();

        Self {
            disc_stub: is_stub_file(path, extensions),
            path: path.to_path_buf(),
            label,
        }
    }

    /// Whether this item is a disc stub (a placeholder for absent media).
    pub fn is_disc_stub(&self) -> bool {
        self.disc_stub
    }
}

/// Extension-based stub classification, case-insensitive.
pub fn is_stub_file(path: &Path, extensions: &[String]) -> bool {
    let exts: Vec<String> = extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}
