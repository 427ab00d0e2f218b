use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};

use super::model::StubMetadata;

impl StubMetadata {
    /// Load metadata from the stub file at `path`.
    ///
    /// Failures never propagate: an unreadable file, malformed XML or a
    /// root element other than `<discstub>` log at error severity and yield
    /// empty metadata.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                log::error!("Error reading {}: {err}", path.display());
                return Self::default();
            }
        };

        let doc = match Document::parse(&text) {
            Ok(doc) => doc,
            Err(err) => {
                log::error!("Error parsing {}: {err}", path.display());
                return Self::default();
            }
        };

        let root = doc.root_element();
        if !root.tag_name().name().eq_ignore_ascii_case("discstub") {
            log::error!("Error loading {}, no <discstub> node", path.display());
            return Self::default();
        }

        Self {
            title: child_text(&root, "title"),
            message: child_text(&root, "message"),
        }
    }
}

/// Text of the first child element named `tag`, or an empty string.
/// The text is taken as-is; whitespace in the sidecar is the author's.
fn child_text(root: &Node<'_, '_>, tag: &str) -> String {
    root.children()
        .find(|n| n.is_element() && n.tag_name().name() == tag)
        .and_then(|n| n.text())
        .map(str::to_string)
        .unwrap_or_default()
}
