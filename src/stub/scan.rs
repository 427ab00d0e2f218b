use std::path::Path;

use walkdir::WalkDir;

use crate::config::StubSettings;

use super::model::{DiscItem, is_stub_file};

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Collect the disc stubs under `dir`, sorted case-insensitively by label.
pub fn scan(dir: &Path, settings: &StubSettings) -> Vec<DiscItem> {
    let mut items: Vec<DiscItem> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.is_file()
            && (settings.include_hidden || !is_hidden(path))
            && is_stub_file(path, &settings.extensions)
        {
            items.push(DiscItem::from_path(path, &settings.extensions));
        }
    }

    items.sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()));
    items
}
