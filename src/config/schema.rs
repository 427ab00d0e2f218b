use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/discprompt/config.toml` or
/// `~/.config/discprompt/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `DISCPROMPT__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub prompt: PromptSettings,
    pub ui: UiSettings,
    pub stubs: StubSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: PromptSettings::default(),
            ui: UiSettings::default(),
            stubs: StubSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PromptSettings {
    /// Dialog heading.
    pub heading: String,
    /// Fixed instruction shown as the first content line.
    pub instruction: String,
    /// Caption of the confirm button.
    pub play_label: String,
    /// Caption of the tray-toggle button.
    pub eject_label: String,
    /// Default auto-close in milliseconds, used when the caller supplies no
    /// duration. 0 waits indefinitely.
    pub auto_close_ms: u64,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            heading: "Disc".to_string(),
            instruction: "Insert the disc and press Play, or eject the tray".to_string(),
            play_label: "Play".to_string(),
            eject_label: "Eject".to_string(),
            auto_close_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Refresh tick interval in milliseconds. Disc presence is re-checked
    /// on every tick.
    pub tick_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { tick_ms: 50 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StubSettings {
    /// File extensions to treat as disc stubs (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for StubSettings {
    fn default() -> Self {
        Self {
            extensions: vec!["disc".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}
