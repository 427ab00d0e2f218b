use std::time::Duration;

use crate::config::PromptSettings;
use crate::metadata::StubMetadata;
use crate::stub::DiscItem;

use super::model::{PromptConfig, PromptState};

/// The host surface the prompt runs on.
///
/// `is_ready` stands in for resolving the shared dialog window from the
/// host's registry; `present` shows it modally and blocks until the user
/// (or the auto-close timer) decides.
pub trait PromptHost {
    fn is_ready(&self) -> bool;
    fn present(&mut self, config: PromptConfig) -> PromptState;
}

/// Ask whether to play or eject the disc `item` stands in for.
///
/// Returns `true` only when the user confirmed Play with a disc in the
/// drive. Everything else is `false`: an item that is not a disc stub (no
/// UI is shown at all), a host that is not ready, a dismissal, a timeout.
/// The call never errors; a broken sidecar degrades to showing the item's
/// label with no message.
pub fn ask_play_or_eject(
    host: &mut dyn PromptHost,
    item: &DiscItem,
    settings: &PromptSettings,
    auto_close: Option<Duration>,
) -> bool {
    // Make sure we are actually dealing with a disc stub.
    if !item.is_disc_stub() {
        return false;
    }
    if !host.is_ready() {
        return false;
    }

    let metadata = StubMetadata::load(&item.path);
    let title = metadata.display_title(&item.label).to_string();

    let auto_close = auto_close.or_else(|| {
        (settings.auto_close_ms > 0).then(|| Duration::from_millis(settings.auto_close_ms))
    });

    let config = PromptConfig {
        heading: settings.heading.clone(),
        lines: [settings.instruction.clone(), title, metadata.message],
        play_label: settings.play_label.clone(),
        eject_label: settings.eject_label.clone(),
        auto_close,
    };

    host.present(config) == PromptState::Confirmed
}
