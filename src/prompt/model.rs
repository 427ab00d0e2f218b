use std::time::Duration;

use crate::drive::DiscDrive;

/// Lifecycle of a shown prompt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PromptState {
    AwaitingInput,
    Confirmed,
    Cancelled,
}

impl Default for PromptState {
    fn default() -> Self {
        Self::AwaitingInput
    }
}

/// The two choices the dialog offers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PromptButton {
    Play,
    Eject,
}

/// Everything the dialog displays for one invocation, passed as a value so
/// nothing leaks between invocations of the shared instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PromptConfig {
    pub heading: String,
    /// Content lines by index: instruction, title, message.
    pub lines: [String; 3],
    pub play_label: String,
    pub eject_label: String,
    /// Force-dismiss after this long without a decision. `None` waits
    /// indefinitely; a zero duration is treated as `None`.
    pub auto_close: Option<Duration>,
}

/// The shared dialog instance a host embeds and feeds UI events.
///
/// The host owns exactly one of these per window class and runs every event
/// on its UI thread, so there is no locking here.
pub struct PromptDialog {
    config: PromptConfig,
    state: PromptState,
    play_enabled: bool,
    focus: PromptButton,
}

impl Default for PromptDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptDialog {
    pub fn new() -> Self {
        Self {
            config: PromptConfig::default(),
            state: PromptState::AwaitingInput,
            play_enabled: false,
            focus: PromptButton::Eject,
        }
    }

    /// Install the text for a new invocation and reset all dialog state.
    ///
    /// Re-entrant invocations reuse this instance, so every field is
    /// rewritten here rather than trusting the previous invocation's
    /// terminal state.
    pub fn configure(&mut self, mut config: PromptConfig) {
        if config.auto_close.is_some_and(|d| d.is_zero()) {
            config.auto_close = None;
        }
        self.config = config;
        self.state = PromptState::AwaitingInput;
        self.play_enabled = false;
        self.focus = PromptButton::Eject;
    }

    /// Dialog opened: pick the enabled default control.
    pub fn on_open(&mut self, drive: &dyn DiscDrive) {
        if drive.is_disc_present() {
            self.play_enabled = true;
            self.focus = PromptButton::Play;
        } else {
            self.play_enabled = false;
            self.focus = PromptButton::Eject;
        }
    }

    /// Periodic refresh: keep Play enablement in sync with the drive.
    /// Never touches the prompt state.
    pub fn on_tick(&mut self, drive: &dyn DiscDrive) {
        self.play_enabled = drive.is_disc_present();
    }

    /// Play activated. Presence is re-checked against the drive here rather
    /// than read from the enablement flag: the disc can disappear between
    /// the tick that enabled the button and the click reaching us. When that
    /// happens the click is a no-op and the dialog stays open.
    pub fn on_play(&mut self, drive: &dyn DiscDrive) {
        if self.state != PromptState::AwaitingInput {
            return;
        }
        if drive.is_disc_present() {
            self.state = PromptState::Confirmed;
        }
    }

    /// Eject activated: toggle the tray and keep the dialog open so the
    /// user can swap media and reconsider.
    pub fn on_eject(&mut self, drive: &dyn DiscDrive) {
        if self.state != PromptState::AwaitingInput {
            return;
        }
        drive.toggle_tray();
    }

    /// Host-level dismissal: window close, auto-close timeout, navigation.
    /// Idempotent once a terminal state is reached.
    pub fn on_dismiss(&mut self) {
        if self.state == PromptState::AwaitingInput {
            self.state = PromptState::Cancelled;
        }
    }

    /// Activate whichever button currently has focus.
    pub fn on_accept(&mut self, drive: &dyn DiscDrive) {
        match self.focus {
            PromptButton::Play => self.on_play(drive),
            PromptButton::Eject => self.on_eject(drive),
        }
    }

    /// Move focus to the other button; a disabled Play never takes focus.
    pub fn move_focus(&mut self) {
        self.focus = match self.focus {
            PromptButton::Play => PromptButton::Eject,
            PromptButton::Eject if self.play_enabled => PromptButton::Play,
            PromptButton::Eject => PromptButton::Eject,
        };
    }

    pub fn is_open(&self) -> bool {
        self.state == PromptState::AwaitingInput
    }

    pub fn is_confirmed(&self) -> bool {
        self.state == PromptState::Confirmed
    }

    pub fn state(&self) -> PromptState {
        self.state
    }

    pub fn play_enabled(&self) -> bool {
        self.play_enabled
    }

    pub fn focus(&self) -> PromptButton {
        self.focus
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    pub fn auto_close(&self) -> Option<Duration> {
        self.config.auto_close
    }

    /// Content line `i`, empty when out of range.
    pub fn line(&self, i: usize) -> &str {
        self.config.lines.get(i).map(String::as_str).unwrap_or("")
    }
}
