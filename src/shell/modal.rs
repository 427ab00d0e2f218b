use std::io::Stdout;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

use crate::config::Settings;
use crate::drive::DiscDrive;
use crate::prompt::{PromptConfig, PromptDialog, PromptHost, PromptState};

use super::view;

/// Source of input for the modal loop: wait up to `timeout` for a key press.
///
/// The production shell polls crossterm; tests script key presses.
pub trait EventSource {
    fn poll_key(&mut self, timeout: Duration)
    -> Result<Option<KeyEvent>, Box<dyn std::error::Error>>;
}

/// The real terminal event source.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll_key(
        &mut self,
        timeout: Duration,
    ) -> Result<Option<KeyEvent>, Box<dyn std::error::Error>> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key));
                }
            }
        }
        Ok(None)
    }
}

/// A modal play/eject dialog rendered in the terminal.
///
/// Owns the single shared [`PromptDialog`] instance, so re-entrant
/// invocations reuse it; `configure` resets it before every show.
pub struct TuiShell<B: Backend, D: DiscDrive, E: EventSource = CrosstermEvents> {
    terminal: Terminal<B>,
    drive: D,
    dialog: PromptDialog,
    settings: Settings,
    events: E,
}

impl<D: DiscDrive> TuiShell<CrosstermBackend<Stdout>, D> {
    /// Set up the terminal (raw mode + alternate screen) and build a shell
    /// rendering to stdout.
    pub fn stdout(drive: D, settings: Settings) -> Result<Self, Box<dyn std::error::Error>> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self::with_terminal(terminal, drive, settings))
    }

    /// Leave the alternate screen and restore the terminal.
    pub fn restore(mut self) -> Result<(), Box<dyn std::error::Error>> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl<B: Backend<Error: 'static>, D: DiscDrive> TuiShell<B, D> {
    /// Build a shell over an existing terminal, polling crossterm for input.
    pub fn with_terminal(terminal: Terminal<B>, drive: D, settings: Settings) -> Self {
        Self::with_event_source(terminal, drive, settings, CrosstermEvents)
    }
}

impl<B: Backend<Error: 'static>, D: DiscDrive, E: EventSource> TuiShell<B, D, E> {
    /// Build a shell with an injected event source (used with test backends).
    pub fn with_event_source(terminal: Terminal<B>, drive: D, settings: Settings, events: E) -> Self {
        Self {
            terminal,
            drive,
            dialog: PromptDialog::new(),
            settings,
            events,
        }
    }

    pub fn drive(&self) -> &D {
        &self.drive
    }

    /// The modal loop: tick, draw, dispatch input, check auto-close, until
    /// the dialog reaches a terminal state.
    fn run_modal(
        &mut self,
        config: PromptConfig,
    ) -> Result<PromptState, Box<dyn std::error::Error>> {
        self.dialog.configure(config);
        self.dialog.on_open(&self.drive);

        let opened_at = Instant::now();
        let tick = Duration::from_millis(self.settings.ui.tick_ms.max(1));

        while self.dialog.is_open() {
            self.dialog.on_tick(&self.drive);

            let dialog = &self.dialog;
            self.terminal.draw(|f| view::draw(f, dialog))?;

            if let Some(key) = self.events.poll_key(tick)? {
                handle_key_event(key, &mut self.dialog, &self.drive);
            }

            if let Some(limit) = self.dialog.auto_close() {
                if opened_at.elapsed() >= limit {
                    self.dialog.on_dismiss();
                }
            }
        }

        Ok(self.dialog.state())
    }
}

impl<B: Backend<Error: 'static>, D: DiscDrive, E: EventSource> PromptHost for TuiShell<B, D, E> {
    fn is_ready(&self) -> bool {
        true
    }

    fn present(&mut self, config: PromptConfig) -> PromptState {
        match self.run_modal(config) {
            Ok(state) => state,
            Err(err) => {
                // A terminal I/O failure counts as a dismissal, not a crash.
                log::error!("Error presenting play/eject dialog: {err}");
                self.dialog.on_dismiss();
                self.dialog.state()
            }
        }
    }
}

/// Route one key press into the dialog.
pub fn handle_key_event(key: KeyEvent, dialog: &mut PromptDialog, drive: &dyn DiscDrive) {
    match key.code {
        KeyCode::Enter => dialog.on_accept(drive),
        KeyCode::Char('p') => dialog.on_play(drive),
        KeyCode::Char('e') => dialog.on_eject(drive),
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => dialog.move_focus(),
        KeyCode::Esc | KeyCode::Char('q') => dialog.on_dismiss(),
        _ => {}
    }
}
