//! Play/eject confirmation prompt for disc stub media.
//!
//! A disc stub is a placeholder file standing in for removable media that is
//! not currently inserted. When the user activates one, the embedding
//! application asks whether to play the disc or eject the tray. This crate
//! provides that dialog: the [`prompt`] state machine and its blocking
//! entry point, the sidecar [`metadata`] extraction that fills in the dialog
//! text, the [`drive`] capability supplied by the host's removable media
//! subsystem, and a terminal [`shell`] host implementation.
//!
//! ```no_run
//! use discprompt::config::Settings;
//! use discprompt::drive::VirtualDrive;
//! use discprompt::prompt::ask_play_or_eject;
//! use discprompt::shell::TuiShell;
//! use discprompt::stub::DiscItem;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::load()?;
//! let item = DiscItem::from_path("movie.disc".as_ref(), &settings.stubs.extensions);
//!
//! let drive = VirtualDrive::new();
//! drive.load_disc();
//!
//! let mut shell = TuiShell::stdout(drive, settings.clone())?;
//! let play = ask_play_or_eject(&mut shell, &item, &settings.prompt, None);
//! shell.restore()?;
//!
//! if play {
//!     // hand the item over to playback
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod drive;
pub mod metadata;
pub mod prompt;
pub mod shell;
pub mod stub;

pub use drive::DiscDrive;
pub use metadata::StubMetadata;
pub use prompt::{
    PromptButton, PromptConfig, PromptDialog, PromptHost, PromptState, ask_play_or_eject,
};
pub use stub::DiscItem;
