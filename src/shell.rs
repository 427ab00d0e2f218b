//! Terminal host for the play/eject dialog.
//!
//! `TuiShell` owns the shared `PromptDialog`, the drive it watches and a
//! `ratatui` terminal; presenting pumps the refresh tick and key events the
//! way a host window manager's modal loop would.

mod modal;
mod view;

pub use modal::*;
