//! The play/eject prompt: dialog state machine and entry point.
//!
//! `PromptDialog` is the single shared dialog instance a host embeds and
//! drives with UI events (open, refresh tick, button activation, dismissal).
//! `ask_play_or_eject` is the synchronous contract callers use: configure the
//! dialog for one item, present it modally through a [`PromptHost`], and
//! report whether the user confirmed Play.

mod ask;
mod model;

pub use ask::*;
pub use model::*;
