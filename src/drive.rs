//! Disc drive capability: presence queries and tray control.

use std::cell::Cell;

/// Capability supplied by the host's removable media subsystem.
///
/// Both operations are synchronous and fast; `toggle_tray` side-effects only
/// the drive state and reports nothing back.
pub trait DiscDrive {
    /// Whether a readable disc is currently in the drive.
    fn is_disc_present(&self) -> bool;
    /// Open the tray if closed, close it if open.
    fn toggle_tray(&self);
}

/// An in-process drive for hosts that emulate an optical drive, and for
/// tests. A loaded disc is only readable while the tray is closed.
#[derive(Debug, Default)]
pub struct VirtualDrive {
    tray_open: Cell<bool>,
    disc_loaded: Cell<bool>,
}

impl VirtualDrive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a disc in the (virtual) tray.
    pub fn load_disc(&self) {
        self.disc_loaded.set(true);
    }

    /// Take the disc out.
    pub fn remove_disc(&self) {
        self.disc_loaded.set(false);
    }

    pub fn tray_open(&self) -> bool {
        self.tray_open.get()
    }
}

impl DiscDrive for VirtualDrive {
    fn is_disc_present(&self) -> bool {
        self.disc_loaded.get() && !self.tray_open.get()
    }

    fn toggle_tray(&self) {
        self.tray_open.set(!self.tray_open.get());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_closed_drive_reports_no_disc() {
        let drive = VirtualDrive::new();
        assert!(!drive.is_disc_present());
        assert!(!drive.tray_open());
    }

    #[test]
    fn loaded_disc_is_present_only_while_tray_closed() {
        let drive = VirtualDrive::new();
        drive.load_disc();
        assert!(drive.is_disc_present());

        drive.toggle_tray();
        assert!(drive.tray_open());
        assert!(!drive.is_disc_present());

        drive.toggle_tray();
        assert!(!drive.tray_open());
        assert!(drive.is_disc_present());
    }

    #[test]
    fn removing_the_disc_clears_presence() {
        let drive = VirtualDrive::new();
        drive.load_disc();
        drive.remove_disc();
        assert!(!drive.is_disc_present());
    }
}
