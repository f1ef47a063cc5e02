//! Window capability contract and tray coordination.
//!
//! Every window that can be hidden to the tray implements [`WindowControl`].
//! The set of windows is fixed when the [`TrayCoordinator`] is built.

use log::debug;

/// What the shell may ask of a window.
pub trait WindowControl {
    /// Hide the window to the tray.
    fn minimize(&mut self);
    /// Show the window again and bring it to the front.
    fn restore(&mut self);
    fn is_visible(&self) -> bool;
}

/// Hides and restores a fixed group of windows together.
pub struct TrayCoordinator {
    windows: Vec<Box<dyn WindowControl>>,
    in_tray: bool,
}

impl TrayCoordinator {
    pub fn new(windows: Vec<Box<dyn WindowControl>>) -> Self {
        Self {
            windows,
            in_tray: false,
        }
    }

    pub fn in_tray(&self) -> bool {
        self.in_tray
    }

    pub fn windows(&self) -> impl Iterator<Item = &dyn WindowControl> {
        self.windows.iter().map(|w| w.as_ref())
    }

    pub fn minimize_to_tray(&mut self) {
        if self.in_tray {
            return;
        }
        debug!("minimizing {} window(s) to tray", self.windows.len());
        for window in &mut self.windows {
            window.minimize();
        }
        self.in_tray = true;
    }

    pub fn restore_from_tray(&mut self) {
        if !self.in_tray {
            return;
        }
        debug!("restoring {} window(s) from tray", self.windows.len());
        for window in &mut self.windows {
            window.restore();
        }
        self.in_tray = false;
    }

    /// Tray icon activation: flip between hidden and shown.
    pub fn toggle(&mut self) {
        if self.in_tray {
            self.restore_from_tray();
        } else {
            self.minimize_to_tray();
        }
    }
}

impl WindowControl for TrayCoordinator {
    fn minimize(&mut self) {
        self.minimize_to_tray();
    }

    fn restore(&mut self) {
        self.restore_from_tray();
    }

    fn is_visible(&self) -> bool {
        !self.in_tray
    }
}
