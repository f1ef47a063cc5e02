//! Countdown display mode: normal window or always-on-top overlay.
//!
//! The controller owns no window. It decides which geometry and appearance
//! the countdown window should take, remembers geometry per mode in
//! [`AppSettings`], and hides the main window while the overlay is shown.

use log::info;

use super::window::WindowControl;
use crate::model::{AppSettings, Geometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Normal,
    Overlay,
}

/// Window attributes to apply for the current mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub opacity: f64,
    pub click_through: bool,
    pub always_on_top: bool,
    pub frameless: bool,
    /// Toggle buttons and the info line are hidden in overlay mode.
    pub show_controls: bool,
}

#[derive(Debug, Default)]
pub struct OverlayController {
    mode: DisplayMode,
    pre_overlay_pos: Option<[i32; 2]>,
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn is_overlay(&self) -> bool {
        self.mode == DisplayMode::Overlay
    }

    /// Saved geometry for the current mode.
    pub fn geometry(&self, settings: &AppSettings) -> Geometry {
        match self.mode {
            DisplayMode::Normal => settings.normal_geometry(),
            DisplayMode::Overlay => settings.overlay_geometry(),
        }
    }

    /// Remembers a move or resize of the countdown window.
    pub fn record_geometry(&self, geometry: Geometry, settings: &mut AppSettings) {
        match self.mode {
            DisplayMode::Normal => settings.set_normal_geometry(geometry),
            DisplayMode::Overlay => settings.set_overlay_geometry(geometry),
        }
    }

    pub fn appearance(&self, settings: &AppSettings) -> Appearance {
        match self.mode {
            DisplayMode::Normal => Appearance {
                opacity: 1.0,
                click_through: false,
                always_on_top: false,
                frameless: false,
                show_controls: true,
            },
            DisplayMode::Overlay => Appearance {
                opacity: settings.transparency,
                click_through: settings.click_through,
                always_on_top: true,
                frameless: true,
                show_controls: false,
            },
        }
    }

    /// Switches mode and returns the geometry the countdown window should take.
    ///
    /// Entering the overlay hides `main_window`; leaving it restores
    /// `main_window` and moves the countdown back to where it was before.
    pub fn toggle(
        &mut self,
        current: Geometry,
        settings: &mut AppSettings,
        main_window: &mut dyn WindowControl,
    ) -> Geometry {
        self.record_geometry(current, settings);
        match self.mode {
            DisplayMode::Normal => {
                self.pre_overlay_pos = Some(current.pos());
                main_window.minimize();
                self.mode = DisplayMode::Overlay;
                info!("overlay mode on");
                settings.overlay_geometry()
            }
            DisplayMode::Overlay => {
                main_window.restore();
                self.mode = DisplayMode::Normal;
                info!("overlay mode off");
                let mut geometry = settings.normal_geometry();
                if let Some([x, y]) = self.pre_overlay_pos.take() {
                    geometry.x = x;
                    geometry.y = y;
                }
                geometry
            }
        }
    }

    /// Escape leaves the overlay and centres the countdown on `screen`.
    ///
    /// Returns the new geometry, or `None` in normal mode where Escape is
    /// not handled.
    pub fn on_escape(
        &mut self,
        current: Geometry,
        screen: Geometry,
        settings: &mut AppSettings,
        main_window: &mut dyn WindowControl,
    ) -> Option<Geometry> {
        if !self.is_overlay() {
            return None;
        }
        let geometry = self.toggle(current, settings, main_window);
        Some(centered(geometry, screen))
    }

    /// Double-click toggles the mode when `double_click_overlay` is on.
    /// Leaving the overlay this way also centres the countdown on `screen`.
    pub fn on_double_click(
        &mut self,
        current: Geometry,
        screen: Geometry,
        settings: &mut AppSettings,
        main_window: &mut dyn WindowControl,
    ) -> Option<Geometry> {
        if !settings.double_click_overlay {
            return None;
        }
        let leaving = self.is_overlay();
        let geometry = self.toggle(current, settings, main_window);
        Some(if leaving { centered(geometry, screen) } else { geometry })
    }
}

/// `window` moved to the centre of `screen`, size unchanged.
pub fn centered(window: Geometry, screen: Geometry) -> Geometry {
    Geometry {
        x: screen.x + (screen.width - window.width) / 2,
        y: screen.y + (screen.height - window.height) / 2,
        ..window
    }
}
