//! User settings (pure Rust, no I/O).
//!
//! This module defines the settings structure that is serialized to/from
//! the JSON settings file. Unknown keys are ignored and missing keys take
//! their defaults, so older files keep loading.

use serde::{Deserialize, Serialize};

use super::constants::*;
use crate::clamp;

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the operating system.
    #[default]
    Auto,
    Light,
    Dark,
}

/// Window position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Geometry {
    pub fn from_parts(pos: [i32; 2], size: [i32; 2]) -> Self {
        Self {
            x: pos[0],
            y: pos[1],
            width: size[0],
            height: size[1],
        }
    }

    pub fn pos(&self) -> [i32; 2] {
        [self.x, self.y]
    }

    pub fn size(&self) -> [i32; 2] {
        [self.width, self.height]
    }
}

/// Complete settings, serializable to/from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Overlay opacity [0.1, 1.0].
    pub transparency: f64,
    /// Let mouse clicks pass through the overlay.
    pub click_through: bool,
    /// Play the completion cue when a countdown reaches zero.
    pub play_sound: bool,
    /// Double-clicking the countdown toggles overlay mode.
    pub double_click_overlay: bool,
    pub countdown_normal_size: [i32; 2],
    pub countdown_normal_pos: [i32; 2],
    pub countdown_overlay_size: [i32; 2],
    pub countdown_overlay_pos: [i32; 2],
    pub theme: Theme,
    pub main_window_pos: [i32; 2],
    pub main_window_size: [i32; 2],
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            transparency: DEFAULT_TRANSPARENCY,
            click_through: false,
            play_sound: false,
            double_click_overlay: false,
            countdown_normal_size: DEFAULT_COUNTDOWN_NORMAL_SIZE,
            countdown_normal_pos: DEFAULT_COUNTDOWN_NORMAL_POS,
            countdown_overlay_size: DEFAULT_COUNTDOWN_OVERLAY_SIZE,
            countdown_overlay_pos: DEFAULT_COUNTDOWN_OVERLAY_POS,
            theme: Theme::Auto,
            main_window_pos: DEFAULT_MAIN_WINDOW_POS,
            main_window_size: DEFAULT_MAIN_WINDOW_SIZE,
        }
    }
}

impl AppSettings {
    /// Validates and clamps all values to valid ranges.
    pub fn validate(&mut self) {
        self.transparency = clamp(self.transparency, MIN_TRANSPARENCY, MAX_TRANSPARENCY);
        for size in [
            &mut self.countdown_normal_size,
            &mut self.countdown_overlay_size,
        ] {
            size[0] = size[0].max(MIN_COUNTDOWN_SIZE[0]);
            size[1] = size[1].max(MIN_COUNTDOWN_SIZE[1]);
        }
    }

    /// Countdown window geometry in normal mode.
    pub fn normal_geometry(&self) -> Geometry {
        Geometry::from_parts(self.countdown_normal_pos, self.countdown_normal_size)
    }

    /// Countdown window geometry in overlay mode.
    pub fn overlay_geometry(&self) -> Geometry {
        Geometry::from_parts(self.countdown_overlay_pos, self.countdown_overlay_size)
    }

    pub fn set_normal_geometry(&mut self, geometry: Geometry) {
        self.countdown_normal_pos = geometry.pos();
        self.countdown_normal_size = geometry.size();
    }

    pub fn set_overlay_geometry(&mut self, geometry: Geometry) {
        self.countdown_overlay_pos = geometry.pos();
        self.countdown_overlay_size = geometry.size();
    }

    pub fn main_window_geometry(&self) -> Geometry {
        Geometry::from_parts(self.main_window_pos, self.main_window_size)
    }
}
