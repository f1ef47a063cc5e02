//! Configuration constants and default values.
//!
//! This module contains all application constants including settings
//! defaults, settings file location, and validation limits.

// === Conversion ===

/// Largest magnitude, in hours, accepted for a custom UTC offset.
pub const MAX_CUSTOM_OFFSET_HOURS: i8 = 18;

// === Countdown ===

/// Countdown refresh period in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 1000;

// === Settings Defaults ===

/// Default overlay opacity (1.0 = opaque).
pub const DEFAULT_TRANSPARENCY: f64 = 0.5;

/// Default countdown window size in normal mode (width, height).
pub const DEFAULT_COUNTDOWN_NORMAL_SIZE: [i32; 2] = [600, 180];

/// Default countdown window position in normal mode (x, y).
pub const DEFAULT_COUNTDOWN_NORMAL_POS: [i32; 2] = [100, 100];

/// Default countdown window size in overlay mode.
pub const DEFAULT_COUNTDOWN_OVERLAY_SIZE: [i32; 2] = [400, 120];

/// Default countdown window position in overlay mode.
pub const DEFAULT_COUNTDOWN_OVERLAY_POS: [i32; 2] = [200, 200];

/// Default converter window position.
pub const DEFAULT_MAIN_WINDOW_POS: [i32; 2] = [100, 100];

/// Default converter window size.
pub const DEFAULT_MAIN_WINDOW_SIZE: [i32; 2] = [700, 370];

// === Settings File ===

/// Directory, next to the executable, holding application files.
pub const APP_DIR_NAME: &str = "Moist";

/// Settings file name inside [`APP_DIR_NAME`].
pub const SETTINGS_FILE_NAME: &str = "countdown_settings.json";

// === Validation Limits ===

/// Minimum overlay opacity. Lower values make the overlay unusable.
pub const MIN_TRANSPARENCY: f64 = 0.1;

/// Maximum overlay opacity.
pub const MAX_TRANSPARENCY: f64 = 1.0;

/// Smallest countdown window (width, height).
pub const MIN_COUNTDOWN_SIZE: [i32; 2] = [320, 120];
