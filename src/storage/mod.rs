//! Settings persistence.

pub mod config;

pub use config::{default_settings_path, SettingsStore};
