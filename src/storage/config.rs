//! JSON settings file.
//!
//! Stored by default in `<exe dir>/Moist/countdown_settings.json`.
//!
//! Uses an in-memory cache to avoid disk I/O on every slider change or
//! window move. Call `flush()` to persist changes to disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::SettingsError;
use crate::model::constants::{APP_DIR_NAME, SETTINGS_FILE_NAME};
use crate::model::AppSettings;

/// Settings file with a write-back cache.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    cache: Option<AppSettings>,
    dirty: bool,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: None,
            dirty: false,
        }
    }

    /// Store at the default location next to the executable.
    pub fn at_default_location() -> Self {
        Self::new(default_settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cached settings, loading from disk on first use.
    pub fn settings(&mut self) -> &AppSettings {
        self.cache
            .get_or_insert_with(|| load_settings_from_disk(&self.path))
    }

    /// Modifies the cached settings and marks them dirty.
    pub fn update(&mut self, f: impl FnOnce(&mut AppSettings)) {
        let settings = self
            .cache
            .get_or_insert_with(|| load_settings_from_disk(&self.path));
        f(settings);
        settings.validate();
        self.dirty = true;
    }

    /// Replaces the cached settings and marks them dirty.
    pub fn replace(&mut self, mut settings: AppSettings) {
        settings.validate();
        self.cache = Some(settings);
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes the cache to disk if dirty.
    ///
    /// Call this when the options dialog closes, the overlay mode changes,
    /// or the app exits.
    pub fn flush(&mut self) -> Result<(), SettingsError> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(ref settings) = self.cache {
            save_settings_to_disk(&self.path, settings)?;
        }
        self.dirty = false;
        Ok(())
    }
}

/// `<exe dir>/Moist/countdown_settings.json`, or relative to the working
/// directory when the executable path is unknown.
pub fn default_settings_path() -> PathBuf {
    let base = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME)
}

/// Load settings from JSON file, returning defaults if not found or invalid.
fn load_settings_from_disk(path: &Path) -> AppSettings {
    let mut settings = match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!("ignoring invalid settings file {}: {}", path.display(), e);
            AppSettings::default()
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no settings file at {}, using defaults", path.display());
            AppSettings::default()
        }
        Err(e) => {
            warn!("cannot read settings file {}: {}", path.display(), e);
            AppSettings::default()
        }
    };
    settings.validate();
    settings
}

/// Save settings to JSON file, creating the directory if needed.
fn save_settings_to_disk(path: &Path, settings: &AppSettings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    debug!("settings written to {}", path.display());
    Ok(())
}
