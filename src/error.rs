//! Error types.
//!
//! Conversion failures are always local and recoverable: the caller shows the
//! message and keeps whatever it displayed before.

use thiserror::Error;

/// Failure of a single conversion request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The date or time text could not be interpreted.
    #[error("cannot parse input: {0}")]
    Parse(String),

    /// A zone identifier is unknown or a fixed offset is out of range.
    #[error("cannot resolve time zone: {0}")]
    ZoneResolution(String),
}

impl ConvertError {
    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        ConvertError::Parse(msg.into())
    }

    pub(crate) fn zone(msg: impl Into<String>) -> Self {
        ConvertError::ZoneResolution(msg.into())
    }

    /// True for [`ConvertError::Parse`].
    pub fn is_parse(&self) -> bool {
        matches!(self, ConvertError::Parse(_))
    }
}

/// Failure reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
