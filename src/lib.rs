//! Time zone conversion and countdown core.
//!
//! Pure helpers and state used by the app. Everything here is free of
//! windowing code so it can be tested as normal integration tests; the only
//! OS-specific piece is the completion beep in [`platform`].

pub mod catalog;
pub mod countdown;
pub mod engine;
pub mod error;
pub mod events;
pub mod model;
pub mod platform;
pub mod shell;
pub mod storage;

use jiff::SignedDuration;

// Re-export the main types for convenience
pub use catalog::{CustomOffset, TimeZoneDescriptor, ZoneCatalog, ZoneSelector};
pub use countdown::{CompletionCue, Countdown, CountdownState, Tick};
pub use engine::{ConversionRequest, ConversionResult, EngineConfig, TimeConversionEngine};
pub use error::{ConvertError, SettingsError};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use model::AppSettings;

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Magnitude of `d` as `HH:MM:SS`. Hours keep growing past 99.
pub fn format_hms(d: SignedDuration) -> String {
    let total = d.as_secs().unsigned_abs();
    let (h, rem) = (total / 3600, total % 3600);
    let (m, s) = (rem / 60, rem % 60);
    format!("{:02}:{:02}:{:02}", h, m, s)
}

/// Magnitude of `d` as `H:MM:SS`, prefixed with whole days when there are any.
///
/// `1 day, 2:03:04`, `3 days, 0:00:10`, `0:05:00`.
pub fn format_elapsed(d: SignedDuration) -> String {
    let total = d.as_secs().unsigned_abs();
    let (days, rem) = (total / 86_400, total % 86_400);
    let (h, rem) = (rem / 3600, rem % 3600);
    let (m, s) = (rem / 60, rem % 60);
    match days {
        0 => format!("{}:{:02}:{:02}", h, m, s),
        1 => format!("1 day, {}:{:02}:{:02}", h, m, s),
        n => format!("{} days, {}:{:02}:{:02}", n, h, m, s),
    }
}

/// Offset in seconds as `+HH:MM` / `-HH:MM`.
pub fn format_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}
