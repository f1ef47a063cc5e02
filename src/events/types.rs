//! Application events for inter-module communication.
//!
//! These events represent high-level application actions published by the
//! tick thread or the command reader and handled by the main loop. Pure
//! Rust, fully testable.

/// Application-level events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Timer Events ===
    /// One countdown period elapsed.
    Tick,

    // === Input Events ===
    /// Flip the completion sound on or off.
    ToggleSound,

    /// Request application quit.
    RequestQuit,
}

impl AppEvent {
    /// Maps a line typed while the countdown runs to its event.
    ///
    /// `s` toggles the sound, `q` quits. Anything else is ignored.
    pub fn from_command(line: &str) -> Option<AppEvent> {
        match line.trim().to_ascii_lowercase().as_str() {
            "s" | "sound" => Some(AppEvent::ToggleSound),
            "q" | "quit" => Some(AppEvent::RequestQuit),
            _ => None,
        }
    }

    /// Returns true if settings should be written to disk after this event.
    pub fn requires_settings_flush(&self) -> bool {
        matches!(self, AppEvent::ToggleSound | AppEvent::RequestQuit)
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::Tick => "Countdown tick",
            AppEvent::ToggleSound => "Toggle completion sound",
            AppEvent::RequestQuit => "Request quit",
        }
    }
}
