//! Platform-specific implementations.
//!
//! Only the completion cue touches the OS: `MessageBeep` on Windows,
//! `NSBeep` on macOS, and the terminal bell everywhere else.

mod beep;

pub use beep::SystemBeep;
