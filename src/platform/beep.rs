//! System beep used as the countdown completion cue.

use crate::countdown::CompletionCue;

/// Plays the platform's default alert sound.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBeep;

impl CompletionCue for SystemBeep {
    fn play(&mut self) {
        beep();
    }
}

#[cfg(target_os = "windows")]
fn beep() {
    use windows::Win32::UI::WindowsAndMessaging::{MessageBeep, MB_ICONASTERISK};

    // SAFETY: MessageBeep has no pointer arguments and may be called from any thread.
    if let Err(e) = unsafe { MessageBeep(MB_ICONASTERISK) } {
        log::warn!("MessageBeep failed: {}", e);
    }
}

#[cfg(target_os = "macos")]
fn beep() {
    // SAFETY: NSBeep takes no arguments and is safe to call from the main thread.
    #[allow(unused_unsafe)]
    unsafe {
        objc2_app_kit::NSBeep();
    }
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn beep() {
    use std::io::Write;

    let mut out = std::io::stdout();
    if let Err(e) = out.write_all(b"\x07").and_then(|_| out.flush()) {
        log::warn!("terminal bell failed: {}", e);
    }
}
