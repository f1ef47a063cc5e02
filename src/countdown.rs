//! Countdown to a target instant, re-evaluated on a fixed tick.
//!
//! ```text
//!            remaining > 0             remaining <= 0 (cue once)
//! (start) ───────────────▶ Pending ──────────────────────────▶ Reached
//!    │                                                           │ remaining < 0
//!    │ remaining < 0                                             ▼
//!    └─────────────────────────────────────────────────────────▶ Overdue
//! ```
//!
//! `Reached` and `Overdue` stop the ticking clock; evaluating again only
//! refreshes the overdue time. The completion cue fires on the
//! `Pending → Reached` edge, and also when the very first evaluation lands
//! exactly on the target. A target that was already past when the countdown
//! started goes straight to `Overdue` without a cue.

use std::cmp::Ordering;

use jiff::{SignedDuration, Timestamp};
use log::{debug, info};

use crate::format_hms;

/// Receives the one-shot "countdown finished" notification.
pub trait CompletionCue {
    fn play(&mut self);
}

/// No-op cue, for when sound is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCue;

impl CompletionCue for SilentCue {
    fn play(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    /// Not evaluated yet.
    Idle,
    /// Target is in the future.
    Pending,
    /// Target was crossed while counting down.
    Reached,
    /// Target is in the past.
    Overdue,
}

impl CountdownState {
    /// Reached and Overdue need no further scheduling.
    pub fn is_terminal(self) -> bool {
        matches!(self, CountdownState::Reached | CountdownState::Overdue)
    }
}

/// Result of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub state: CountdownState,
    /// `HH:MM:SS` left, `00:00:00` once the target is reached.
    pub display: String,
    /// Elapsed time past the target, when negative.
    pub overdue_by: Option<SignedDuration>,
    /// Whether the caller should schedule another tick.
    pub keep_ticking: bool,
    /// The completion cue fired during this evaluation.
    pub cue_fired: bool,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    target: Timestamp,
    state: CountdownState,
    cue_fired: bool,
}

impl Countdown {
    pub fn new(target: Timestamp) -> Self {
        Self {
            target,
            state: CountdownState::Idle,
            cue_fired: false,
        }
    }

    pub fn target(&self) -> Timestamp {
        self.target
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    /// Points the countdown at a new target and re-arms the cue.
    pub fn retarget(&mut self, target: Timestamp) {
        debug!("countdown retargeted to {target}");
        *self = Self::new(target);
    }

    /// Evaluates at `now` without a cue.
    pub fn tick(&mut self, now: Timestamp) -> Tick {
        self.tick_with(now, None)
    }

    /// Evaluates at `now`, playing `cue` on the reaching edge.
    pub fn tick_with(&mut self, now: Timestamp, cue: Option<&mut dyn CompletionCue>) -> Tick {
        let remaining = self.target.duration_since(now);
        let previous = self.state;

        self.state = match (previous, remaining.cmp(&SignedDuration::ZERO)) {
            (CountdownState::Idle | CountdownState::Pending, Ordering::Greater) => {
                CountdownState::Pending
            }
            (CountdownState::Idle, Ordering::Less) => CountdownState::Overdue,
            (CountdownState::Idle | CountdownState::Pending, _) => CountdownState::Reached,
            (CountdownState::Reached, Ordering::Less) => CountdownState::Overdue,
            (terminal, _) => terminal,
        };

        let mut cue_fired = false;
        if self.state == CountdownState::Reached && !self.cue_fired {
            self.cue_fired = true;
            info!("countdown reached {}", self.target);
            if let Some(cue) = cue {
                cue.play();
                cue_fired = true;
            }
        }
        if self.state == CountdownState::Overdue && previous == CountdownState::Idle {
            // Never armed: a target already in the past is not a completion.
            self.cue_fired = true;
        }

        let display = if self.state == CountdownState::Pending {
            format_hms(remaining)
        } else {
            format_hms(SignedDuration::ZERO)
        };

        Tick {
            state: self.state,
            display,
            overdue_by: (remaining < SignedDuration::ZERO).then(|| remaining.abs()),
            keep_ticking: !self.state.is_terminal(),
            cue_fired,
        }
    }
}
