//! Timer settings and the countdown clock.

use crate::config::{DEFAULT_MINUTES, MAX_MINUTES, SECONDS_RESET_VALUE};

/// User-adjustable timer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSettings {
    /// Length of the next countdown, `0..=MAX_MINUTES`
    pub minutes: u8,
}

impl TimerSettings {
    pub const fn new(minutes: u8) -> Self {
        let minutes = if minutes > MAX_MINUTES {
            MAX_MINUTES
        } else {
            minutes
        };
        Self { minutes }
    }

    /// Add one minute, saturating at [`MAX_MINUTES`]
    ///
    /// Returns `true` if the value changed.
    pub fn increment(&mut self) -> bool {
        if self.minutes >= MAX_MINUTES {
            return false;
        }
        self.minutes += 1;
        true
    }

    /// Remove one minute, saturating at zero
    ///
    /// Returns `true` if the value changed.
    pub fn decrement(&mut self) -> bool {
        if self.minutes == 0 {
            return false;
        }
        self.minutes -= 1;
        true
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self::new(DEFAULT_MINUTES)
    }
}

/// Result of one tick applied to a [`TimerState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Time was taken off the clock, some is left
    Counted,
    /// The last second was taken off the clock
    Elapsed,
    /// The clock was already at 0:00, nothing changed
    Expired,
}

/// Time left on a running countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerState {
    pub minutes_remaining: u8,
    /// Always in `0..=59`
    pub seconds_remaining: u8,
}

impl TimerState {
    /// State right after a countdown of `minutes` was started
    pub const fn armed(minutes: u8) -> Self {
        Self {
            minutes_remaining: minutes,
            seconds_remaining: 0,
        }
    }

    pub const fn is_zero(self) -> bool {
        self.minutes_remaining == 0 && self.seconds_remaining == 0
    }

    /// Take one second off the clock.
    pub fn tick(&mut self) -> TickOutcome {
        if self.seconds_remaining > 0 {
            self.seconds_remaining -= 1;
        } else if self.minutes_remaining > 0 {
            self.minutes_remaining -= 1;
            self.seconds_remaining = SECONDS_RESET_VALUE;
        } else {
            return TickOutcome::Expired;
        }

        if self.is_zero() {
            TickOutcome::Elapsed
        } else {
            TickOutcome::Counted
        }
    }
}
