//! One-second tick source and its interrupt handler.

use crate::countdown::TickOutcome;
use crate::mode::Mode;
use crate::shared::SharedState;

/// Largest value returned by [`TickSource::sub_second_phase`].
pub const MAX_PHASE: u8 = 63;

/// Hardware timer raising one interrupt per second.
///
/// Implement this for the board's 16-bit timer in CTC mode: count up to
/// [`crate::config::TICK_TOP`] and raise the compare interrupt, which must
/// call [`SharedState::on_tick`].
pub trait TickSource {
    /// Configure the timer and enable its periodic interrupt.
    ///
    /// Calling it while already running is not supported, pair it with
    /// [`Self::stop`].
    fn start(&mut self);

    /// Disable the interrupt enable bit and halt the counter.
    ///
    /// No tick interrupt may fire after this returns.
    fn stop(&mut self);

    /// Force the free-running counter back to zero
    fn reset_counter(&mut self);

    /// Raw value of the live counter register
    fn counter(&self) -> u16;

    /// Small animation phase derived from the live counter.
    ///
    /// Grows with the time elapsed since the last tick. Only used to
    /// animate the pulse pixel, no distribution is guaranteed.
    fn sub_second_phase(&self) -> u8 {
        phase_of(self.counter())
    }
}

/// High byte of the counter shifted down to `0..=MAX_PHASE`
#[allow(clippy::cast_possible_truncation)]
pub const fn phase_of(counter: u16) -> u8 {
    (counter >> 10) as u8
}

impl SharedState {
    /// Tick interrupt handler.
    ///
    /// Takes one second off the countdown while the timer is running. The
    /// tick that reaches 0:00 requests EXPIRED, and so does a tick that
    /// finds the clock already at 0:00 (a zero-minute start).
    ///
    /// Once another mode is requested (cancel or expiry) the countdown is
    /// frozen, even before the main loop applies the transition.
    pub fn on_tick(&self) {
        critical_section::with(|cs| {
            if self.current_mode(cs) != Mode::Countdown
                || self.requested_mode(cs) != Mode::Countdown
            {
                return;
            }
            let mut state = self.countdown(cs);
            let outcome = state.tick();
            if outcome != TickOutcome::Expired {
                self.set_countdown(cs, state);
            }
            if outcome != TickOutcome::Counted {
                self.set_requested_mode(cs, Mode::Expired);
            }
        });
    }
}
