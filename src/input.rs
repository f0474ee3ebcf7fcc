//! Push-button interrupt handlers.
//!
//! Increment and decrement are wired to rising-edge interrupts. Start/stop
//! sits on a pin-change interrupt that fires on both edges, so a one-bit
//! latch of the last observed level turns it into a press event.

use crate::mode::Mode;
use crate::shared::SharedState;

/// Physical controls of the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Increment,
    Decrement,
    StartStop,
}

/// Mode to request when start/stop is pressed while in `current`.
///
/// Start only leads into COUNTDOWN from MAIN. Anywhere else it returns to
/// MAIN, which doubles as cancel and alarm acknowledgement.
pub const fn start_stop_target(current: Mode) -> Mode {
    match current {
        Mode::Main => Mode::Countdown,
        Mode::Init | Mode::Countdown | Mode::Expired => Mode::Main,
    }
}

impl SharedState {
    /// Increment button interrupt handler
    pub fn on_increment(&self) {
        critical_section::with(|cs| {
            if self.current_mode(cs) != Mode::Main {
                return;
            }
            let mut settings = self.settings(cs);
            if settings.increment() {
                self.set_settings(cs, settings);
            }
        });
    }

    /// Decrement button interrupt handler
    pub fn on_decrement(&self) {
        critical_section::with(|cs| {
            if self.current_mode(cs) != Mode::Main {
                return;
            }
            let mut settings = self.settings(cs);
            if settings.decrement() {
                self.set_settings(cs, settings);
            }
        });
    }

    /// Start/stop pin-change interrupt handler.
    ///
    /// `level` is the pin level read inside the handler. Only a low to high
    /// change counts as a press; bounce during the edge itself is not
    /// filtered.
    ///
    /// Returns `true` if the change was taken as a press.
    pub fn on_start_stop(&self, level: bool) -> bool {
        critical_section::with(|cs| {
            let latch = self.start_latch(cs);
            let pressed = level && !latch.get();
            latch.set(level);
            if pressed {
                let target = start_stop_target(self.current_mode(cs));
                self.set_requested_mode(cs, target);
            }
            pressed
        })
    }

    /// Dispatch an edge event for `button`.
    ///
    /// Increment and decrement ignore `level`, their interrupt only fires
    /// on the rising edge.
    pub fn on_button(&self, button: Button, level: bool) {
        match button {
            Button::Increment => self.on_increment(),
            Button::Decrement => self.on_decrement(),
            Button::StartStop => {
                self.on_start_stop(level);
            }
        }
    }
}
