//! State shared between interrupt handlers and the main loop.
//!
//! Every field sits behind a `critical-section` mutex, so reads and writes
//! are atomic with respect to interrupts on single-core targets. Field
//! ownership:
//!
//! | field            | written by                                  |
//! |------------------|---------------------------------------------|
//! | `current_mode`   | main loop, inside the transition step only  |
//! | `requested_mode` | interrupts (buttons, tick) and the INIT update |
//! | `settings`       | increment / decrement interrupts            |
//! | `countdown`      | tick interrupt, armed by the transition step |
//! | `start_latch`    | start/stop interrupt                        |

use core::cell::Cell;

use critical_section::{CriticalSection, Mutex};

use crate::config::DEFAULT_MINUTES;
use crate::countdown::{TimerSettings, TimerState};
use crate::mode::Mode;

/// Consistent view of the shared state, taken in one critical section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub current: Mode,
    pub requested: Mode,
    pub settings: TimerSettings,
    pub countdown: TimerState,
}

/// Process-wide timer state.
///
/// `const`-constructible, intended to live in a `static`:
///
/// ```ignore
/// static TIMER: SharedState = SharedState::new();
/// ```
pub struct SharedState {
    current_mode: Mutex<Cell<Mode>>,
    requested_mode: Mutex<Cell<Mode>>,
    settings: Mutex<Cell<TimerSettings>>,
    countdown: Mutex<Cell<TimerState>>,
    start_latch: Mutex<Cell<bool>>,
}

impl SharedState {
    /// Power-on state: INIT with the default number of minutes
    pub const fn new() -> Self {
        Self::with_minutes(DEFAULT_MINUTES)
    }

    /// Power-on state with a custom number of minutes (clamped)
    pub const fn with_minutes(minutes: u8) -> Self {
        Self {
            current_mode: Mutex::new(Cell::new(Mode::Init)),
            requested_mode: Mutex::new(Cell::new(Mode::Init)),
            settings: Mutex::new(Cell::new(TimerSettings::new(minutes))),
            countdown: Mutex::new(Cell::new(TimerState::armed(0))),
            start_latch: Mutex::new(Cell::new(false)),
        }
    }

    /// Read every field at once
    pub fn snapshot(&self) -> Snapshot {
        critical_section::with(|cs| Snapshot {
            current: self.current_mode(cs),
            requested: self.requested_mode(cs),
            settings: self.settings(cs),
            countdown: self.countdown(cs),
        })
    }

    /// Ask the main loop to switch modes on its next poll.
    ///
    /// Last write wins, earlier requests are not queued.
    pub fn request(&self, mode: Mode) {
        critical_section::with(|cs| self.set_requested_mode(cs, mode));
    }

    pub fn current_mode(&self, cs: CriticalSection<'_>) -> Mode {
        self.current_mode.borrow(cs).get()
    }

    pub fn requested_mode(&self, cs: CriticalSection<'_>) -> Mode {
        self.requested_mode.borrow(cs).get()
    }

    pub fn settings(&self, cs: CriticalSection<'_>) -> TimerSettings {
        self.settings.borrow(cs).get()
    }

    pub fn countdown(&self, cs: CriticalSection<'_>) -> TimerState {
        self.countdown.borrow(cs).get()
    }

    /// Last observed level of the start/stop pin
    pub(crate) fn start_latch<'cs>(&'cs self, cs: CriticalSection<'cs>) -> &'cs Cell<bool> {
        self.start_latch.borrow(cs)
    }

    pub(crate) fn set_current_mode(&self, cs: CriticalSection<'_>, mode: Mode) {
        self.current_mode.borrow(cs).set(mode);
    }

    pub(crate) fn set_requested_mode(&self, cs: CriticalSection<'_>, mode: Mode) {
        self.requested_mode.borrow(cs).set(mode);
    }

    pub(crate) fn set_settings(&self, cs: CriticalSection<'_>, settings: TimerSettings) {
        self.settings.borrow(cs).set(settings);
    }

    pub(crate) fn set_countdown(&self, cs: CriticalSection<'_>, state: TimerState) {
        self.countdown.borrow(cs).set(state);
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}
