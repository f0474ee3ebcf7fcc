//! Main loop iteration and pacing.
//!
//! Portable, without async/await or platform-specific timers. The caller
//! is responsible for sleeping between iterations.

use embassy_time::{Duration, Instant};

use crate::machine::TimerMachine;
use crate::tick::TickSource;
use crate::OutputDriver;

/// Result of one main loop iteration.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// When the next iteration should run.
    pub next_deadline: Instant,
    /// How long to wait until the next iteration (zero if nothing was rendered).
    pub sleep_duration: Duration,
    /// Whether a frame was flushed to the strip.
    pub flushed: bool,
}

/// Drives the [`TimerMachine`] and flushes its frames.
///
/// Every `tick`:
/// 1. applies a pending mode change
/// 2. runs the active mode once
/// 3. writes the frame to the output driver if one was rendered
///
/// # Usage
///
/// ```ignore
/// static TIMER: SharedState = SharedState::new();
///
/// let machine = TimerMachine::new(&TIMER, timer1, &TimerConfig::default());
/// let mut scheduler = FrameScheduler::new(machine, strip);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     delay.delay_ms(result.sleep_duration.as_millis() as u32);
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, T: TickSource> {
    output: O,
    machine: TimerMachine<'a, T>,
}

impl<'a, O: OutputDriver, T: TickSource> FrameScheduler<'a, O, T> {
    pub fn new(machine: TimerMachine<'a, T>, driver: O) -> Self {
        Self {
            output: driver,
            machine,
        }
    }

    /// Run one iteration of the main loop.
    ///
    /// The pacing sleep starts after the flush, so the returned deadline is
    /// `now` plus the pace of the mode that was rendered.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        self.machine.poll();

        let (sleep_duration, flushed) = match self.machine.update() {
            Some(pace) => {
                self.output.write(self.machine.frame());
                (pace, true)
            }
            None => (Duration::from_millis(0), false),
        };

        FrameResult {
            next_deadline: now + sleep_duration,
            sleep_duration,
            flushed,
        }
    }

    /// Get a reference to the state machine.
    pub fn machine(&self) -> &TimerMachine<'a, T> {
        &self.machine
    }

    /// Get a mutable reference to the state machine.
    pub fn machine_mut(&mut self) -> &mut TimerMachine<'a, T> {
        &mut self.machine
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }
}
