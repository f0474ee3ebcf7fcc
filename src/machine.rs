//! Mode state machine driving the renderers from the main loop.

use critical_section::CriticalSection;
use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, Rgb};
use crate::config::{N_PIXELS, Paces, TimerConfig};
use crate::countdown::TimerState;
use crate::effect::{CountdownEffect, CountdownFrame, Effect, ExpiredEffect, MenuEffect};
use crate::mode::{Action, Mode, Transition, UnreachableTransition};
use crate::shared::SharedState;
use crate::tick::TickSource;

/// Pixel state of the whole strip
pub type FrameBuffer = [Rgb; N_PIXELS];

/// Mode state machine - the main-loop side of the timer
///
/// Owns the tick source, the renderers and the frame buffer. Interrupt
/// handlers only talk to the [`SharedState`].
pub struct TimerMachine<'a, T: TickSource> {
    shared: &'a SharedState,
    ticker: T,
    paces: Paces,

    menu: MenuEffect,
    countdown: CountdownEffect,
    expired: ExpiredEffect,

    frame_buffer: FrameBuffer,
}

impl<'a, T: TickSource> TimerMachine<'a, T> {
    pub fn new(shared: &'a SharedState, ticker: T, config: &TimerConfig) -> Self {
        let palette = config.palette;
        Self {
            shared,
            ticker,
            paces: config.paces,
            menu: MenuEffect::new(palette.menu_hue),
            countdown: CountdownEffect::new(palette.countdown, palette.pulse),
            expired: ExpiredEffect::new(palette.alert),
            frame_buffer: [BLACK; N_PIXELS],
        }
    }

    /// Apply a pending mode change, if any.
    ///
    /// Exit and enter actions run with interrupts masked, so neither the
    /// tick nor a button handler can observe a half-done transition.
    /// Returns the transition that was applied.
    pub fn poll(&mut self) -> Option<Transition> {
        let result = critical_section::with(|cs| {
            let from = self.shared.current_mode(cs);
            let to = self.shared.requested_mode(cs);
            if from == to {
                return None;
            }
            Some(self.transition(cs, from, to))
        })?;

        match result {
            Ok(transition) => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[timer] {} -> {}",
                    transition.source().as_str(),
                    transition.target().as_str()
                );
                Some(transition)
            }
            Err(err) => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[timer] dropped request {} -> {}",
                    err.from.as_str(),
                    err.to.as_str()
                );
                debug_assert!(
                    false,
                    "unreachable transition {:?} -> {:?}",
                    err.from,
                    err.to
                );
                None
            }
        }
    }

    fn transition(
        &mut self,
        cs: CriticalSection<'_>,
        from: Mode,
        to: Mode,
    ) -> Result<Transition, UnreachableTransition> {
        let transition = match Transition::between(from, to) {
            Ok(transition) => transition,
            Err(err) => {
                self.shared.set_requested_mode(cs, from);
                return Err(err);
            }
        };

        for action in transition.exit_actions() {
            self.run(cs, *action);
        }
        for action in transition.enter_actions() {
            self.run(cs, *action);
        }
        self.shared.set_current_mode(cs, to);

        Ok(transition)
    }

    fn run(&mut self, cs: CriticalSection<'_>, action: Action) {
        match action {
            Action::StopTicker => self.ticker.stop(),
            Action::ResetMenuBrightness => self.menu.reset(),
            Action::ArmCountdown => {
                self.ticker.stop();
                let minutes = self.shared.settings(cs).minutes;
                self.shared.set_countdown(cs, TimerState::armed(minutes));
                self.ticker.reset_counter();
                self.ticker.start();
            }
            Action::ResetExpiredAnimation => self.expired.reset(),
        }
    }

    /// Run the active mode once.
    ///
    /// Renders into the frame buffer and returns how long to wait before
    /// the next iteration, or `None` when nothing was rendered.
    pub fn update(&mut self) -> Option<Duration> {
        let snapshot = self.shared.snapshot();
        match snapshot.current {
            Mode::Init => {
                self.shared.request(Mode::Main);
                None
            }
            Mode::Main => {
                self.menu.render(snapshot.settings, &mut self.frame_buffer);
                Some(self.paces.main)
            }
            Mode::Countdown => {
                let frame = CountdownFrame {
                    state: snapshot.countdown,
                    phase: self.ticker.sub_second_phase(),
                };
                self.countdown.render(frame, &mut self.frame_buffer);
                Some(self.paces.countdown)
            }
            Mode::Expired => {
                self.expired.render((), &mut self.frame_buffer);
                Some(self.paces.expired)
            }
        }
    }

    pub fn mode(&self) -> Mode {
        critical_section::with(|cs| self.shared.current_mode(cs))
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    pub fn shared(&self) -> &'a SharedState {
        self.shared
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn menu(&self) -> &MenuEffect {
        &self.menu
    }

    pub fn expired(&self) -> &ExpiredEffect {
        &self.expired
    }
}
