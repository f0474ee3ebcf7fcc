//! Running countdown

use super::Effect;
use crate::color::{Rgb, above_bottom, fill_bottom};
use crate::countdown::TimerState;

/// Input of [`CountdownEffect`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownFrame {
    pub state: TimerState,
    /// Sub-second phase read from the tick source
    pub phase: u8,
}

/// One pixel per remaining minute plus a pulse pixel above them.
///
/// The green channel of the pulse pixel follows the sub-second phase, so
/// it brightens during each second and drops back on every tick.
#[derive(Debug, Clone)]
pub struct CountdownEffect {
    color: Rgb,
    pulse: Rgb,
}

impl CountdownEffect {
    pub const fn new(color: Rgb, pulse: Rgb) -> Self {
        Self { color, pulse }
    }
}

impl Effect for CountdownEffect {
    type Input = CountdownFrame;

    fn render(&mut self, frame: CountdownFrame, leds: &mut [Rgb]) {
        let minutes = usize::from(frame.state.minutes_remaining);
        fill_bottom(leds, minutes, self.color);

        if let Some(index) = above_bottom(leds.len(), minutes) {
            leds[index] = Rgb::new(
                self.pulse.r,
                self.pulse.g.saturating_add(frame.phase),
                self.pulse.b,
            );
        }
    }
}
