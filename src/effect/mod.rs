//! Per-mode renderers
//!
//! Each renderer turns the state it is given into a full frame. Nothing is
//! accumulated between frames except the renderer's own animation state.

mod countdown;
mod expired;
mod menu;

pub use countdown::{CountdownEffect, CountdownFrame};
pub use expired::{Direction, ExpiredEffect};
pub use menu::MenuEffect;

use crate::color::Rgb;

pub trait Effect {
    /// Per-frame input read from the shared state
    type Input;

    /// Render a single frame, overwriting every pixel
    fn render(&mut self, input: Self::Input, leds: &mut [Rgb]);

    /// Reset animation state to where it starts on mode entry
    fn reset(&mut self) {}
}
