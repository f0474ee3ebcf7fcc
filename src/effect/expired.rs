//! Alarm shown once the countdown ran out

use super::Effect;
use crate::color::{Rgb, fill_bottom};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Lit pixel count bouncing between an empty and a full strip
#[derive(Debug, Clone)]
pub struct ExpiredEffect {
    color: Rgb,
    lit: usize,
    direction: Direction,
}

impl ExpiredEffect {
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            lit: 0,
            direction: Direction::Up,
        }
    }

    /// Number of pixels lit by the next render
    pub const fn lit(&self) -> usize {
        self.lit
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Move the lit count one step, turning around at `0` and `max`
    pub fn advance(&mut self, max: usize) {
        match self.direction {
            Direction::Up => {
                if self.lit < max {
                    self.lit += 1;
                }
                if self.lit >= max {
                    self.direction = Direction::Down;
                }
            }
            Direction::Down => {
                self.lit = self.lit.saturating_sub(1);
                if self.lit == 0 {
                    self.direction = Direction::Up;
                }
            }
        }
    }
}

impl Effect for ExpiredEffect {
    type Input = ();

    fn render(&mut self, (): (), leds: &mut [Rgb]) {
        fill_bottom(leds, self.lit, self.color);
        self.advance(leds.len());
    }

    fn reset(&mut self) {
        self.lit = 0;
        self.direction = Direction::Up;
    }
}
