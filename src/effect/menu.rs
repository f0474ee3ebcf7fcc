//! Idle display shown while the minutes are being set

use super::Effect;
use crate::color::{Rgb, fill_bottom, hue_at};
use crate::config::{
    MENU_BRIGHTNESS_BASELINE, MENU_BRIGHTNESS_MAX, MENU_BRIGHTNESS_MIN, MENU_BRIGHTNESS_STEP,
};
use crate::countdown::TimerSettings;

/// Selected minutes drawn in a slowly breathing hue.
///
/// The brightness ping-pongs between [`MENU_BRIGHTNESS_MIN`] and
/// [`MENU_BRIGHTNESS_MAX`]. Its parity encodes the direction: odd values
/// rise, even values fall.
#[derive(Debug, Clone)]
pub struct MenuEffect {
    hue: u8,
    brightness: u8,
}

impl MenuEffect {
    pub const fn new(hue: u8) -> Self {
        Self {
            hue,
            brightness: MENU_BRIGHTNESS_BASELINE,
        }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Advance the brightness by one step
    pub fn step(&mut self) {
        self.brightness = next_brightness(self.brightness);
    }
}

const fn next_brightness(current: u8) -> u8 {
    if current % 2 == 1 {
        let next = current.saturating_add(MENU_BRIGHTNESS_STEP);
        if next > MENU_BRIGHTNESS_MAX {
            MENU_BRIGHTNESS_MAX
        } else {
            next
        }
    } else if current < MENU_BRIGHTNESS_MIN + MENU_BRIGHTNESS_STEP {
        MENU_BRIGHTNESS_MIN + 1
    } else {
        current - MENU_BRIGHTNESS_STEP
    }
}

impl Effect for MenuEffect {
    type Input = TimerSettings;

    fn render(&mut self, settings: TimerSettings, leds: &mut [Rgb]) {
        self.step();
        let color = hue_at(self.hue, self.brightness);
        fill_bottom(leds, usize::from(settings.minutes), color);
    }

    fn reset(&mut self) {
        self.brightness = MENU_BRIGHTNESS_BASELINE;
    }
}
