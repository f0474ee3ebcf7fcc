use smart_leds::hsv::Hsv as HSV;
use smart_leds::{RGB8, hsv::hsv2rgb};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Convert a fully saturated hue at the given value to RGB
pub fn hue_at(hue: u8, val: u8) -> Rgb {
    hsv2rgb(Hsv { hue, sat: 255, val })
}

/// Light the bottom `count` pixels with `color` and clear the rest.
///
/// The bottom of the strip is its tail, so pixel `len - 1` is the first
/// one lit. `count` is clamped to the strip length.
pub fn fill_bottom(leds: &mut [Rgb], count: usize, color: Rgb) {
    let first_lit = leds.len().saturating_sub(count);
    for (index, led) in leds.iter_mut().enumerate() {
        *led = if index >= first_lit { color } else { BLACK };
    }
}

/// Index of the pixel directly above the bottom `count` pixels, if any.
pub const fn above_bottom(len: usize, count: usize) -> Option<usize> {
    if count >= len {
        return None;
    }
    Some(len - count - 1)
}
