//! Fixed constants and run-time tunables of the timer.

use embassy_time::Duration;

use crate::color::Rgb;

/// Number of addressable pixels on the strip.
///
/// One pixel per minute, so this is also the longest settable countdown.
pub const N_PIXELS: usize = 30;

/// Upper bound of [`crate::TimerSettings::minutes`].
#[allow(clippy::cast_possible_truncation)]
pub const MAX_MINUTES: u8 = N_PIXELS as u8;

/// Minutes selected after power-on.
pub const DEFAULT_MINUTES: u8 = 10;

/// Value the seconds counter restarts from after a minute rolls over.
pub const SECONDS_RESET_VALUE: u8 = 59;

/// Main intensity used for the countdown block and the alert color.
pub const LIGHT_INTENSITY_1: u8 = 50;

/// Dim intensity used for the blue channel of the pulse pixel.
pub const LIGHT_INTENSITY_2: u8 = 20;

/// Lower bound of the menu brightness oscillation.
pub const MENU_BRIGHTNESS_MIN: u8 = 10;

/// Upper bound of the menu brightness oscillation.
pub const MENU_BRIGHTNESS_MAX: u8 = 60;

/// Brightness the menu starts from on every entry into MAIN.
///
/// Odd, so the oscillation starts rising.
pub const MENU_BRIGHTNESS_BASELINE: u8 = 11;

/// Step applied to the menu brightness on every frame.
pub const MENU_BRIGHTNESS_STEP: u8 = 2;

/// Hue of the menu pixels (amber).
pub const MENU_HUE: u8 = 24;

/// CPU clock of the reference board.
pub const CPU_FREQ_HZ: u32 = 8_000_000;

/// Prescaler of the one-second timer.
pub const TICK_PRESCALER: u32 = 256;

/// Compare value (TOP) of the one-second timer at [`CPU_FREQ_HZ`] / [`TICK_PRESCALER`].
#[allow(clippy::cast_possible_truncation)]
pub const TICK_TOP: u16 = ticks_per_second(CPU_FREQ_HZ, TICK_PRESCALER) as u16;

/// Number of prescaled timer counts in one real-time second.
pub const fn ticks_per_second(cpu_hz: u32, prescaler: u32) -> u32 {
    cpu_hz / prescaler
}

/// How long each mode waits between two iterations of the main loop.
#[derive(Debug, Clone, Copy)]
pub struct Paces {
    pub main: Duration,
    pub countdown: Duration,
    pub expired: Duration,
}

impl Default for Paces {
    fn default() -> Self {
        Self {
            main: Duration::from_millis(20),
            countdown: Duration::from_millis(100),
            expired: Duration::from_millis(100),
        }
    }
}

/// Colors used by the renderers
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Hue of the menu pixels, scaled by the oscillating brightness
    pub menu_hue: u8,
    /// Remaining minutes while counting down
    pub countdown: Rgb,
    /// Pulse pixel; the sub-second phase is added to its green channel
    pub pulse: Rgb,
    /// Lit pixels of the expired alarm
    pub alert: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            menu_hue: MENU_HUE,
            countdown: Rgb::new(0, 0, LIGHT_INTENSITY_1),
            pulse: Rgb::new(0, LIGHT_INTENSITY_1, LIGHT_INTENSITY_2),
            alert: Rgb::new(LIGHT_INTENSITY_1, 0, 0),
        }
    }
}

/// Configuration for the timer state machine
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerConfig {
    pub paces: Paces,
    pub palette: Palette,
}
