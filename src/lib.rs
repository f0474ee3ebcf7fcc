#![no_std]

pub mod color;
pub mod config;
pub mod countdown;
pub mod effect;
pub mod frame_scheduler;
pub mod input;
pub mod machine;
pub mod mode;
pub mod output;
pub mod shared;
pub mod tick;

pub use config::{N_PIXELS, Paces, Palette, TimerConfig};
pub use countdown::{TickOutcome, TimerSettings, TimerState};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use input::Button;
pub use machine::{FrameBuffer, TimerMachine};
pub use mode::{Action, Mode, Transition, UnreachableTransition};
pub use output::SmartLedsOutput;
pub use shared::{SharedState, Snapshot};
pub use tick::TickSource;

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver trait
///
/// Implement this trait for the board's strip driver. `write` must block
/// until the whole buffer has been shifted out.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
