//! Shared mocks for the integration tests

#![allow(dead_code)] // Each test file uses a different subset

use core::cell::Cell;

use myrtio_light_timer::{
    FrameBuffer, Mode, OutputDriver, Rgb, SharedState, TickSource, TimerConfig, TimerMachine,
};

/// Tick source that only fires when told to, and only while started
#[derive(Default)]
pub struct MockTicker {
    running: Cell<bool>,
    counter: Cell<u16>,
    starts: Cell<u32>,
    stops: Cell<u32>,
    resets: Cell<u32>,
}

impl MockTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn starts(&self) -> u32 {
        self.starts.get()
    }

    pub fn stops(&self) -> u32 {
        self.stops.get()
    }

    pub fn resets(&self) -> u32 {
        self.resets.get()
    }

    pub fn set_counter(&self, value: u16) {
        self.counter.set(value);
    }

    /// Deliver one tick interrupt if the interrupt is enabled.
    ///
    /// Returns `true` if the handler ran.
    pub fn fire(&self, shared: &SharedState) -> bool {
        if !self.running.get() {
            return false;
        }
        shared.on_tick();
        true
    }

    pub fn fire_n(&self, shared: &SharedState, n: usize) {
        for _ in 0..n {
            self.fire(shared);
        }
    }
}

impl TickSource for &MockTicker {
    fn start(&mut self) {
        self.running.set(true);
        self.starts.set(self.starts.get() + 1);
    }

    fn stop(&mut self) {
        self.running.set(false);
        self.stops.set(self.stops.get() + 1);
    }

    fn reset_counter(&mut self) {
        self.counter.set(0);
        self.resets.set(self.resets.get() + 1);
    }

    fn counter(&self) -> u16 {
        self.counter.get()
    }
}

/// Output driver keeping every flushed frame
#[derive(Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Rgb>>,
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}

pub fn machine<'a>(shared: &'a SharedState, ticker: &'a MockTicker) -> TimerMachine<'a, &'a MockTicker> {
    TimerMachine::new(shared, ticker, &TimerConfig::default())
}

/// Boot the machine through INIT into MAIN
pub fn boot(machine: &mut TimerMachine<'_, &MockTicker>) {
    machine.poll();
    assert_eq!(machine.update(), None);
    machine.poll();
    assert_eq!(machine.mode(), Mode::Main);
}

/// Press and release the start/stop button
pub fn press_start(shared: &SharedState) {
    shared.on_start_stop(true);
    shared.on_start_stop(false);
}

/// Number of non-black pixels
pub fn lit_count(frame: &[Rgb]) -> usize {
    frame.iter().filter(|led| **led != Rgb::default()).count()
}

pub fn lit_frame(frame: &FrameBuffer) -> usize {
    lit_count(frame)
}
