//! Operating modes and the table of transitions between them.
//!
//! Only five `(from, to)` pairs can ever be requested by the input layer
//! and the tick handler. Each of them is reified as a [`Transition`] with
//! the actions to run when leaving the old mode and entering the new one.

/// Top-level operating state of the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Transient state entered once at boot
    #[default]
    Init,
    /// Idle display, minutes can be adjusted
    Main,
    /// Timer is running
    Countdown,
    /// Timer ran out, alarm animation until acknowledged
    Expired,
}

impl Mode {
    pub const ALL: [Self; 4] = [Self::Init, Self::Main, Self::Countdown, Self::Expired];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Main => "main",
            Self::Countdown => "countdown",
            Self::Expired => "expired",
        }
    }
}

/// Side effect run by the state machine while interrupts are masked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Disable the tick interrupt and halt the counter
    StopTicker,
    /// Restart the menu brightness oscillation from its baseline
    ResetMenuBrightness,
    /// Load the countdown from the settings and restart the tick source
    ArmCountdown,
    /// Restart the alarm animation from zero lit pixels, rising
    ResetExpiredAnimation,
}

/// Error returned for a `(from, to)` pair outside the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnreachableTransition {
    pub from: Mode,
    pub to: Mode,
}

/// One row of the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// INIT -> MAIN
    Boot,
    /// MAIN -> COUNTDOWN
    Start,
    /// COUNTDOWN -> MAIN
    Cancel,
    /// COUNTDOWN -> EXPIRED
    Expire,
    /// EXPIRED -> MAIN
    Acknowledge,
}

impl Transition {
    pub const ALL: [Self; 5] = [
        Self::Boot,
        Self::Start,
        Self::Cancel,
        Self::Expire,
        Self::Acknowledge,
    ];

    /// Look up the transition for a mode change
    pub const fn between(from: Mode, to: Mode) -> Result<Self, UnreachableTransition> {
        Ok(match (from, to) {
            (Mode::Init, Mode::Main) => Self::Boot,
            (Mode::Main, Mode::Countdown) => Self::Start,
            (Mode::Countdown, Mode::Main) => Self::Cancel,
            (Mode::Countdown, Mode::Expired) => Self::Expire,
            (Mode::Expired, Mode::Main) => Self::Acknowledge,
            _ => return Err(UnreachableTransition { from, to }),
        })
    }

    pub const fn source(self) -> Mode {
        match self {
            Self::Boot => Mode::Init,
            Self::Start => Mode::Main,
            Self::Cancel | Self::Expire => Mode::Countdown,
            Self::Acknowledge => Mode::Expired,
        }
    }

    pub const fn target(self) -> Mode {
        match self {
            Self::Boot | Self::Cancel | Self::Acknowledge => Mode::Main,
            Self::Start => Mode::Countdown,
            Self::Expire => Mode::Expired,
        }
    }

    /// Actions run when leaving [`Self::source`]
    pub const fn exit_actions(self) -> &'static [Action] {
        match self {
            Self::Cancel | Self::Expire => &[Action::StopTicker],
            Self::Boot | Self::Start | Self::Acknowledge => &[],
        }
    }

    /// Actions run when entering [`Self::target`]
    pub const fn enter_actions(self) -> &'static [Action] {
        match self {
            Self::Boot | Self::Cancel | Self::Acknowledge => &[Action::ResetMenuBrightness],
            Self::Start => &[Action::ArmCountdown],
            Self::Expire => &[Action::ResetExpiredAnimation],
        }
    }
}
