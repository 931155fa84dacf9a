//! Button configuration.
//!
//! - [`ButtonConfig`]: construction-time options (polarity, repeat mode, pull hint)
//! - [`Timing`]: debounce and repeat timing profile, per instance
//!
//! Timing is plain data carried by each [`ButtonState`](crate::ButtonState),
//! so two buttons on the same board can use different profiles.

// =============================================================================
// Default Timing Constants
// =============================================================================

/// Guard interval after a level change before it counts as a real transition
/// (milliseconds).
pub const DEBOUNCE_MS: u32 = 50;

/// How long a button must stay held before slow repeats begin (milliseconds).
pub const SLOW_WAIT_MS: u32 = 1000;

/// Spacing between slow repeats (milliseconds). Keep below 32768 ms so the
/// interval comparisons stay well clear of the wrap window.
pub const SLOW_INTERVAL_MS: u32 = 1000;

/// How long a button must stay held before repeats switch to the fast cadence
/// (milliseconds). Counted from the initial press, so it should be larger than
/// [`SLOW_WAIT_MS`] unless only the fast cadence is wanted.
pub const FAST_WAIT_MS: u32 = SLOW_WAIT_MS + SLOW_INTERVAL_MS * 4;

/// Spacing between fast repeats (milliseconds). Keep below 32768 ms.
pub const FAST_INTERVAL_MS: u32 = 250;

// =============================================================================
// Construction-Time Options
// =============================================================================

/// Which electrical level counts as logically "pressed".
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ActiveLevel {
    /// A high level means pressed (button to VCC, external or no pull-down).
    High,
    /// A low level means pressed (button to ground, pull-up resistor).
    #[default]
    Low,
}

/// Whether a held button generates synthetic repeat presses.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RepeatMode {
    /// Report press/release transitions only.
    #[default]
    OneShot,
    /// Also emit repeat presses at a slow-then-fast cadence while held.
    Repeat,
}

/// Pull resistor to apply when configuring the physical input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PullHint {
    /// No internal pull resistor.
    None,
    /// Internal pull-up.
    Up,
    /// Internal pull-down.
    Down,
}

/// Construction-time options for one button.
///
/// The default matches the common wiring: one-shot, active-low, with the pull
/// resistor derived from the polarity (active-low gets a pull-up, active-high
/// gets no pull).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ButtonConfig {
    /// Which electrical level means pressed.
    pub active: ActiveLevel,
    /// One-shot or repeat mode.
    pub repeat: RepeatMode,
    /// Explicit pull resistor override; `None` derives it from `active`.
    pub pull: Option<PullHint>,
}

impl ButtonConfig {
    /// One-shot, active-low, derived pull-up.
    pub const fn new() -> Self {
        Self {
            active: ActiveLevel::Low,
            repeat: RepeatMode::OneShot,
            pull: None,
        }
    }

    /// The pull resistor the physical input should be configured with.
    ///
    /// Explicit hints win; otherwise active-low implies a pull-up and
    /// active-high implies no pull.
    pub const fn resolved_pull(&self) -> PullHint {
        match self.pull {
            Some(hint) => hint,
            None => match self.active {
                ActiveLevel::Low => PullHint::Up,
                ActiveLevel::High => PullHint::None,
            },
        }
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Timing Profile
// =============================================================================

/// Debounce and repeat timing for one button, in milliseconds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Timing {
    /// Guard interval after a level change before it counts as a transition.
    pub debounce_ms: u32,
    /// Hold time before slow repeats begin.
    pub slow_wait_ms: u32,
    /// Spacing between slow repeats.
    pub slow_interval_ms: u32,
    /// Hold time (from the initial press) before repeats switch to fast.
    pub fast_wait_ms: u32,
    /// Spacing between fast repeats.
    pub fast_interval_ms: u32,
}

impl Timing {
    /// Default profile: 50 ms debounce, slow repeats after 1 s at 1 Hz,
    /// fast repeats after 5 s at 4 Hz.
    pub const DEFAULT: Self = Self {
        debounce_ms: DEBOUNCE_MS,
        slow_wait_ms: SLOW_WAIT_MS,
        slow_interval_ms: SLOW_INTERVAL_MS,
        fast_wait_ms: FAST_WAIT_MS,
        fast_interval_ms: FAST_INTERVAL_MS,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}
