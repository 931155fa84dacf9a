//! Capability seams between the state machine and its environment.
//!
//! [`ButtonState`](crate::ButtonState) itself never touches hardware - the
//! caller feeds it timestamps and raw levels. [`Button`] packages a state
//! machine together with a [`LevelSource`] and a [`MillisClock`] so the main
//! loop can call `poll()` with no arguments; the demo binary binds these
//! traits to a GPIO input and the embassy clock, tests bind deterministic
//! fakes.

use crate::config::{ButtonConfig, Timing};
use crate::state::{ButtonState, PressKind};

/// Instantaneous raw level of an input line.
pub trait LevelSource {
    /// True if the line currently reads electrically high.
    fn level_high(&mut self) -> bool;
}

/// Millisecond counter for debounce and repeat timing.
pub trait MillisClock {
    /// Milliseconds since an arbitrary epoch. Expected to wrap at `u32::MAX`;
    /// the state machine's wrapping arithmetic handles the rollover.
    fn now_ms(&mut self) -> u32;
}

/// A button bound to its level source and clock.
///
/// Sampling happens inside [`poll`](Self::poll) and
/// [`held_for`](Self::held_for); every other query is a pure read of the
/// state from the preceding poll.
pub struct Button<S, C> {
    state: ButtonState,
    source: S,
    clock: C,
}

impl<S: LevelSource, C: MillisClock> Button<S, C> {
    /// Bind a button with the default timing profile.
    pub const fn new(config: ButtonConfig, source: S, clock: C) -> Self {
        Self {
            state: ButtonState::new(config),
            source,
            clock,
        }
    }

    /// Bind a button with an instance-specific timing profile.
    pub const fn with_timing(config: ButtonConfig, timing: Timing, source: S, clock: C) -> Self {
        Self {
            state: ButtonState::with_timing(config, timing),
            source,
            clock,
        }
    }

    /// Sample the clock and level source and update the state machine.
    ///
    /// Returns true if this poll produced a gesture.
    pub fn poll(&mut self) -> bool {
        let now_ms = self.clock.now_ms();
        let raw_high = self.source.level_high();
        self.state.poll(now_ms, raw_high)
    }

    /// How long the button has been held as of now, or 0 if not held.
    pub fn held_for(&mut self) -> u32 {
        let now_ms = self.clock.now_ms();
        self.state.held_for(now_ms)
    }

    /// Which press event the preceding poll produced, if any.
    pub const fn pressed(&self) -> Option<PressKind> {
        self.state.pressed()
    }

    /// Whether the debounced level is currently "pressed".
    pub const fn held(&self) -> bool {
        self.state.held()
    }

    /// Held duration if the preceding poll confirmed a release; 0 otherwise.
    pub const fn released(&self) -> u32 {
        self.state.released()
    }

    /// Whether the preceding poll produced any gesture.
    pub const fn changed(&self) -> bool {
        self.state.changed()
    }

    /// The inner state machine, for callers that also drive it manually.
    pub const fn state(&self) -> &ButtonState {
        &self.state
    }
}
