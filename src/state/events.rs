//! Gesture event types produced by polling a button.

use super::button::ButtonState;

/// Which kind of press event a poll produced.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PressKind {
    /// A debounced physical press.
    Press,
    /// A synthetic press on the slow repeat cadence.
    RepeatSlow,
    /// A synthetic press on the fast repeat cadence.
    RepeatFast,
}

/// A gesture reported by a single poll: a press (physical or repeat) or a
/// release carrying the held duration.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GestureEvent {
    /// The button was pressed this poll (see [`PressKind`] for which kind).
    Pressed(PressKind),
    /// The button was released this poll after being held for `held_ms`.
    Released {
        /// Held duration in milliseconds, always at least 1.
        held_ms: u32,
    },
}

impl GestureEvent {
    /// The gesture the immediately preceding poll produced, if any.
    ///
    /// A poll reports at most one transition, so press and release never
    /// occur together.
    pub fn from_state(state: &ButtonState) -> Option<Self> {
        if let Some(kind) = state.pressed() {
            return Some(Self::Pressed(kind));
        }
        let held_ms = state.released();
        if held_ms != 0 {
            return Some(Self::Released { held_ms });
        }
        None
    }
}
