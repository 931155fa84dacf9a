//! Debounce and gesture state for a single polled button.
//!
//! - `button`: the [`ButtonState`] poll state machine (debounce guard, two-speed repeat)
//! - `events`: gesture event types produced by polling

mod button;
mod events;

pub use button::ButtonState;
pub use events::{GestureEvent, PressKind};
