//! Button debounce and gesture state machine.
//!
//! Provides time-based edge detection with debouncing to prevent multiple
//! triggers from contact bounce, plus two-speed auto-repeat while held.
//!
//! The machine is pure: each call to [`ButtonState::poll`] takes the current
//! millisecond timestamp and the raw electrical level, so it runs unchanged on
//! hardware and in host tests. All timestamp math is wrapping `u32`
//! subtraction, which keeps durations correct across a counter wrap.

use super::events::PressKind;
use crate::config::{ActiveLevel, ButtonConfig, RepeatMode, Timing};

/// Transient event flags for the most recent poll.
///
/// Cleared at the top of every `poll`; a poll reports at most one transition.
#[derive(Clone, Copy, Default)]
struct PollEvent {
    pressed: Option<PressKind>,
    released: bool,
}

/// Debounce and gesture state for a single polled button.
///
/// One instance per physical input. Poll it once per loop iteration with the
/// current time and raw level, then query [`pressed`](Self::pressed),
/// [`released`](Self::released), [`held`](Self::held) and friends for what
/// that poll produced.
#[derive(Clone, Copy)]
pub struct ButtonState {
    /// Which electrical level means pressed. Fixed at construction.
    active: ActiveLevel,
    /// One-shot or repeat mode. Fixed at construction.
    repeat: RepeatMode,
    /// Timing profile. Fixed at construction.
    timing: Timing,
    /// Debounced logical level as of the last confirmed transition.
    is_pressed: bool,
    /// Timestamp (ms) of the last confirmed press/release transition.
    last_transition_ms: u32,
    /// Overloaded: held duration once a release confirms, last repeat-tick
    /// timestamp while held and repeating. `released()` reads it only in the
    /// poll that confirmed the release; `held_for()` never reads it.
    gesture_ms: u32,
    /// What the most recent poll produced.
    event: PollEvent,
}

impl ButtonState {
    /// Create a button with the default timing profile.
    ///
    /// The initial debounced level is "not pressed"; no events are pending.
    pub const fn new(config: ButtonConfig) -> Self {
        Self::with_timing(config, Timing::DEFAULT)
    }

    /// Create a button with an instance-specific timing profile.
    pub const fn with_timing(config: ButtonConfig, timing: Timing) -> Self {
        Self {
            active: config.active,
            repeat: config.repeat,
            timing,
            is_pressed: false,
            last_transition_ms: 0,
            gesture_ms: 0,
            event: PollEvent {
                pressed: None,
                released: false,
            },
        }
    }

    /// Update the button state from one raw sample.
    ///
    /// `now_ms` is a wrapping millisecond counter; `raw_high` is the
    /// instantaneous electrical level of the input line. Returns true if this
    /// poll produced a gesture (press, release, or repeat tick) - the same
    /// value [`changed`](Self::changed) reports until the next poll.
    pub fn poll(&mut self, now_ms: u32, raw_high: bool) -> bool {
        let currently_pressed = raw_high == (self.active == ActiveLevel::High);

        // Clear all the transient flags
        self.event = PollEvent::default();

        // Button state changes (after guard interval)
        if currently_pressed != self.is_pressed
            && now_ms.wrapping_sub(self.last_transition_ms) > self.timing.debounce_ms
        {
            self.is_pressed = currently_pressed;
            if currently_pressed {
                self.event.pressed = Some(PressKind::Press);
            } else {
                self.event.released = true;
                self.gesture_ms = now_ms.wrapping_sub(self.last_transition_ms);
            }
            self.last_transition_ms = now_ms;
            return true;
        }

        // Button is active and repeating. The fast window is checked first and
        // wins permanently once its wait elapses - no fallback to the slow
        // cadence, even between fast ticks.
        if currently_pressed && self.repeat == RepeatMode::Repeat {
            let held = now_ms.wrapping_sub(self.last_transition_ms);
            if held > self.timing.fast_wait_ms {
                if now_ms.wrapping_sub(self.gesture_ms) > self.timing.fast_interval_ms {
                    self.gesture_ms = now_ms;
                    self.event.pressed = Some(PressKind::RepeatFast);
                    return true;
                }
            } else if held > self.timing.slow_wait_ms
                && now_ms.wrapping_sub(self.gesture_ms) > self.timing.slow_interval_ms
            {
                self.gesture_ms = now_ms;
                self.event.pressed = Some(PressKind::RepeatSlow);
                return true;
            }
        }

        false
    }

    /// Which press event the immediately preceding poll produced, if any.
    ///
    /// `Some(PressKind::Press)` for a debounced physical press,
    /// `Some(PressKind::RepeatSlow | RepeatFast)` for synthetic repeats in
    /// repeat mode. `None` if that poll produced no press.
    pub const fn pressed(&self) -> Option<PressKind> {
        self.event.pressed
    }

    /// Whether the debounced level is currently "pressed".
    ///
    /// Independent of whether the preceding poll produced an event.
    pub const fn held(&self) -> bool {
        self.is_pressed
    }

    /// How long the button has been held as of `now_ms`, or 0 if not held.
    ///
    /// Never returns 0 while held (clamped to 1), so 0 always means
    /// "not held".
    pub fn held_for(&self, now_ms: u32) -> u32 {
        if self.is_pressed {
            let held = now_ms.wrapping_sub(self.last_transition_ms);
            if held == 0 { 1 } else { held }
        } else {
            0
        }
    }

    /// The held duration in milliseconds, if the immediately preceding poll
    /// confirmed a release; 0 otherwise.
    ///
    /// Clamped to a minimum of 1 so a confirmed release is never ambiguous
    /// with "no release".
    pub const fn released(&self) -> u32 {
        if self.event.released {
            if self.gesture_ms == 0 { 1 } else { self.gesture_ms }
        } else {
            0
        }
    }

    /// Whether the immediately preceding poll produced any gesture
    /// (press, repeat tick, or release).
    pub const fn changed(&self) -> bool {
        self.event.pressed.is_some() || self.event.released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOW: bool = false;
    const HIGH: bool = true;

    /// Active-low one-shot button with default timing (50 ms debounce).
    fn oneshot_active_low() -> ButtonState {
        ButtonState::new(ButtonConfig::new())
    }

    /// Active-low repeat-mode button with default timing
    /// (slow 1000/1000 ms, fast 5000/250 ms).
    fn repeat_active_low() -> ButtonState {
        ButtonState::new(ButtonConfig {
            repeat: RepeatMode::Repeat,
            ..ButtonConfig::new()
        })
    }

    #[test]
    fn test_initial_state() {
        let state = oneshot_active_low();
        assert_eq!(state.pressed(), None);
        assert_eq!(state.released(), 0);
        assert!(!state.held());
        assert!(!state.changed());
        assert_eq!(state.held_for(1234), 0);
    }

    #[test]
    fn test_press_inside_guard_is_rejected() {
        let mut state = oneshot_active_low();
        // Active-low: LOW reads as pressed, but the guard interval measured
        // from the initial state has not elapsed yet.
        assert!(!state.poll(0, LOW));
        assert_eq!(state.pressed(), None);
        assert!(!state.held());
        // HIGH reads as not pressed, same as the debounced level.
        assert!(!state.poll(10, HIGH));
        assert_eq!(state.pressed(), None);
        assert!(!state.poll(60, HIGH));
        assert_eq!(state.pressed(), None);
    }

    #[test]
    fn test_press_reported_exactly_once() {
        let mut state = oneshot_active_low();
        assert!(state.poll(60, LOW));
        assert_eq!(state.pressed(), Some(PressKind::Press));
        assert!(state.changed());
        assert!(state.held());

        // Still held on the next poll, but no new event.
        assert!(!state.poll(70, LOW));
        assert_eq!(state.pressed(), None);
        assert!(!state.changed());
        assert!(state.held());
    }

    #[test]
    fn test_bounce_after_press_is_rejected() {
        let mut state = oneshot_active_low();
        assert!(state.poll(100, LOW));
        assert!(state.held());

        // Contact bounce: raw level flaps inside the guard interval.
        assert!(!state.poll(110, HIGH));
        assert!(!state.poll(120, LOW));
        assert!(!state.poll(130, HIGH));
        assert!(state.held());
        assert_eq!(state.pressed(), None);
        assert_eq!(state.released(), 0);
    }

    #[test]
    fn test_bounces_before_stable_press_report_once() {
        let mut state = oneshot_active_low();
        // Flapping inside the guard window measured from t=0.
        assert!(!state.poll(10, LOW));
        assert!(!state.poll(20, HIGH));
        assert!(!state.poll(30, LOW));
        assert!(!state.poll(40, HIGH));
        // First stable sample past the guard reports the press, once.
        assert!(state.poll(90, LOW));
        assert_eq!(state.pressed(), Some(PressKind::Press));
        assert!(!state.poll(95, LOW));
        assert_eq!(state.pressed(), None);
    }

    #[test]
    fn test_release_reports_held_duration() {
        let mut state = oneshot_active_low();
        assert!(state.poll(60, LOW));
        assert!(!state.poll(500, LOW));

        assert!(state.poll(1000, HIGH));
        assert_eq!(state.pressed(), None);
        assert_eq!(state.released(), 940);
        assert!(state.changed());
        assert!(!state.held());

        // Only the poll that confirmed the release reports it.
        assert!(!state.poll(1010, HIGH));
        assert_eq!(state.released(), 0);
        assert!(!state.changed());
    }

    #[test]
    fn test_held_for_never_zero_while_held() {
        let mut state = oneshot_active_low();
        assert!(state.poll(60, LOW));
        // Same-millisecond query clamps to 1 instead of reporting 0.
        assert_eq!(state.held_for(60), 1);
        assert_eq!(state.held_for(61), 1);
        assert_eq!(state.held_for(1000), 940);

        assert!(state.poll(1111, HIGH));
        assert_eq!(state.held_for(1111), 0);
        assert_eq!(state.held_for(2000), 0);
    }

    #[test]
    fn test_oneshot_never_repeats() {
        let mut state = oneshot_active_low();
        assert!(state.poll(60, LOW));
        for ts in [1061, 2062, 5061, 10_000, 60_000] {
            assert!(!state.poll(ts, LOW));
            assert_eq!(state.pressed(), None);
        }
        assert!(state.held());
    }

    #[test]
    fn test_repeat_slow_then_fast_cadence() {
        let mut state = repeat_active_low();
        assert!(state.poll(60, LOW));
        assert_eq!(state.pressed(), Some(PressKind::Press));

        // Slow wait has not elapsed yet.
        assert!(!state.poll(1000, LOW));

        // First slow tick once held past the slow wait.
        assert!(state.poll(1061, LOW));
        assert_eq!(state.pressed(), Some(PressKind::RepeatSlow));

        // Slow interval not yet elapsed since the tick.
        assert!(!state.poll(1100, LOW));
        assert_eq!(state.pressed(), None);

        // Next slow tick a full interval later.
        assert!(state.poll(2062, LOW));
        assert_eq!(state.pressed(), Some(PressKind::RepeatSlow));

        // Held past the fast wait (counted from the press): fast cadence.
        assert!(state.poll(5061, LOW));
        assert_eq!(state.pressed(), Some(PressKind::RepeatFast));
        assert!(state.poll(5312, LOW));
        assert_eq!(state.pressed(), Some(PressKind::RepeatFast));
    }

    #[test]
    fn test_repeat_never_reverts_to_slow() {
        let mut state = repeat_active_low();
        assert!(state.poll(60, LOW));
        assert!(state.poll(5061, LOW));
        assert_eq!(state.pressed(), Some(PressKind::RepeatFast));

        // Between fast ticks nothing fires - in particular no slow tick,
        // even though a full slow interval has elapsed since the last one.
        assert!(!state.poll(5200, LOW));
        assert_eq!(state.pressed(), None);
        assert!(state.poll(5312, LOW));
        assert_eq!(state.pressed(), Some(PressKind::RepeatFast));
    }

    #[test]
    fn test_repeat_release_still_reports_duration() {
        let mut state = repeat_active_low();
        assert!(state.poll(60, LOW));
        assert!(state.poll(1061, LOW));
        assert!(state.poll(2062, LOW));

        // Repeat ticks do not move the transition timestamp, so the release
        // duration covers the whole hold.
        assert!(state.poll(3000, HIGH));
        assert_eq!(state.released(), 2940);
        assert!(!state.held());
    }

    #[test]
    fn test_repeat_skips_bounce_sample() {
        let mut state = repeat_active_low();
        assert!(state.poll(60, LOW));
        // A transient HIGH sample inside the guard interval: not a release,
        // and the repeat check only runs on pressed samples.
        assert!(!state.poll(100, HIGH));
        assert_eq!(state.pressed(), None);
        assert!(state.held());
        // The cadence is unaffected once the level is stable again.
        assert!(!state.poll(105, LOW));
        assert!(state.poll(1061, LOW));
        assert_eq!(state.pressed(), Some(PressKind::RepeatSlow));
    }

    #[test]
    fn test_active_high_polarity() {
        let mut state = ButtonState::new(ButtonConfig {
            active: ActiveLevel::High,
            ..ButtonConfig::new()
        });
        // LOW is idle for an active-high button.
        assert!(!state.poll(60, LOW));
        assert!(!state.held());

        assert!(state.poll(120, HIGH));
        assert_eq!(state.pressed(), Some(PressKind::Press));
        assert!(state.held());

        assert!(state.poll(400, LOW));
        assert_eq!(state.released(), 280);
    }

    #[test]
    fn test_timestamp_wraparound() {
        let mut state = oneshot_active_low();
        // Confirm a press, then a release just below the wrap point.
        assert!(state.poll(100, LOW));
        assert!(state.poll(u32::MAX - 100, HIGH));
        assert_eq!(state.released(), u32::MAX - 200);

        // The next press timestamp has wrapped past 0; the elapsed time
        // since the release is still computed correctly (141 ms).
        assert!(state.poll(40, LOW));
        assert_eq!(state.pressed(), Some(PressKind::Press));
        assert_eq!(state.held_for(300), 260);

        assert!(state.poll(300, HIGH));
        assert_eq!(state.released(), 260);
    }

    #[test]
    fn test_poll_return_matches_changed() {
        let mut state = repeat_active_low();
        for (ts, raw) in [
            (0, LOW),
            (60, LOW),
            (70, LOW),
            (1061, LOW),
            (1100, LOW),
            (5061, LOW),
            (5312, LOW),
            (6000, HIGH),
            (6010, HIGH),
        ] {
            let reported = state.poll(ts, raw);
            assert_eq!(reported, state.changed(), "mismatch at t={ts}");
        }
    }

    #[test]
    fn test_custom_timing_profile() {
        let timing = Timing {
            debounce_ms: 10,
            slow_wait_ms: 100,
            slow_interval_ms: 50,
            fast_wait_ms: 300,
            fast_interval_ms: 20,
        };
        let mut state = ButtonState::with_timing(
            ButtonConfig {
                repeat: RepeatMode::Repeat,
                ..ButtonConfig::new()
            },
            timing,
        );
        assert!(state.poll(20, LOW));
        assert_eq!(state.pressed(), Some(PressKind::Press));
        assert!(state.poll(121, LOW));
        assert_eq!(state.pressed(), Some(PressKind::RepeatSlow));
        assert!(state.poll(321, LOW));
        assert_eq!(state.pressed(), Some(PressKind::RepeatFast));
    }
}
