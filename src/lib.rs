//! Button gestures library - debounce and gesture detection for polled inputs.
//!
//! This library contains the core logic that can be tested on the host machine.
//! The demo binary (`main.rs`) uses this library and adds the embedded-specific
//! code (GPIO and clock bindings for the RP2350).
//!
//! A [`ButtonState`] turns a stream of `(timestamp, raw level)` samples into
//! clean gestures: a debounced press, a debounced release with its held
//! duration, and (in repeat mode) synthetic repeat presses at a slow-then-fast
//! cadence while the button stays held.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]

// === Pure logic modules (testable on host, no ARM dependencies) ===

// Configuration
pub mod config;

// Clock/level capability seams and the self-sampling wrapper
pub mod io;

// Bounded journal of recent gestures
pub mod journal;

// The debounce/gesture state machine
pub mod state;

// Re-export at top level for convenient imports
pub use config::{ActiveLevel, ButtonConfig, PullHint, RepeatMode, Timing};
pub use io::{Button, LevelSource, MillisClock};
pub use journal::{GestureJournal, GestureRecord};
pub use state::{ButtonState, GestureEvent, PressKind};
