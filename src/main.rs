//! Button gesture demo firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Polls two buttons through the gesture state machine and reports every
//! press, repeat tick, and release over defmt. The onboard LED flashes
//! briefly on each gesture.
//!
//! # Button Controls
//!
//! - **SELECT** (GPIO 12): one-shot - a single press event per physical press
//! - **SCROLL** (GPIO 13): repeat mode - holding emits repeat presses,
//!   slow at first, then fast (like a keyboard key held down)
//!
//! Both buttons are wired active-low; the internal pull-up is derived from
//! the button configuration.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]

#[cfg(target_arch = "arm")]
mod demo {
    use defmt::info;
    use embassy_executor::Spawner;
    use embassy_rp::gpio::{Input, Level, Output, Pull};
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use embassy_sync::channel::Channel;
    use embassy_time::{Duration, Instant, Timer};
    use {defmt_rtt as _, panic_probe as _};

    use button_gestures::{
        Button,
        ButtonConfig,
        ButtonState,
        GestureEvent,
        GestureJournal,
        GestureRecord,
        LevelSource,
        MillisClock,
        PressKind,
        PullHint,
        RepeatMode,
    };

    /// How often the main loop samples the buttons.
    const POLL_INTERVAL: Duration = Duration::from_millis(5);

    /// How often the journal summary is logged.
    const JOURNAL_LOG_INTERVAL: Duration = Duration::from_secs(10);

    /// Gestures handed to the LED task.
    static GESTURES: Channel<CriticalSectionRawMutex, GestureRecord, 8> = Channel::new();

    // =========================================================================
    // Hardware Bindings
    // =========================================================================

    /// GPIO-backed level source.
    struct PinLevel(Input<'static>);

    impl LevelSource for PinLevel {
        fn level_high(&mut self) -> bool {
            self.0.is_high()
        }
    }

    /// Millisecond clock backed by the embassy time driver.
    ///
    /// Truncating to `u32` wraps after ~49.7 days; the state machine's
    /// wrapping arithmetic is built for that.
    struct BootClock;

    impl MillisClock for BootClock {
        fn now_ms(&mut self) -> u32 {
            Instant::now().as_millis() as u32
        }
    }

    /// Map the configured pull hint onto the RP2350 pad pull.
    const fn pull_for(hint: PullHint) -> Pull {
        match hint {
            PullHint::None => Pull::None,
            PullHint::Up => Pull::Up,
            PullHint::Down => Pull::Down,
        }
    }

    const fn kind_label(kind: PressKind) -> &'static str {
        match kind {
            PressKind::Press => "press",
            PressKind::RepeatSlow => "repeat (slow)",
            PressKind::RepeatFast => "repeat (fast)",
        }
    }

    // =========================================================================
    // Gesture LED Task
    // =========================================================================

    /// Flashes the onboard LED on every gesture: a short blink for presses
    /// and repeat ticks, a longer one for releases.
    #[embassy_executor::task]
    async fn gesture_led_task(mut led: Output<'static>) {
        info!("Gesture LED task started");

        loop {
            let record = GESTURES.receive().await;
            let flash = match record.event {
                GestureEvent::Pressed(_) => Duration::from_millis(30),
                GestureEvent::Released { .. } => Duration::from_millis(120),
            };
            led.set_high();
            Timer::after(flash).await;
            led.set_low();
        }
    }

    // =========================================================================
    // Main Poll Loop
    // =========================================================================

    /// Log and journal the gesture the preceding poll produced.
    fn report(name: &str, state: &ButtonState, journal: &mut GestureJournal) {
        let Some(event) = GestureEvent::from_state(state) else {
            return;
        };
        let at_ms = Instant::now().as_millis() as u32;
        match event {
            GestureEvent::Pressed(kind) => {
                info!("{=str}: {=str}", name, kind_label(kind));
            }
            GestureEvent::Released { held_ms } => {
                info!("{=str}: released after {=u32} ms", name, held_ms);
            }
        }
        journal.record(at_ms, event);
        // The LED task only needs the latest gestures; drop on overflow.
        let _ = GESTURES.try_send(GestureRecord { at_ms, event });
    }

    #[embassy_executor::main]
    async fn main(spawner: Spawner) {
        let p = embassy_rp::init(Default::default());
        info!("Button gesture demo starting");

        // SELECT: one-shot, active-low. SCROLL: repeat mode, active-low.
        let select_config = ButtonConfig::new();
        let scroll_config = ButtonConfig {
            repeat: RepeatMode::Repeat,
            ..ButtonConfig::new()
        };

        // Configure the physical inputs once, with the pull each config implies
        let select_pin = Input::new(p.PIN_12, pull_for(select_config.resolved_pull()));
        let scroll_pin = Input::new(p.PIN_13, pull_for(scroll_config.resolved_pull()));

        let mut select = Button::new(select_config, PinLevel(select_pin), BootClock);
        let mut scroll = Button::new(scroll_config, PinLevel(scroll_pin), BootClock);
        info!("Buttons initialized!");

        // Onboard LED for gesture feedback
        let led = Output::new(p.PIN_25, Level::Low);
        spawner.spawn(gesture_led_task(led)).unwrap();
        info!("Gesture LED task spawned");

        let mut journal = GestureJournal::new();
        let mut last_journal_log = Instant::now();

        loop {
            if select.poll() {
                report("select", select.state(), &mut journal);
            }
            if scroll.poll() {
                report("scroll", scroll.state(), &mut journal);
            }

            // Periodic journal summary
            if last_journal_log.elapsed() >= JOURNAL_LOG_INTERVAL {
                last_journal_log = Instant::now();
                if let Some(latest) = journal.latest() {
                    info!(
                        "journal: {=usize} gestures, latest at {=u32} ms",
                        journal.len(),
                        latest.at_ms
                    );
                }
            }

            Timer::after(POLL_INTERVAL).await;
        }
    }
}

// The demo only targets the RP2350; give host builds (cargo test/check on the
// development machine) an empty entry point.
#[cfg(not(target_arch = "arm"))]
fn main() {}
