//! Focuser control demo.
//!
//! Demonstrates building a focuser from TOML configuration, jogging it from
//! a simulated encoder, storing a mark, and seeking back to it with the
//! timer tick running on a real background thread.
//!
//! Uses in-process mock hardware; no real pins are touched.

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use focus_drive::{
    ControlEvent, DisplaySink, EventOutcome, FocuserBuilder, PositionReading, SeekScheduler,
    SystemConfig, TickOutcome,
};

/// Shared with the tick thread, like a timer interrupt would be.
static SCHEDULER: SeekScheduler = SeekScheduler::new();

const CONFIG_TOML: &str = r#"
[focuser]
name = "main_focus"
steps_per_revolution = 48
step_mode = "full"

[encoder]
settle_delay_us = 0

[seek]
tick_period_ms = 50
"#;

/// Mock coil lead for demonstration.
struct MockPin {
    label: &'static str,
    state: bool,
}

impl MockPin {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            state: false,
        }
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        if !self.state {
            println!("  [pin] {} -> high", self.label);
        }
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.state {
            println!("  [pin] {} -> low", self.label);
        }
        self.state = false;
        Ok(())
    }
}

/// Mock encoder line whose level the demo scripts between polls.
#[derive(Clone)]
struct MockLine {
    level: Rc<Cell<bool>>,
}

impl MockLine {
    fn new() -> Self {
        Self {
            level: Rc::new(Cell::new(false)),
        }
    }
}

impl embedded_hal::digital::ErrorType for MockLine {
    type Error = Infallible;
}

impl embedded_hal::digital::InputPin for MockLine {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}

/// Mock delay provider for demonstration.
struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        // In real code, this would use a hardware timer
    }
}

/// Console display sink.
struct ConsoleDisplay;

impl DisplaySink for ConsoleDisplay {
    fn position_changed(&mut self, reading: PositionReading) {
        println!(
            "  [lcd] pos {:>2}  angle {:>7.2}",
            reading.position,
            reading.angle.value()
        );
    }

    fn mode_changed(&mut self, reading: PositionReading) {
        println!(
            "  [lcd] mode {:?}, {:.2} deg/step",
            reading.mode,
            reading.angle_per_step.value()
        );
    }

    fn mark_changed(&mut self, _reading: PositionReading, mark: u16) {
        println!("  [lcd] mark stored at {}", mark);
    }

    fn seek_activity(&mut self, highlight: bool) {
        println!(
            "  [lcd] seek highlight {}",
            if highlight { "on" } else { "off" }
        );
    }
}

fn main() {
    println!("=== Focuser Control Demo ===\n");

    let config: SystemConfig = toml::from_str(CONFIG_TOML).expect("demo config should parse");
    focus_drive::validate_config(&config).expect("demo config should validate");
    let tick_period = Duration::from_millis(config.seek.tick_period_ms as u64);

    let line_a = MockLine::new();
    let line_b = MockLine::new();

    let mut focuser = FocuserBuilder::new()
        .from_config(&config)
        .coil_pins(
            MockPin::new("IN1"),
            MockPin::new("IN2"),
            MockPin::new("IN3"),
            MockPin::new("IN4"),
        )
        .encoder_lines(line_a.clone(), line_b.clone())
        .delay(MockDelay)
        .display(ConsoleDisplay)
        .scheduler(&SCHEDULER)
        .build()
        .expect("Failed to build focuser");

    println!("Focuser created: {}", focuser.name());
    focuser.prime_encoder().unwrap();
    focuser.apply_outputs().unwrap();

    // One backward knob detent: rest -> 0b11 -> 0b10 (decoded) -> rest.
    // Only the middle transition is in the decoder's table.
    let detent = |f: &mut FocuserDemo<'static>| {
        line_a.level.set(true);
        line_b.level.set(true);
        f.service(None).unwrap();
        line_a.level.set(false);
        f.service(None).unwrap();
        line_b.level.set(false);
        f.service(None).unwrap();
    };

    // Jog backward eight detents from the simulated knob
    println!("\n=== Manual jog ===");
    for _ in 0..8 {
        detent(&mut focuser);
    }
    println!(
        "Position after jog: {} ({:.2} degrees)",
        focuser.position(),
        focuser.angle().value()
    );

    // Store the mark here, then jog further away
    println!("\n=== Mark ===");
    focuser.handle_event(ControlEvent::MarkRequested).unwrap();
    for _ in 0..8 {
        detent(&mut focuser);
    }

    // Seek back: the tick thread plays the timer interrupt
    println!("\n=== Seek to mark ===");
    let outcome = focuser.handle_event(ControlEvent::SeekRequested).unwrap();
    println!("Planned: {:?}", outcome);

    if let EventOutcome::SeekStarted { ticks, .. } = outcome {
        if ticks > 0 {
            let timer = thread::spawn(move || loop {
                thread::sleep(tick_period);
                match SCHEDULER.tick() {
                    TickOutcome::Stepped => {}
                    TickOutcome::Finished | TickOutcome::Idle => break,
                }
            });

            while SCHEDULER.in_progress() {
                focuser.service(None).unwrap();
                thread::sleep(Duration::from_millis(5));
            }
            timer.join().unwrap();
        }
    }

    println!(
        "\nFinal position: {} ({:.2} degrees), mark at {}",
        focuser.position(),
        focuser.angle().value(),
        focuser.mark()
    );

    // Half-step mode doubles the resolution in place
    println!("\n=== Mode toggle ===");
    focuser
        .handle_event(ControlEvent::ModeToggleRequested)
        .unwrap();
    println!(
        "Position rescaled to {} at {:.2} deg/step",
        focuser.position(),
        focuser.reading().angle_per_step.value()
    );
}

/// Concrete focuser type the demo drives.
type FocuserDemo<'a> = focus_drive::Focuser<
    'a,
    MockPin,
    MockPin,
    MockPin,
    MockPin,
    MockLine,
    MockLine,
    MockDelay,
    ConsoleDisplay,
>;
