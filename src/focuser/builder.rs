//! Builder pattern for Focuser.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::SystemConfig;
use crate::drive::{PhaseSequencer, StepMode};
use crate::encoder::{QuadratureDecoder, DEFAULT_SETTLE_DELAY_US};
use crate::error::{ConfigError, Error, Result};
use crate::seek::SeekScheduler;

use super::display::DisplaySink;
use super::driver::Focuser;

/// Builder for creating [`Focuser`] instances.
pub struct FocuserBuilder<'a, C1, C2, C3, C4, EA, EB, DELAY, DISP>
where
    C1: OutputPin,
    C2: OutputPin,
    C3: OutputPin,
    C4: OutputPin,
    EA: InputPin,
    EB: InputPin,
    DELAY: DelayNs,
    DISP: DisplaySink,
{
    coil_pins: Option<(C1, C2, C3, C4)>,
    encoder_lines: Option<(EA, EB)>,
    delay: Option<DELAY>,
    display: Option<DISP>,
    scheduler: Option<&'a SeekScheduler>,
    name: Option<heapless::String<32>>,
    steps_per_revolution: u16,
    step_mode: StepMode,
    settle_delay_us: u32,
}

impl<'a, C1, C2, C3, C4, EA, EB, DELAY, DISP> Default
    for FocuserBuilder<'a, C1, C2, C3, C4, EA, EB, DELAY, DISP>
where
    C1: OutputPin,
    C2: OutputPin,
    C3: OutputPin,
    C4: OutputPin,
    EA: InputPin,
    EB: InputPin,
    DELAY: DelayNs,
    DISP: DisplaySink,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, C1, C2, C3, C4, EA, EB, DELAY, DISP>
    FocuserBuilder<'a, C1, C2, C3, C4, EA, EB, DELAY, DISP>
where
    C1: OutputPin,
    C2: OutputPin,
    C3: OutputPin,
    C4: OutputPin,
    EA: InputPin,
    EB: InputPin,
    DELAY: DelayNs,
    DISP: DisplaySink,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            coil_pins: None,
            encoder_lines: None,
            delay: None,
            display: None,
            scheduler: None,
            name: None,
            steps_per_revolution: 48,
            step_mode: StepMode::Full,
            settle_delay_us: DEFAULT_SETTLE_DELAY_US,
        }
    }

    /// Set the four coil lead pins, IN1 through IN4.
    pub fn coil_pins(mut self, in1: C1, in2: C2, in3: C3, in4: C4) -> Self {
        self.coil_pins = Some((in1, in2, in3, in4));
        self
    }

    /// Set the two encoder line pins.
    pub fn encoder_lines(mut self, line_a: EA, line_b: EB) -> Self {
        self.encoder_lines = Some((line_a, line_b));
        self
    }

    /// Set the settling-delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the display observer.
    pub fn display(mut self, display: DISP) -> Self {
        self.display = Some(display);
        self
    }

    /// Set the seek scheduler shared with the timer context.
    pub fn scheduler(mut self, scheduler: &'a SeekScheduler) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Set the focuser name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set steps per revolution in full-step units (must be even).
    pub fn steps_per_revolution(mut self, steps: u16) -> Self {
        self.steps_per_revolution = steps;
        self
    }

    /// Set the drive resolution at startup.
    pub fn step_mode(mut self, mode: StepMode) -> Self {
        self.step_mode = mode;
        self
    }

    /// Set the encoder settling delay in microseconds.
    pub fn settle_delay_us(mut self, delay_us: u32) -> Self {
        self.settle_delay_us = delay_us;
        self
    }

    /// Configure name, geometry, and encoder timing from a [`SystemConfig`].
    pub fn from_config(mut self, config: &SystemConfig) -> Self {
        self.name = Some(config.focuser.name.clone());
        self.steps_per_revolution = config.focuser.steps_per_revolution;
        self.step_mode = config.focuser.step_mode;
        self.settle_delay_us = config.encoder.settle_delay_us;
        self
    }

    /// Build the Focuser.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or the step geometry
    /// is invalid.
    pub fn build(self) -> Result<Focuser<'a, C1, C2, C3, C4, EA, EB, DELAY, DISP>> {
        let coil_pins = self.coil_pins.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("coil_pins are required").unwrap(),
            ))
        })?;

        let encoder_lines = self.encoder_lines.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("encoder_lines are required").unwrap(),
            ))
        })?;

        let delay = self.delay.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("delay is required").unwrap(),
            ))
        })?;

        let display = self.display.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("display is required").unwrap(),
            ))
        })?;

        let scheduler = self.scheduler.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("scheduler is required").unwrap(),
            ))
        })?;

        crate::config::validate_steps_per_revolution(self.steps_per_revolution)?;

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("focuser").unwrap());

        let sequencer = PhaseSequencer::new(self.step_mode, self.steps_per_revolution);
        let decoder = QuadratureDecoder::new(self.settle_delay_us);

        Ok(Focuser::new(
            coil_pins,
            encoder_lines,
            delay,
            display,
            scheduler,
            sequencer,
            decoder,
            name,
        ))
    }
}
