//! Focuser driver.
//!
//! Ties the phase sequencer, quadrature decoder, and seek scheduler to
//! hardware, generic over embedded-hal 1.0 pin types.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::units::Degrees;
use crate::drive::{CoilPattern, Direction, PhaseSequencer, StepMode, StepOutcome};
use crate::encoder::QuadratureDecoder;
use crate::error::{DriverError, Result};
use crate::seek::{SeekPlan, SeekScheduler};

use super::display::{DisplaySink, PositionReading};
use super::events::ControlEvent;

/// Outcome of a handled control event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The mark was stored at the given position.
    MarkStored(u16),
    /// A seek was planned and handed to the scheduler.
    ///
    /// The host arms its periodic timer only when `ticks > 0`; seeking from
    /// the mark itself plans zero ticks and arms nothing.
    SeekStarted {
        /// Scheduler counts to consume.
        ticks: u16,
        /// Travel direction.
        direction: Direction,
    },
    /// The drive resolution was switched.
    ModeChanged(StepMode),
}

/// Focuser driver.
///
/// Generic over:
/// - `C1`..`C4`: coil lead pins IN1 through IN4 (must implement `OutputPin`)
/// - `EA`, `EB`: encoder line pins (must implement `InputPin`)
/// - `DELAY`: settling-delay provider (must implement `DelayNs`)
/// - `DISP`: display observer (must implement [`DisplaySink`])
///
/// The seek scheduler is borrowed so the host can share it with a periodic
/// timer context; everything else is owned. All sequencer and mark mutation
/// happens on the caller's (main loop) context.
///
/// Call [`prime_encoder`](Self::prime_encoder) and
/// [`apply_outputs`](Self::apply_outputs) once at startup, then run
/// [`service`](Self::service) each main-loop iteration.
pub struct Focuser<'a, C1, C2, C3, C4, EA, EB, DELAY, DISP>
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
    coil1: C1,
    coil2: C2,
    coil3: C3,
    coil4: C4,
    line_a: EA,
    line_b: EB,
    delay: DELAY,
    display: DISP,
    sequencer: PhaseSequencer,
    decoder: QuadratureDecoder,
    scheduler: &'a SeekScheduler,
    mark: u16,
    seek_highlight: bool,
    name: heapless::String<32>,
}

impl<'a, C1, C2, C3, C4, EA, EB, DELAY, DISP> Focuser<'a, C1, C2, C3, C4, EA, EB, DELAY, DISP>
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
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        coil_pins: (C1, C2, C3, C4),
        encoder_lines: (EA, EB),
        delay: DELAY,
        display: DISP,
        scheduler: &'a SeekScheduler,
        sequencer: PhaseSequencer,
        decoder: QuadratureDecoder,
        name: heapless::String<32>,
    ) -> Self {
        let (coil1, coil2, coil3, coil4) = coil_pins;
        let (line_a, line_b) = encoder_lines;
        Self {
            coil1,
            coil2,
            coil3,
            coil4,
            line_a,
            line_b,
            delay,
            display,
            sequencer,
            decoder,
            scheduler,
            mark: 0,
            seek_highlight: false,
            name,
        }
    }

    /// Get the focuser name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Current absolute position in the active mode's units.
    #[inline]
    pub fn position(&self) -> u16 {
        self.sequencer.position()
    }

    /// Current rotor angle.
    #[inline]
    pub fn angle(&self) -> Degrees {
        self.sequencer.angle()
    }

    /// Active drive resolution.
    #[inline]
    pub fn mode(&self) -> StepMode {
        self.sequencer.mode()
    }

    /// Stored seek mark.
    #[inline]
    pub fn mark(&self) -> u16 {
        self.mark
    }

    /// Coil pattern for the current phase.
    #[inline]
    pub fn current_pattern(&self) -> CoilPattern {
        self.sequencer.current_pattern()
    }

    /// Snapshot of position, angle, resolution, and mode.
    pub fn reading(&self) -> PositionReading {
        PositionReading {
            position: self.sequencer.position(),
            angle: self.sequencer.angle(),
            angle_per_step: self.sequencer.angle_per_step(),
            mode: self.sequencer.mode(),
        }
    }

    /// Seed the decoder from the encoder lines' resting state.
    pub fn prime_encoder(&mut self) -> Result<()> {
        self.decoder
            .prime(&mut self.line_a, &mut self.line_b, &mut self.delay)
    }

    /// Assert the active coil pattern on the output pins.
    pub fn apply_outputs(&mut self) -> Result<()> {
        let pattern = self.sequencer.current_pattern();
        self.write_pattern(pattern)
    }

    /// Advance one step: sequencer, coil outputs, display.
    pub fn jog(&mut self, direction: Direction) -> Result<StepOutcome> {
        let outcome = self.sequencer.step(direction);
        self.write_pattern(outcome.pattern)?;
        self.display.position_changed(self.reading());
        Ok(outcome)
    }

    /// Poll the jog knob; applies one step when an edge decodes.
    pub fn poll_encoder(&mut self) -> Result<Option<Direction>> {
        let direction = self
            .decoder
            .poll(&mut self.line_a, &mut self.line_b, &mut self.delay)?;
        if let Some(direction) = direction {
            self.jog(direction)?;
        }
        Ok(direction)
    }

    /// Handle one operator action.
    pub fn handle_event(&mut self, event: ControlEvent) -> Result<EventOutcome> {
        match event {
            ControlEvent::MarkRequested => {
                self.mark = self.sequencer.position();
                let reading = self.reading();
                self.display.mark_changed(reading, self.mark);
                Ok(EventOutcome::MarkStored(self.mark))
            }
            ControlEvent::SeekRequested => {
                let plan = SeekPlan::shortest_path(
                    self.sequencer.position(),
                    self.mark,
                    self.sequencer.position_modulus(),
                );
                self.seek_highlight = true;
                self.scheduler.begin(plan);
                Ok(EventOutcome::SeekStarted {
                    ticks: plan.steps,
                    direction: plan.direction,
                })
            }
            ControlEvent::ModeToggleRequested => {
                let target = self.sequencer.mode().toggled();
                let pattern = self.sequencer.set_mode(target);
                self.write_pattern(pattern)?;
                self.display.mode_changed(self.reading());
                Ok(EventOutcome::ModeChanged(target))
            }
        }
    }

    /// Drain one pending seek step, if any.
    ///
    /// This is the main loop's half of the seek split: the timer context
    /// raises the flag, this applies the step. Returns whether a step was
    /// applied.
    pub fn service_seek(&mut self) -> Result<bool> {
        if !self.scheduler.take_step_due() {
            return Ok(false);
        }
        let direction = self.scheduler.direction();
        self.jog(direction)?;
        self.display.seek_activity(self.seek_highlight);
        self.seek_highlight = !self.seek_highlight;
        if self.scheduler.remaining() == 0 {
            self.display.seek_activity(false);
        }
        Ok(true)
    }

    /// One main-loop iteration.
    ///
    /// While a seek is in flight it takes priority: pending events and the
    /// jog knob are not serviced until the job drains. Otherwise the event
    /// (if any) is handled and the encoder polled.
    pub fn service(&mut self, event: Option<ControlEvent>) -> Result<Option<EventOutcome>> {
        if self.scheduler.in_progress() {
            self.service_seek()?;
            return Ok(None);
        }
        let outcome = match event {
            Some(event) => Some(self.handle_event(event)?),
            None => None,
        };
        // A seek the event just started locks out jogging from this
        // iteration onward
        if !self.scheduler.in_progress() {
            self.poll_encoder()?;
        }
        Ok(outcome)
    }

    fn write_pattern(&mut self, pattern: CoilPattern) -> Result<()> {
        set_lead(&mut self.coil1, pattern.lead(1))?;
        set_lead(&mut self.coil2, pattern.lead(2))?;
        set_lead(&mut self.coil3, pattern.lead(3))?;
        set_lead(&mut self.coil4, pattern.lead(4))?;
        Ok(())
    }
}

fn set_lead<P: OutputPin>(pin: &mut P, high: bool) -> Result<()> {
    let result = if high { pin.set_high() } else { pin.set_low() };
    result.map_err(|_| DriverError::PinError)?;
    Ok(())
}
