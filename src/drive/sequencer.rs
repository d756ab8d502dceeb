//! Phase sequencer: phase index and absolute rotor position.
//!
//! The sequencer owns the only mutable drive state. Every movement goes
//! through [`PhaseSequencer::step`]; resolution changes go through
//! [`PhaseSequencer::set_mode`], which rescales the state so the physical
//! rotor angle is preserved.

use crate::config::units::Degrees;

use super::table::{CoilPattern, StepMode};

/// Direction of rotor motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Forward runs the step tables in descending order.
    Forward,
    /// Backward runs the step tables in ascending order.
    Backward,
}

impl Direction {
    /// The reverse direction.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Result of one sequencer step, for the caller to apply to coil outputs
/// and the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// New phase index into the active step table.
    pub phase_index: u16,
    /// New absolute position in the active mode's units.
    pub position: u16,
    /// Coil pattern to assert for the new phase.
    pub pattern: CoilPattern,
}

/// Phase sequencer with absolute position tracking.
///
/// `phase_index` cycles through the active step table; `position` counts the
/// rotor's absolute location modulo the steps per revolution of the active
/// mode. Both are maintained together by [`step`](Self::step), so they can
/// never drift apart.
#[derive(Debug, Clone)]
pub struct PhaseSequencer {
    mode: StepMode,
    /// Steps per revolution in full-step units; the half-step modulus is
    /// twice this.
    base_steps_per_rev: u16,
    phase_index: u16,
    position: u16,
}

impl PhaseSequencer {
    /// Create a sequencer at phase 0, position 0.
    pub fn new(mode: StepMode, base_steps_per_rev: u16) -> Self {
        Self {
            mode,
            base_steps_per_rev,
            phase_index: 0,
            position: 0,
        }
    }

    /// Active drive resolution.
    #[inline]
    pub fn mode(&self) -> StepMode {
        self.mode
    }

    /// Current phase index into the active step table.
    #[inline]
    pub fn phase_index(&self) -> u16 {
        self.phase_index
    }

    /// Current absolute position in the active mode's units.
    #[inline]
    pub fn position(&self) -> u16 {
        self.position
    }

    /// Phase index modulus of the active mode.
    #[inline]
    pub fn phase_modulus(&self) -> u16 {
        self.mode.phase_count()
    }

    /// Position modulus (steps per revolution) of the active mode.
    #[inline]
    pub fn position_modulus(&self) -> u16 {
        self.base_steps_per_rev * self.mode.position_scale()
    }

    /// Angular resolution of one position unit.
    #[inline]
    pub fn angle_per_step(&self) -> Degrees {
        Degrees(360.0 / self.position_modulus() as f32)
    }

    /// Current rotor angle.
    #[inline]
    pub fn angle(&self) -> Degrees {
        Degrees(self.position as f32 * 360.0 / self.position_modulus() as f32)
    }

    /// Coil pattern for the current phase.
    #[inline]
    pub fn current_pattern(&self) -> CoilPattern {
        self.mode.pattern(self.phase_index)
    }

    /// Advance one step in `direction`.
    ///
    /// Forward decrements phase and position, backward increments both; each
    /// wraps modulo its own count.
    pub fn step(&mut self, direction: Direction) -> StepOutcome {
        let phases = self.phase_modulus();
        let positions = self.position_modulus();
        match direction {
            Direction::Forward => {
                self.phase_index = step_down(self.phase_index, phases);
                self.position = step_down(self.position, positions);
            }
            Direction::Backward => {
                self.phase_index = step_up(self.phase_index, phases);
                self.position = step_up(self.position, positions);
            }
        }
        StepOutcome {
            phase_index: self.phase_index,
            position: self.position,
            pattern: self.current_pattern(),
        }
    }

    /// Switch drive resolution, rescaling phase and position so the rotor
    /// angle is unchanged.
    ///
    /// No state is touched when `target` is already active. Half to full
    /// integer-divides the indices, so an odd half-step position loses half
    /// a step of resolution; that matches the source hardware and is
    /// accepted.
    ///
    /// Always returns the pattern for the now-active mode so the caller can
    /// re-assert the coil outputs immediately.
    pub fn set_mode(&mut self, target: StepMode) -> CoilPattern {
        if self.mode != target {
            match target {
                StepMode::Half => {
                    self.phase_index *= 2;
                    self.position *= 2;
                }
                StepMode::Full => {
                    self.phase_index /= 2;
                    self.position /= 2;
                }
            }
            self.mode = target;
        }
        self.current_pattern()
    }
}

/// Decrement modulo `modulus`. The modulus is added before the remainder so
/// the subtraction cannot underflow; widened so the addition cannot overflow
/// at the largest valid moduli.
#[inline]
fn step_down(value: u16, modulus: u16) -> u16 {
    ((value as u32 + modulus as u32 - 1) % modulus as u32) as u16
}

/// Increment modulo `modulus`.
#[inline]
fn step_up(value: u16, modulus: u16) -> u16 {
    ((value as u32 + 1) % modulus as u32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_wraps_from_zero() {
        let mut seq = PhaseSequencer::new(StepMode::Full, 48);
        let outcome = seq.step(Direction::Forward);
        assert_eq!(outcome.phase_index, 3);
        assert_eq!(outcome.position, 47);
        assert_eq!(outcome.pattern, StepMode::Full.pattern(3));
    }

    #[test]
    fn test_backward_wraps_at_modulus() {
        let mut seq = PhaseSequencer::new(StepMode::Full, 48);
        for _ in 0..47 {
            seq.step(Direction::Backward);
        }
        assert_eq!(seq.position(), 47);
        let outcome = seq.step(Direction::Backward);
        assert_eq!(outcome.position, 0);
        assert_eq!(outcome.phase_index, 0);
    }

    #[test]
    fn test_step_round_trip_restores_state() {
        let mut seq = PhaseSequencer::new(StepMode::Half, 48);
        seq.step(Direction::Backward);
        seq.step(Direction::Backward);
        seq.step(Direction::Backward);
        let phase = seq.phase_index();
        let position = seq.position();

        seq.step(Direction::Forward);
        seq.step(Direction::Backward);
        assert_eq!(seq.phase_index(), phase);
        assert_eq!(seq.position(), position);
    }

    #[test]
    fn test_full_revolution_closes() {
        let mut seq = PhaseSequencer::new(StepMode::Full, 48);
        for _ in 0..48 {
            seq.step(Direction::Forward);
        }
        assert_eq!(seq.phase_index(), 0);
        assert_eq!(seq.position(), 0);
    }

    #[test]
    fn test_mode_switch_preserves_angle() {
        let mut seq = PhaseSequencer::new(StepMode::Full, 48);
        for _ in 0..12 {
            seq.step(Direction::Backward);
        }
        let angle_before = seq.angle();

        seq.set_mode(StepMode::Half);
        assert_eq!(seq.position(), 24);
        assert_eq!(seq.position_modulus(), 96);
        assert!((seq.angle().value() - angle_before.value()).abs() < 1e-4);

        seq.set_mode(StepMode::Full);
        assert_eq!(seq.position(), 12);
        assert!((seq.angle().value() - angle_before.value()).abs() < 1e-4);
    }

    #[test]
    fn test_mode_switch_rounds_odd_half_position() {
        let mut seq = PhaseSequencer::new(StepMode::Half, 48);
        for _ in 0..5 {
            seq.step(Direction::Backward);
        }
        assert_eq!(seq.position(), 5);

        // 5 half-steps divide down to 2 full steps: half a step is lost
        seq.set_mode(StepMode::Full);
        assert_eq!(seq.position(), 2);
        seq.set_mode(StepMode::Half);
        assert_eq!(seq.position(), 4);
    }

    #[test]
    fn test_set_mode_same_mode_is_noop() {
        let mut seq = PhaseSequencer::new(StepMode::Full, 48);
        seq.step(Direction::Backward);
        let pattern = seq.set_mode(StepMode::Full);
        assert_eq!(seq.position(), 1);
        assert_eq!(seq.phase_index(), 1);
        assert_eq!(pattern, seq.current_pattern());
    }

    #[test]
    fn test_angle_per_step() {
        let mut seq = PhaseSequencer::new(StepMode::Full, 48);
        assert!((seq.angle_per_step().value() - 7.5).abs() < 1e-4);
        seq.set_mode(StepMode::Half);
        assert!((seq.angle_per_step().value() - 3.75).abs() < 1e-4);
    }
}
