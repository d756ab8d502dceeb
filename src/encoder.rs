//! Quadrature decoding for the manual jog knob.
//!
//! The encoder is debounced by repeated sampling rather than filtering: each
//! line is read three times with a settling delay between reads, XOR-folding
//! the later reads into the first, then packed into a 2-bit code. Only two
//! of the four quadrature edges decode as direction signals; the focuser
//! knob emits the other two codes too unreliably to act on, so they fall
//! through to "no motion".

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::drive::Direction;
use crate::error::{DriverError, Result};

/// Default settling delay between debounce samples, in microseconds.
pub const DEFAULT_SETTLE_DELAY_US: u32 = 1_000;

/// Quadrature decoder with a single stored stable state.
///
/// The stored 2-bit state updates on every poll, whether or not a direction
/// was recognized, so the next poll always compares against the most recent
/// reading.
#[derive(Debug, Clone)]
pub struct QuadratureDecoder {
    last: u8,
    settle_delay_us: u32,
}

impl QuadratureDecoder {
    /// Create a decoder with the given settling delay between samples.
    pub fn new(settle_delay_us: u32) -> Self {
        Self {
            last: 0,
            settle_delay_us,
        }
    }

    /// Sample once and seed the stored state without decoding.
    ///
    /// Call at startup so the first real [`poll`](Self::poll) compares
    /// against the lines' resting state instead of zero.
    pub fn prime<A, B, D>(&mut self, line_a: &mut A, line_b: &mut B, delay: &mut D) -> Result<()>
    where
        A: InputPin,
        B: InputPin,
        D: DelayNs,
    {
        self.last = self.sample(line_a, line_b, delay)?;
        Ok(())
    }

    /// Poll both lines and decode a jog direction.
    ///
    /// Recognizes exactly two edges: `0b10 -> 0b11` as forward and
    /// `0b11 -> 0b10` as backward. Every other transition, including no
    /// change, yields `None`.
    pub fn poll<A, B, D>(
        &mut self,
        line_a: &mut A,
        line_b: &mut B,
        delay: &mut D,
    ) -> Result<Option<Direction>>
    where
        A: InputPin,
        B: InputPin,
        D: DelayNs,
    {
        let current = self.sample(line_a, line_b, delay)?;
        let previous = core::mem::replace(&mut self.last, current);
        Ok(match (previous, current) {
            (0b10, 0b11) => Some(Direction::Forward),
            (0b11, 0b10) => Some(Direction::Backward),
            _ => None,
        })
    }

    /// The last sampled 2-bit state (`b << 1 | a`).
    #[inline]
    pub fn last_state(&self) -> u8 {
        self.last
    }

    fn sample<A, B, D>(&self, line_a: &mut A, line_b: &mut B, delay: &mut D) -> Result<u8>
    where
        A: InputPin,
        B: InputPin,
        D: DelayNs,
    {
        let mut a = read_line(line_a)?;
        let mut b = read_line(line_b)?;
        for _ in 0..2 {
            delay.delay_us(self.settle_delay_us);
            a ^= read_line(line_a)?;
            b ^= read_line(line_b)?;
        }
        Ok(b << 1 | a)
    }
}

fn read_line<P: InputPin>(pin: &mut P) -> Result<u8> {
    Ok(pin.is_high().map_err(|_| DriverError::PinError)? as u8)
}
