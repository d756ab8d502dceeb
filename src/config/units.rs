//! Unit types for angular quantities.
//!
//! Provides a type-safe degree representation so positions-in-steps and
//! angles cannot be confused at call sites.

use core::ops::{Add, Sub};

use serde::Deserialize;

/// Angular position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Add for Degrees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let sum = Degrees(90.0) + Degrees(45.0);
        assert!((sum.value() - 135.0).abs() < 1e-6);
        let diff = Degrees(90.0) - Degrees(45.0);
        assert!((diff.value() - 45.0).abs() < 1e-6);
    }
}
