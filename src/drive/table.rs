//! Coil energization step tables.
//!
//! Two fixed pattern sequences cover the drive resolutions: four full-step
//! entries and eight half-step entries, in the firing order of the four-lead
//! focuser motor. The tables are static data with no failure modes.

use serde::Deserialize;

/// Coil drive resolution.
///
/// Determines the active step table, the phase index modulus (4 or 8), and
/// the position modulus (half stepping doubles the positions per revolution
/// at half the torque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepMode {
    /// Full-step drive: four phases, two coils energized at a time.
    Full,
    /// Half-step drive: eight phases, doubled positioning resolution.
    Half,
}

impl StepMode {
    /// Number of entries in this mode's step table.
    #[inline]
    pub const fn phase_count(self) -> u16 {
        match self {
            StepMode::Full => FULL_STEP_TABLE.len() as u16,
            StepMode::Half => HALF_STEP_TABLE.len() as u16,
        }
    }

    /// Position units per base full step (1 for full, 2 for half).
    #[inline]
    pub const fn position_scale(self) -> u16 {
        match self {
            StepMode::Full => 1,
            StepMode::Half => 2,
        }
    }

    /// The other resolution.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            StepMode::Full => StepMode::Half,
            StepMode::Half => StepMode::Full,
        }
    }

    /// Look up the coil pattern for a phase index.
    ///
    /// Total over all inputs: the index is reduced modulo the table length.
    #[inline]
    pub const fn pattern(self, phase_index: u16) -> CoilPattern {
        match self {
            StepMode::Full => FULL_STEP_TABLE[phase_index as usize % FULL_STEP_TABLE.len()],
            StepMode::Half => HALF_STEP_TABLE[phase_index as usize % HALF_STEP_TABLE.len()],
        }
    }
}

impl Default for StepMode {
    fn default() -> Self {
        StepMode::Full
    }
}

/// One coil energization pattern, one bit per motor lead.
///
/// Bit 3 drives lead IN1 down through bit 0 for lead IN4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoilPattern(u8);

impl CoilPattern {
    const fn new(bits: u8) -> Self {
        Self(bits & 0x0F)
    }

    /// Raw 4-bit field.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// State of one lead, `lead` in 1..=4 (IN1 through IN4).
    #[inline]
    pub const fn lead(self, lead: u8) -> bool {
        self.0 & (0x10 >> lead) != 0
    }

    /// All four lead states, IN1 first.
    #[inline]
    pub const fn leads(self) -> [bool; 4] {
        [self.lead(1), self.lead(2), self.lead(3), self.lead(4)]
    }
}

/// Full-step firing order: two coils energized per phase.
pub const FULL_STEP_TABLE: [CoilPattern; 4] = [
    CoilPattern::new(0b0101),
    CoilPattern::new(0b1001),
    CoilPattern::new(0b1010),
    CoilPattern::new(0b0110),
];

/// Half-step firing order: alternating two-coil and one-coil phases.
pub const HALF_STEP_TABLE: [CoilPattern; 8] = [
    CoilPattern::new(0b0101),
    CoilPattern::new(0b0001),
    CoilPattern::new(0b1001),
    CoilPattern::new(0b1000),
    CoilPattern::new(0b1010),
    CoilPattern::new(0b0010),
    CoilPattern::new(0b0110),
    CoilPattern::new(0b0100),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_counts_match_tables() {
        assert_eq!(StepMode::Full.phase_count() as usize, FULL_STEP_TABLE.len());
        assert_eq!(StepMode::Half.phase_count() as usize, HALF_STEP_TABLE.len());
    }

    #[test]
    fn test_pattern_lookup_is_total() {
        // Out-of-range indices reduce modulo the table length
        assert_eq!(StepMode::Full.pattern(5), StepMode::Full.pattern(1));
        assert_eq!(StepMode::Half.pattern(9), StepMode::Half.pattern(1));
    }

    #[test]
    fn test_lead_extraction() {
        let pattern = StepMode::Full.pattern(0); // 0b0101
        assert!(!pattern.lead(1));
        assert!(pattern.lead(2));
        assert!(!pattern.lead(3));
        assert!(pattern.lead(4));
        assert_eq!(pattern.leads(), [false, true, false, true]);
    }

    #[test]
    fn test_half_table_interleaves_full_table() {
        // Even half-step entries are the full-step entries
        for i in 0..4u16 {
            assert_eq!(StepMode::Half.pattern(i * 2), StepMode::Full.pattern(i));
        }
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(StepMode::Full.toggled(), StepMode::Half);
        assert_eq!(StepMode::Half.toggled(), StepMode::Full);
    }

    #[test]
    fn test_mode_deserialization() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            mode: StepMode,
        }
        let full: Wrapper = toml::from_str(r#"mode = "full""#).unwrap();
        assert_eq!(full.mode, StepMode::Full);
        let half: Wrapper = toml::from_str(r#"mode = "half""#).unwrap();
        assert_eq!(half.mode, StepMode::Half);
    }
}
