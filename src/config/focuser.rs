//! Focuser axis configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::drive::StepMode;

use super::units::Degrees;

/// Focuser axis configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FocuserConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Steps per revolution in full-step units.
    ///
    /// Must be even: half stepping doubles it and seek planning halves the
    /// travel distance.
    #[serde(default = "default_steps_per_revolution")]
    pub steps_per_revolution: u16,

    /// Drive resolution at startup.
    #[serde(default)]
    pub step_mode: StepMode,
}

fn default_steps_per_revolution() -> u16 {
    48
}

impl FocuserConfig {
    /// Position modulus (steps per revolution) for a drive mode.
    pub fn position_modulus(&self, mode: StepMode) -> u16 {
        self.steps_per_revolution * mode.position_scale()
    }

    /// Angular resolution of one position unit for a drive mode.
    pub fn angle_per_step(&self, mode: StepMode) -> Degrees {
        Degrees(360.0 / self.position_modulus(mode) as f32)
    }
}
