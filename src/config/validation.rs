//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - Steps per revolution is even, non-zero, and small enough to double
///   for half-step mode
/// - Seek tick period is non-zero
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_steps_per_revolution(config.focuser.steps_per_revolution)?;

    if config.seek.tick_period_ms == 0 {
        return Err(Error::Config(ConfigError::InvalidTickPeriod(
            config.seek.tick_period_ms,
        )));
    }

    Ok(())
}

/// Validate a steps-per-revolution value on its own.
///
/// Used by both config validation and the focuser builder.
pub(crate) fn validate_steps_per_revolution(steps: u16) -> Result<()> {
    if steps == 0 || steps % 2 != 0 || steps > u16::MAX / 2 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(steps)));
    }
    Ok(())
}
