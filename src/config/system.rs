//! System configuration - root configuration structure.

use serde::Deserialize;

use crate::encoder::DEFAULT_SETTLE_DELAY_US;
use crate::seek::DEFAULT_TICK_PERIOD_MS;

use super::focuser::FocuserConfig;

/// Encoder polling configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EncoderConfig {
    /// Settling delay between debounce samples, in microseconds.
    #[serde(default = "default_settle_delay_us")]
    pub settle_delay_us: u32,
}

fn default_settle_delay_us() -> u32 {
    DEFAULT_SETTLE_DELAY_US
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            settle_delay_us: DEFAULT_SETTLE_DELAY_US,
        }
    }
}

/// Seek timer configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SeekConfig {
    /// Period between seek ticks, in milliseconds.
    ///
    /// The crate does not own a timer; the host arms its periodic source
    /// with this value.
    #[serde(default = "default_tick_period_ms")]
    pub tick_period_ms: u32,
}

fn default_tick_period_ms() -> u32 {
    DEFAULT_TICK_PERIOD_MS
}

impl Default for SeekConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: DEFAULT_TICK_PERIOD_MS,
        }
    }
}

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// The focuser axis.
    pub focuser: FocuserConfig,

    /// Encoder polling parameters.
    #[serde(default)]
    pub encoder: EncoderConfig,

    /// Seek timer parameters.
    #[serde(default)]
    pub seek: SeekConfig,
}
