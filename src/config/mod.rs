//! Configuration module for focus-drive.
//!
//! Provides types for loading and validating focuser, encoder, and seek
//! configurations from TOML files (with `std` feature) or pre-parsed data.

mod focuser;
#[cfg(feature = "std")]
mod loader;
mod system;
pub mod units;
mod validation;

pub use focuser::FocuserConfig;
pub use system::{EncoderConfig, SeekConfig, SystemConfig};
pub use validation::validate_config;
pub(crate) use validation::validate_steps_per_revolution;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::Degrees;
