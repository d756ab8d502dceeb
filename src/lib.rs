//! # focus-drive
//!
//! Telescope focuser stepper control with quadrature jog and seek-to-mark.
//!
//! ## Features
//!
//! - **Phase sequencing**: full- and half-step coil tables with absolute
//!   position tracking and lossless-where-possible mode switching
//! - **Quadrature jog knob**: sample-debounced decoding of the manual
//!   focus encoder
//! - **Seek to mark**: shortest-path planning and a lock-free scheduler
//!   split across a timer context and the main loop
//! - **embedded-hal 1.0**: `OutputPin` coil leads, `InputPin` encoder
//!   lines, `DelayNs` for settling delays
//! - **no_std compatible**: core library works without the standard library
//! - **Configuration-driven**: focuser geometry and timing from TOML files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use focus_drive::{ControlEvent, FocuserBuilder, NullDisplay, SeekScheduler};
//!
//! // Shared with the periodic timer interrupt
//! static SCHEDULER: SeekScheduler = SeekScheduler::new();
//!
//! let mut focuser = FocuserBuilder::new()
//!     .name("main_focus")
//!     .coil_pins(in1, in2, in3, in4)
//!     .encoder_lines(ec_a, ec_b)
//!     .delay(delay)
//!     .display(NullDisplay)
//!     .scheduler(&SCHEDULER)
//!     .build()?;
//!
//! focuser.prime_encoder()?;
//! focuser.apply_outputs()?;
//!
//! loop {
//!     // timer interrupt calls SCHEDULER.tick() at the configured period
//!     focuser.service(next_button_event())?;
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt formatting for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod drive;
pub mod encoder;
pub mod error;
pub mod focuser;
pub mod seek;

// Re-exports for ergonomic API
pub use config::{validate_config, FocuserConfig, SystemConfig};
pub use drive::{CoilPattern, Direction, PhaseSequencer, StepMode, StepOutcome};
pub use encoder::QuadratureDecoder;
pub use error::{Error, Result};
pub use focuser::{
    ControlEvent, DisplaySink, EventOutcome, Focuser, FocuserBuilder, NullDisplay, PositionReading,
};
pub use seek::{SeekPlan, SeekScheduler, TickOutcome};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::Degrees;
