//! Focuser module for focus-drive.
//!
//! Provides the hardware-facing driver that ties the sequencer, decoder,
//! and seek scheduler together, plus the host-facing event and display
//! boundaries.

mod builder;
mod display;
mod driver;
mod events;

pub use builder::FocuserBuilder;
pub use display::{DisplaySink, NullDisplay, PositionReading};
pub use driver::{EventOutcome, Focuser};
pub use events::ControlEvent;
