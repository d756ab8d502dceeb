//! Drive module for focus-drive.
//!
//! Provides the step tables and the phase sequencer with mode switching.

mod sequencer;
mod table;

pub use sequencer::{Direction, PhaseSequencer, StepOutcome};
pub use table::{CoilPattern, StepMode, FULL_STEP_TABLE, HALF_STEP_TABLE};
