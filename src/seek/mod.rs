//! Seek module for focus-drive.
//!
//! Provides shortest-path planning to the stored mark and the lock-free
//! scheduler that splits execution across a timer context and the main loop.

mod plan;
mod scheduler;

pub use plan::SeekPlan;
pub use scheduler::{SeekScheduler, TickOutcome, DEFAULT_TICK_PERIOD_MS};
