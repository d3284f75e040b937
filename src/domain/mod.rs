//! Domain types for stressrun
//!
//! - CommandSpec: the fixed program and arguments launched each run
//! - RunOutcome: exit status of one run
//! - RunCounter: consecutive successful runs
//! - HarnessState: Running / Stopped state machine
//! - Notice: per-run progress and failure lines

pub mod command;
pub mod counter;
pub mod notice;
pub mod outcome;
pub mod state;

pub use command::CommandSpec;
pub use counter::RunCounter;
pub use notice::Notice;
pub use outcome::RunOutcome;
pub use state::{HarnessState, StopReason};
