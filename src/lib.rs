//! Stressrun - repeated-invocation stress harness
//!
//! Launches one external program over and over against the same input,
//! appending its combined stdout/stderr to a log file, until a run exits
//! non-zero. Runs are sequential and blocking; the first failure stops
//! the loop.

pub mod domain;
pub mod error;
pub mod exit_codes;
pub mod harness;

pub use error::{HarnessError, Result};
