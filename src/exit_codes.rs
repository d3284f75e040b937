//! Stable process exit codes for the stressrun binary.

/// Stopped deliberately (run bound reached) without a child failure.
pub const OK: i32 = 0;
/// A child run exited non-zero or was killed.
pub const CHILD_FAILED: i32 = 1;
/// The harness itself faulted: log sink, launch, or configuration error.
pub const FATAL: i32 = 2;
