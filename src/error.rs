//! Error types for stressrun
//!
//! Centralized error handling using thiserror. A child exiting non-zero is
//! not an error here; it is a normal `RunOutcome`.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal harness faults
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The log file could not be created, opened, or written
    #[error("Log sink error at {}: {source}", .path.display())]
    LogSink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The child process could not be started or waited on
    #[error("Failed to launch {program} after {successful_runs} successful runs: {source}")]
    Launch {
        program: String,
        successful_runs: u64,
        #[source]
        source: std::io::Error,
    },

    /// Missing or invalid configuration
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HarnessError {
    /// Whether this fault happened while launching the child
    pub fn is_launch(&self) -> bool {
        matches!(self, HarnessError::Launch { .. })
    }

    /// Successful runs recorded before a launch fault, if this is one
    pub fn successful_runs(&self) -> Option<u64> {
        match self {
            HarnessError::Launch { successful_runs, .. } => Some(*successful_runs),
            _ => None,
        }
    }
}

/// Result type alias for stressrun operations
pub type Result<T> = std::result::Result<T, HarnessError>;
