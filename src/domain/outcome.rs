//! Outcome of a single child run.

use std::fmt;
use std::process::ExitStatus;

/// Observed exit status of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Child exited with this code
    Exited(i32),
    /// Child was terminated without an exit code (signal number if known)
    Killed(Option<i32>),
}

impl RunOutcome {
    /// Exit code that marks a run as successful
    pub const SUCCESS: i32 = 0;

    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Exited(Self::SUCCESS))
    }
}

impl From<ExitStatus> for RunOutcome {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => RunOutcome::Exited(code),
            None => RunOutcome::Killed(terminating_signal(&status)),
        }
    }
}

#[cfg(unix)]
fn terminating_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn terminating_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Exited(code) => write!(f, "exit code {}", code),
            RunOutcome::Killed(Some(sig)) => write!(f, "killed by signal {}", sig),
            RunOutcome::Killed(None) => write!(f, "killed"),
        }
    }
}
