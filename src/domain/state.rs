//! Harness state machine.
//!
//! `Running` is the only non-terminal state. Every transition goes through
//! [`HarnessState::advance`], which also owns the counter update.

use super::counter::RunCounter;
use super::notice::Notice;
use super::outcome::RunOutcome;

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A child returned something other than the success sentinel
    ChildFailed { run: u64, outcome: RunOutcome },
    /// The configured run bound was reached without a failure
    RunLimitReached { runs: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessState {
    Running,
    Stopped(StopReason),
}

impl HarnessState {
    pub fn is_running(&self) -> bool {
        matches!(self, HarnessState::Running)
    }

    /// Apply one run outcome.
    ///
    /// Returns the next state plus the notice to report. A stopped state
    /// never changes and produces no notice.
    pub fn advance(
        self,
        counter: &mut RunCounter,
        outcome: RunOutcome,
        max_runs: Option<u64>,
    ) -> (HarnessState, Option<Notice>) {
        if !self.is_running() {
            return (self, None);
        }

        if !outcome.is_success() {
            let run = counter.next_run();
            let next = HarnessState::Stopped(StopReason::ChildFailed { run, outcome });
            return (next, Some(Notice::Failure { run }));
        }

        let count = counter.record_success();
        let notice = Some(Notice::Success { count });
        match max_runs {
            Some(limit) if count >= limit => (
                HarnessState::Stopped(StopReason::RunLimitReached { runs: count }),
                notice,
            ),
            _ => (HarnessState::Running, notice),
        }
    }
}
