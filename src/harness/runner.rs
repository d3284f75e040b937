//! The run / log / count / terminate loop.

use crate::domain::{CommandSpec, HarnessState, RunCounter, StopReason};
use crate::error::{HarnessError, Result};
use crate::exit_codes;
use crate::harness::launcher::Launcher;
use crate::harness::notices::NoticeSink;
use crate::harness::sink::LogSink;
use log::{debug, error, info};
use std::time::Instant;

/// What happened once the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessSummary {
    pub successful_runs: u64,
    pub stop: StopReason,
}

impl HarnessSummary {
    /// Process exit code for the binary
    pub fn exit_code(&self) -> i32 {
        match self.stop {
            StopReason::ChildFailed { .. } => exit_codes::CHILD_FAILED,
            StopReason::RunLimitReached { .. } => exit_codes::OK,
        }
    }
}

/// Launches the same command until it fails.
///
/// Runs are strictly sequential. The sink is owned for the whole loop and
/// released on every exit path.
#[derive(Debug)]
pub struct Harness {
    spec: CommandSpec,
    sink: LogSink,
    max_runs: Option<u64>,
}

impl Harness {
    pub fn new(spec: CommandSpec, sink: LogSink) -> Self {
        Self {
            spec,
            sink,
            max_runs: None,
        }
    }

    /// Stop cleanly after this many successful runs
    pub fn with_max_runs(mut self, max_runs: Option<u64>) -> Self {
        self.max_runs = max_runs;
        self
    }

    pub fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    /// Run until a child fails, the run bound is hit, or the harness faults
    pub fn run<L, N>(mut self, launcher: &mut L, notices: &mut N) -> Result<HarnessSummary>
    where
        L: Launcher,
        N: NoticeSink,
    {
        let result = self.drive(launcher, notices);
        let released = self.sink.release();
        let summary = result?;
        released?;
        Ok(summary)
    }

    fn drive<L, N>(&mut self, launcher: &mut L, notices: &mut N) -> Result<HarnessSummary>
    where
        L: Launcher,
        N: NoticeSink,
    {
        let mut counter = RunCounter::new();
        info!(
            "Starting harness: {} -> {} (max runs: {:?})",
            self.spec,
            self.sink.path().display(),
            self.max_runs
        );

        if self.max_runs == Some(0) {
            return Ok(self.stopped(&counter, StopReason::RunLimitReached { runs: 0 }));
        }

        let mut state = HarnessState::Running;
        loop {
            let run = counter.next_run();
            self.sink.begin_run(run)?;

            let started = Instant::now();
            let outcome = launcher
                .launch(&self.spec, &mut self.sink)
                .map_err(|source| {
                    error!("Run {} could not be launched: {}", run, source);
                    HarnessError::Launch {
                        program: self.spec.to_string(),
                        successful_runs: counter.value(),
                        source,
                    }
                })?;
            debug!("Run {} finished with {} in {:?}", run, outcome, started.elapsed());

            let (next, notice) = state.advance(&mut counter, outcome, self.max_runs);
            if let Some(notice) = notice {
                notices.notify(notice);
            }
            if let HarnessState::Stopped(stop) = next {
                return Ok(self.stopped(&counter, stop));
            }
            state = next;
        }
    }

    fn stopped(&self, counter: &RunCounter, stop: StopReason) -> HarnessSummary {
        match stop {
            StopReason::ChildFailed { run, outcome } => {
                error!("Run {} failed with {} after {} successful runs", run, outcome, counter.value())
            }
            StopReason::RunLimitReached { runs } => info!("Run limit reached after {} runs", runs),
        }
        HarnessSummary {
            successful_runs: counter.value(),
            stop,
        }
    }
}
