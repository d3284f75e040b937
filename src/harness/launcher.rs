//! Launching one child run.
//!
//! The [`Launcher`] trait is the seam between the harness loop and the
//! platform: [`ProcessLauncher`] spawns real processes, [`ScriptedLauncher`]
//! replays canned outcomes for tests.

use crate::domain::{CommandSpec, RunOutcome};
use crate::harness::sink::LogSink;
use log::debug;
use std::collections::VecDeque;
use std::io;
use std::process::{Command, Stdio};

/// Runs the command once, blocking until it finishes.
///
/// A non-zero exit is a normal `Ok` outcome. `Err` means the child could
/// not be started or waited on.
pub trait Launcher {
    fn launch(&mut self, spec: &CommandSpec, sink: &mut LogSink) -> io::Result<RunOutcome>;
}

/// Spawns the command as a real child process
#[derive(Debug, Default)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl Launcher for ProcessLauncher {
    fn launch(&mut self, spec: &CommandSpec, sink: &mut LogSink) -> io::Result<RunOutcome> {
        let (stdout, stderr) = sink.child_stdio()?;

        let mut cmd = Command::new(spec.program());
        cmd.args(spec.args())
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr);
        if let Some(dir) = spec.working_dir() {
            cmd.current_dir(dir);
        }

        let mut child = cmd.spawn()?;
        debug!("Spawned pid {} for {}", child.id(), spec);
        let status = child.wait()?;
        Ok(status.into())
    }
}

/// One canned run for [`ScriptedLauncher`]
#[derive(Debug, Clone)]
pub struct ScriptedRun {
    pub outcome: RunOutcome,
    pub output: Vec<u8>,
}

impl ScriptedRun {
    pub fn new(outcome: RunOutcome, output: impl Into<Vec<u8>>) -> Self {
        Self {
            outcome,
            output: output.into(),
        }
    }

    pub fn exit(code: i32) -> Self {
        Self::new(RunOutcome::Exited(code), Vec::new())
    }
}

/// Replays a fixed sequence of runs, writing each run's output to the sink.
///
/// Once the sequence is exhausted it repeats the fallback run, or fails to
/// launch if there is none.
#[derive(Debug, Default)]
pub struct ScriptedLauncher {
    script: VecDeque<ScriptedRun>,
    fallback: Option<ScriptedRun>,
    launches: u64,
}

impl ScriptedLauncher {
    pub fn new(script: impl IntoIterator<Item = ScriptedRun>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback: None,
            launches: 0,
        }
    }

    /// Script from bare exit codes with no output
    pub fn from_codes(codes: impl IntoIterator<Item = i32>) -> Self {
        Self::new(codes.into_iter().map(ScriptedRun::exit))
    }

    /// Return the same run forever
    pub fn always(run: ScriptedRun) -> Self {
        Self::new([]).then_always(run)
    }

    pub fn then_always(mut self, run: ScriptedRun) -> Self {
        self.fallback = Some(run);
        self
    }

    /// Number of launches attempted so far
    pub fn launches(&self) -> u64 {
        self.launches
    }
}

impl Launcher for ScriptedLauncher {
    fn launch(&mut self, spec: &CommandSpec, sink: &mut LogSink) -> io::Result<RunOutcome> {
        self.launches += 1;
        let run = match self.script.pop_front() {
            Some(run) => run,
            None => self.fallback.clone().ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("no scripted run left for {}", spec))
            })?,
        };
        sink.append(&run.output)?;
        Ok(run.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sink_in(dir: &TempDir) -> LogSink {
        LogSink::create(dir.path().join("log.txt")).unwrap()
    }

    #[test]
    fn test_scripted_replays_in_order() {
        let dir = TempDir::new().unwrap();
        let mut sink = sink_in(&dir);
        let spec = CommandSpec::new("encoder", "");
        let mut launcher = ScriptedLauncher::new([
            ScriptedRun::new(RunOutcome::Exited(0), "a"),
            ScriptedRun::new(RunOutcome::Exited(1), "b"),
        ]);

        assert_eq!(launcher.launch(&spec, &mut sink).unwrap(), RunOutcome::Exited(0));
        assert_eq!(launcher.launch(&spec, &mut sink).unwrap(), RunOutcome::Exited(1));
        assert!(launcher.launch(&spec, &mut sink).is_err());
        assert_eq!(launcher.launches(), 3);

        sink.release().unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("log.txt")).unwrap(), "ab");
    }

    #[test]
    fn test_scripted_fallback_repeats() {
        let dir = TempDir::new().unwrap();
        let mut sink = sink_in(&dir);
        let spec = CommandSpec::new("encoder", "");
        let mut launcher = ScriptedLauncher::from_codes([0]).then_always(ScriptedRun::exit(2));

        assert_eq!(launcher.launch(&spec, &mut sink).unwrap(), RunOutcome::Exited(0));
        assert_eq!(launcher.launch(&spec, &mut sink).unwrap(), RunOutcome::Exited(2));
        assert_eq!(launcher.launch(&spec, &mut sink).unwrap(), RunOutcome::Exited(2));
    }

    #[cfg(unix)]
    #[test]
    fn test_process_launcher_captures_both_streams() {
        let dir = TempDir::new().unwrap();
        let mut sink = sink_in(&dir);
        fs::write(dir.path().join("run.sh"), "echo out\necho err 1>&2\nexit 3\n").unwrap();
        let spec = CommandSpec::new("/bin/sh", "run.sh").with_working_dir(dir.path());

        let outcome = ProcessLauncher::new().launch(&spec, &mut sink).unwrap();
        assert_eq!(outcome, RunOutcome::Exited(3));

        sink.release().unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("log.txt")).unwrap(), "out\nerr\n");
    }

    #[test]
    fn test_process_launcher_missing_program() {
        let dir = TempDir::new().unwrap();
        let mut sink = sink_in(&dir);
        let spec = CommandSpec::new(dir.path().join("does-not-exist"), "");

        let err = ProcessLauncher::new().launch(&spec, &mut sink).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
