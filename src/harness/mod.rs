//! Harness: open a log sink, then launch the command repeatedly until it fails.
//!
//! - LogSink: truncating log file shared by every run
//! - Launcher: one blocking child run (real process or scripted)
//! - NoticeSink: where per-run notices go
//! - Harness: the sequential control loop

pub mod launcher;
pub mod notices;
pub mod runner;
pub mod sink;

pub use launcher::{Launcher, ProcessLauncher, ScriptedLauncher, ScriptedRun};
pub use notices::{ConsoleNotices, NoticeSink};
pub use runner::{Harness, HarnessSummary};
pub use sink::LogSink;
