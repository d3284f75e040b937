//! Log sink receiving all captured child output.

use crate::error::{HarnessError, Result};
use chrono::Local;
use log::debug;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Stdio;

/// Truncating, single-writer log file shared by every child run.
///
/// The file is unbuffered. Children get duplicated handles of the same open
/// file, so stdout and stderr share one offset and land in production order.
#[derive(Debug)]
pub struct LogSink {
    path: PathBuf,
    file: Option<File>,
    separator: bool,
}

impl LogSink {
    /// Create or truncate the log file at `path`
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| HarnessError::LogSink {
            path: path.clone(),
            source,
        })?;
        debug!("Opened log sink {}", path.display());
        Ok(Self {
            path,
            file: Some(file),
            separator: false,
        })
    }

    /// Write a header line before each run
    pub fn with_separator(mut self, enabled: bool) -> Self {
        self.separator = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Append raw bytes at the current end of the log
    pub fn append(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.file_mut()?.write_all(bytes)
    }

    /// Handles for a child's stdout and stderr, both pointing at this file
    pub fn child_stdio(&self) -> io::Result<(Stdio, Stdio)> {
        let file = self.file_ref()?;
        Ok((Stdio::from(file.try_clone()?), Stdio::from(file.try_clone()?)))
    }

    /// Mark the start of run `run` if separators are enabled
    pub fn begin_run(&mut self, run: u64) -> Result<()> {
        if !self.separator {
            return Ok(());
        }
        let header = format!("=== run {} ({}) ===\n", run, Local::now().to_rfc3339());
        self.append(header.as_bytes()).map_err(|e| self.fault(e))
    }

    /// Flush, sync and close the file. Safe to call more than once.
    pub fn release(&mut self) -> Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush().map_err(|e| self.fault(e))?;
            // Character devices such as /dev/null reject fsync with EINVAL
            match file.sync_all() {
                Err(e) if e.kind() != io::ErrorKind::InvalidInput => return Err(self.fault(e)),
                _ => {}
            }
            debug!("Released log sink {}", self.path.display());
        }
        Ok(())
    }

    fn fault(&self, source: io::Error) -> HarnessError {
        HarnessError::LogSink {
            path: self.path.clone(),
            source,
        }
    }

    fn file_ref(&self) -> io::Result<&File> {
        self.file.as_ref().ok_or_else(released)
    }

    fn file_mut(&mut self) -> io::Result<&mut File> {
        self.file.as_mut().ok_or_else(released)
    }
}

fn released() -> io::Error {
    io::Error::other("log sink already released")
}

impl Drop for LogSink {
    fn drop(&mut self) {
        let _ = self.release();
    }
}
