//! The fixed command each run launches.

use std::fmt;
use std::path::{Path, PathBuf};

/// Executable plus argument list, built once before the loop starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: PathBuf,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl CommandSpec {
    /// Build a spec from an executable path and a single argument string.
    ///
    /// The argument string is split on whitespace into argv entries.
    pub fn new(program: impl Into<PathBuf>, arguments: &str) -> Self {
        Self {
            program: program.into(),
            args: arguments.split_whitespace().map(str::to_string).collect(),
            working_dir: None,
        }
    }

    /// Run the child from this directory instead of the harness's cwd
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
