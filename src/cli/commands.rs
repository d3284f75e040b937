//! CLI definition using clap.
//!
//! Every option can also come from the config file; values given here win.

use clap::Parser;
use std::path::PathBuf;

/// Stressrun - run a program over and over until it fails
#[derive(Parser, Debug)]
#[command(name = "stressrun")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Program to launch on every run
    pub executable: Option<PathBuf>,

    /// Argument string passed to the program (split on whitespace)
    #[arg(short, long, allow_hyphen_values = true)]
    pub args: Option<String>,

    /// Log file receiving the program's stdout and stderr
    #[arg(short, long)]
    pub log: Option<PathBuf>,

    /// Directory to run the program in
    #[arg(short, long)]
    pub workdir: Option<PathBuf>,

    /// Stop cleanly after this many successful runs
    #[arg(short, long)]
    pub max_runs: Option<u64>,

    /// Write a header line before each run's output
    #[arg(short, long)]
    pub separator: bool,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}
