//! CLI module for stressrun - command-line interface.

pub mod commands;

pub use commands::Cli;
