use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{error, info};
use std::fs;
use std::path::PathBuf;

mod cli;
mod config;

use cli::Cli;
use config::Config;
use stressrun::domain::StopReason;
use stressrun::exit_codes;
use stressrun::harness::{ConsoleNotices, Harness, LogSink, ProcessLauncher};

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stressrun")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("stressrun.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> stressrun::Result<i32> {
    info!("Starting application");

    let spec = config.command_spec()?;
    let sink = LogSink::create(&config.log_path)?.with_separator(config.run_separator);

    if cli.is_verbose() {
        println!("{} {}", "Running:".cyan(), spec);
        println!("{} {}", "Logging to:".cyan(), config.log_path.display());
    }

    let summary = Harness::new(spec, sink)
        .with_max_runs(config.max_runs)
        .run(&mut ProcessLauncher::new(), &mut ConsoleNotices)?;

    if let StopReason::RunLimitReached { runs } = summary.stop {
        println!("{} {} runs completed without failure", "Done:".green(), runs);
    }
    Ok(summary.exit_code())
}

/// Everything that can fail before or while the harness runs.
///
/// Any error here is a harness fault, never a child failure.
fn run(cli: &Cli) -> Result<i32> {
    setup_logging(cli.is_verbose()).context("Failed to setup logging")?;

    // Load configuration
    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .apply_cli(cli);

    info!("Starting with config from: {:?}", cli.config);

    Ok(run_application(cli, &config)?)
}

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!("Harness failed: {:#}", e);
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            exit_codes::FATAL
        }
    };

    info!("Exiting with status {}", code);
    std::process::exit(code);
}
