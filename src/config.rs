use crate::cli::Cli;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use stressrun::domain::CommandSpec;
use stressrun::error::HarnessError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Program launched on every run
    pub executable: Option<PathBuf>,
    /// Whitespace-separated arguments passed to the program
    pub arguments: String,
    /// Directory the program runs in (harness cwd if unset)
    pub working_dir: Option<PathBuf>,
    /// Captured output of every run; truncated at startup
    pub log_path: PathBuf,
    /// Write a header line before each run's output
    pub run_separator: bool,
    /// Stop cleanly after this many successful runs
    pub max_runs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            executable: None,
            arguments: String::new(),
            working_dir: None,
            log_path: PathBuf::from("log.txt"),
            run_separator: false,
            max_runs: None,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let project_name = env!("CARGO_PKG_NAME");
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let project_name = env!("CARGO_PKG_NAME");
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Command-line values win over file values
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(executable) = &cli.executable {
            self.executable = Some(executable.clone());
        }
        if let Some(arguments) = &cli.args {
            self.arguments = arguments.clone();
        }
        if let Some(dir) = &cli.workdir {
            self.working_dir = Some(dir.clone());
        }
        if let Some(log) = &cli.log {
            self.log_path = log.clone();
        }
        if cli.separator {
            self.run_separator = true;
        }
        if cli.max_runs.is_some() {
            self.max_runs = cli.max_runs;
        }
        self
    }

    pub fn command_spec(&self) -> stressrun::Result<CommandSpec> {
        let executable = self
            .executable
            .as_ref()
            .ok_or_else(|| HarnessError::Config("no executable configured".to_string()))?;
        let spec = CommandSpec::new(executable, &self.arguments);
        Ok(match &self.working_dir {
            Some(dir) => spec.with_working_dir(dir),
            None => spec,
        })
    }
}
