use crate::OutputFormat;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Delays in milliseconds. Each recompute waits for its trigger's delay so the
/// page can finish rendering first.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TimingConfig {
    #[serde(default = "default_ready_delay_ms")]
    pub ready_delay_ms: u64,
    #[serde(default = "default_navigation_delay_ms")]
    pub navigation_delay_ms: u64,
    #[serde(default = "default_refresh_delay_ms")]
    pub refresh_delay_ms: u64,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_ready_delay_ms() -> u64 {
    2000
}

fn default_navigation_delay_ms() -> u64 {
    1500
}

fn default_refresh_delay_ms() -> u64 {
    500
}

fn default_poll_interval_ms() -> u64 {
    1000
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            ready_delay_ms: default_ready_delay_ms(),
            navigation_delay_ms: default_navigation_delay_ms(),
            refresh_delay_ms: default_refresh_delay_ms(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl TimingConfig {
    /// No settling at all; used for one-shot runs and tests.
    pub fn immediate() -> Self {
        Self {
            ready_delay_ms: 0,
            navigation_delay_ms: 0,
            refresh_delay_ms: 0,
            poll_interval_ms: 1,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            anyhow::bail!("Poll interval must be greater than 0");
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Expand the calculation details panel
    #[serde(default)]
    pub show_details: bool,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.timing.validate()?;
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let config_dir = home::home_dir()
        .context("Could not find home directory")?
        .join(".course-runtime");
    Ok(config_dir.join("config.toml"))
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;
    config.validate()?;
    Ok(config)
}

pub fn load() -> Result<Config> {
    load_from_path(config_path()?)
}
