use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cache::default_cache_path;

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "CTIR_FOOTER_CONFIG";

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "CTIR model indicator for the Claude Code footer")]
pub struct Config {
    /// Enable debug mode
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Simulate the Claude Code footer with the CTIR indicator
    Demo,
    /// Show integration examples
    Examples,
    /// Print the current indicator once (uses the hook cache)
    Status,
}

/// Application settings (from config file)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Indicator command (absolute path, or a name resolved on PATH)
    #[serde(default = "default_indicator_command")]
    pub indicator_command: PathBuf,

    /// Arguments placed before the mode argument (e.g. `["run", "--"]`)
    #[serde(default)]
    pub indicator_args: Vec<String>,

    /// Timeout for one indicator command call in seconds
    #[serde(default = "default_command_timeout")]
    pub command_timeout_secs: u64,

    /// Age under which a cached indicator is served, in seconds
    #[serde(default = "default_cache_freshness")]
    pub cache_freshness_secs: u64,

    /// Demo panel refresh interval in seconds
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    /// Cache file location (defaults to the per-user state directory)
    #[serde(default)]
    pub cache_path: Option<PathBuf>,
}

fn default_indicator_command() -> PathBuf {
    PathBuf::from("ctir-model-indicator.sh")
}

fn default_command_timeout() -> u64 {
    5
}

fn default_cache_freshness() -> u64 {
    5
}

fn default_refresh_interval() -> u64 {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indicator_command: default_indicator_command(),
            indicator_args: Vec::new(),
            command_timeout_secs: default_command_timeout(),
            cache_freshness_secs: default_cache_freshness(),
            refresh_interval_secs: default_refresh_interval(),
            cache_path: None,
        }
    }
}

impl Settings {
    /// Load settings from config file or use defaults
    ///
    /// An explicit path that does not exist falls through to the default
    /// locations.
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        // Try custom path first
        if let Some(p) = path {
            if p.exists() {
                return Self::read_file(p);
            }
        }

        if let Some(p) = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from) {
            if p.exists() {
                return Self::read_file(&p);
            }
        }

        // Try default config locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("ctir/footer.toml")),
            dirs::home_dir().map(|p| p.join(".config/ctir/footer.toml")),
            dirs::home_dir().map(|p| p.join(".ctir-footer.toml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::read_file(path);
            }
        }

        // Return defaults if no config file found
        Ok(Self::default())
    }

    fn read_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Validate and normalize settings values
    ///
    /// Durations have a one second floor so the demo loop never spins and
    /// the command always gets a usable window.
    pub fn validate(&mut self) {
        const MIN_SECS: u64 = 1;

        if self.command_timeout_secs < MIN_SECS {
            self.command_timeout_secs = MIN_SECS;
        }
        if self.cache_freshness_secs < MIN_SECS {
            self.cache_freshness_secs = MIN_SECS;
        }
        if self.refresh_interval_secs < MIN_SECS {
            self.refresh_interval_secs = MIN_SECS;
        }
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }

    pub fn cache_freshness(&self) -> Duration {
        Duration::from_secs(self.cache_freshness_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Resolved cache file path
    pub fn cache_file(&self) -> PathBuf {
        self.cache_path.clone().unwrap_or_else(default_cache_path)
    }
}
