//! Application configuration.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings loaded from a TOML file, then overridden from the command line.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How long the computer "thinks" before replying, in milliseconds.
    computer_delay_ms: u64,

    /// Background music volume (0.0 - 1.0).
    music_volume: f32,

    /// Start with music muted.
    start_muted: bool,

    /// Log file; the terminal is owned by the UI.
    log_file: PathBuf,

    /// Seed for the computer's corner/side tie-breaks.
    seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            computer_delay_ms: 500,
            music_volume: 0.3,
            start_muted: false,
            log_file: PathBuf::from("tictactoe.log"),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.music_volume = config.music_volume.clamp(0.0, 1.0);
        info!(?config, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip_all)]
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(delay) = cli.delay_ms {
            self.computer_delay_ms = delay;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if cli.muted {
            self.start_muted = true;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
    }

    /// The computer's thinking delay.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
