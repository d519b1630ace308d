//! Player configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for the bingo player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BingoConfig {
    /// Directory holding `<id>.toml` / `<id>.json` show files.
    #[serde(default = "default_shows_dir")]
    shows_dir: PathBuf,

    /// Base URL of a show server. When set, shows are fetched over HTTP
    /// instead of from `shows_dir`.
    #[serde(default)]
    server_url: Option<String>,

    /// Seed for dealing cards. Unset means a fresh random seed per run.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_shows_dir() -> PathBuf {
    PathBuf::from("shows")
}

impl Default for BingoConfig {
    fn default() -> Self {
        Self {
            shows_dir: default_shows_dir(),
            server_url: None,
            seed: None,
        }
    }
}

impl BingoConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(shows_dir = %config.shows_dir.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from a TOML file, or the defaults if the file
    /// does not exist. A file that exists but fails to parse is an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        shows_dir: Option<PathBuf>,
        server_url: Option<String>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(dir) = shows_dir {
            self.shows_dir = dir;
        }
        if server_url.is_some() {
            self.server_url = server_url;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
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
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
