//! Match configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a console match.
///
/// Every field is optional; missing values fall back to command-line flags or
/// an interactive prompt.
///
/// ```toml
/// player_one = "Ada"
/// player_two = "Grace"
/// seed = 42
/// instructions = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Name of Player 1.
    player_one: Option<String>,

    /// Name of Player 2.
    player_two: Option<String>,

    /// Seed for the coin toss that decides who goes first.
    seed: Option<u64>,

    /// Whether to show the instruction guide before the match.
    instructions: Option<bool>,
}

impl MatchConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(?config, "Match config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Layers `overrides` on top of `self`; set fields in `overrides` win.
    #[instrument(skip_all)]
    pub fn merged_with(self, overrides: MatchConfig) -> MatchConfig {
        MatchConfig {
            player_one: overrides.player_one.or(self.player_one),
            player_two: overrides.player_two.or(self.player_two),
            seed: overrides.seed.or(self.seed),
            instructions: overrides.instructions.or(self.instructions),
        }
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
