// crates/vouch-cli/src/config.rs
//
// Runtime configuration for the Vouch CLI.
// Loaded from a TOML file or populated with sensible defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use vouch_core::VouchError;
use vouch_reputation::ReputationOptions;

use crate::output::OutputFormat;

/// Runtime configuration for the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format: "table" or "json".
    #[serde(default)]
    pub output: OutputFormat,

    /// Reputation engine options (`[reputation]` table).
    #[serde(default)]
    pub reputation: ReputationOptions,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output: OutputFormat::default(),
            reputation: ReputationOptions::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// reputation options are out of range.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VouchError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(VouchError::NotFound(path.display().to_string()));
        }
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, VouchError> {
        let config: CliConfig =
            toml::from_str(contents).map_err(|e| VouchError::InvalidConfig(e.to_string()))?;
        config.reputation.validate()?;
        Ok(config)
    }
}
