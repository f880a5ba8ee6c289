//! Configuration file handling for optskel.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up by [`Config::find_from`].
pub const CONFIG_FILE: &str = "optskel.toml";

/// Represents the optskel.toml configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub parser: ParserSettings,
}

/// Settings of the generated parser that the skeletons depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserSettings {
    pub name: String,
    #[serde(default = "default_handle_error")]
    pub handle_error: bool,
    #[serde(default)]
    pub indent: usize,
}

const fn default_handle_error() -> bool {
    true
}

impl Config {
    /// Creates a new default configuration for the given parser name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            parser: ParserSettings {
                name: name.into(),
                handle_error: default_handle_error(),
                indent: 0,
            },
        }
    }

    /// Loads configuration from an optskel.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;

        toml::from_str(&contents).with_context(|| format!("Failed to parse {CONFIG_FILE}"))
    }

    /// Saves configuration to an optskel.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration")?;

        fs::write(path.as_ref(), contents)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))
    }

    /// Finds the optskel.toml file starting from `start` and walking up its parents.
    ///
    /// # Errors
    /// Returns an error if no optskel.toml is found or the one found cannot be loaded.
    pub fn find_from(start: impl Into<PathBuf>) -> Result<(Self, PathBuf)> {
        match Self::find_optional_from(start)? {
            Some(found) => Ok(found),
            None => anyhow::bail!(
                "Could not find {CONFIG_FILE} in the project directory or any parent directory"
            ),
        }
    }

    /// Like [`Config::find_from`], but a missing optskel.toml is not an error.
    ///
    /// # Errors
    /// Returns an error if an optskel.toml is found but cannot be loaded.
    pub fn find_optional_from(start: impl Into<PathBuf>) -> Result<Option<(Self, PathBuf)>> {
        let mut current_dir = start.into();

        loop {
            let config_path = current_dir.join(CONFIG_FILE);
            if config_path.exists() {
                let config = Self::load(&config_path)?;
                return Ok(Some((config, current_dir)));
            }

            if !current_dir.pop() {
                return Ok(None);
            }
        }
    }

    /// Checks that the configured parser name can be pasted into C identifiers.
    ///
    /// # Errors
    /// Returns an error if the parser name is not a valid C identifier.
    pub fn validate(&self) -> Result<()> {
        optskel_core::validate_parser_name(&self.parser.name)
            .with_context(|| format!("Invalid [parser] section in {CONFIG_FILE}"))
    }
}
