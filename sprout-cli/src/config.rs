//! Configuration loading and validation for Sprout.
//!
//! This module implements the `sprout.yaml` schema and provides utilities for
//! loading, validating, and expanding paths in the configuration.
//!
//! # Configuration File
//!
//! The file is optional and only read when passed with `--config`. Without it
//! the built-in defaults apply (the React starter written to the default base
//! directory).
//!
//! # Environment Variable Overrides
//!
//! - `SPROUT_BASE_DIR`: Override the base directory (`sprout emit` only; a bare
//!   `sprout` run reads no environment)

use serde::{Deserialize, Serialize};
use sprout_emit::{EmitConfig, OutputFile, starter};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file name written by `sprout init`.
pub const DEFAULT_CONFIG_FILE: &str = "sprout.yaml";

/// Environment variable that overrides `base_dir`.
pub const BASE_DIR_ENV: &str = "SPROUT_BASE_DIR";

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    /// Failed to read the configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse the YAML configuration.
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Root configuration structure for `sprout.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SproutConfig {
    /// Directory all output paths are resolved against.
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Whether the bundled React starter files are written.
    #[serde(default = "default_include_starter")]
    pub include_starter: bool,

    /// Extra files, written after the starter files.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileEntry>,
}

/// An extra file declared in the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to `base_dir`.
    pub path: String,
    /// Literal content.
    #[serde(default)]
    pub content: String,
}

impl Default for SproutConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            include_starter: default_include_starter(),
            files: Vec::new(),
        }
    }
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(starter::DEFAULT_BASE_DIR)
}

fn default_include_starter() -> bool {
    true
}

impl SproutConfig {
    /// Load from an explicit path or fall back to defaults, then apply a
    /// base directory override (normally the value of `SPROUT_BASE_DIR`).
    ///
    /// Nothing is read from the working directory implicitly.
    pub fn resolve(
        explicit: Option<&Path>,
        base_dir_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::read_file(path)?,
            None => Self::default(),
        };

        config.apply_base_dir_override(base_dir_override);
        config.expand_paths(dirs::home_dir())?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::read_file(path)?;
        config.expand_paths(dirs::home_dir())?;
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Replace `base_dir` when an override value is present and non-empty.
    pub fn apply_base_dir_override(&mut self, value: Option<String>) {
        if let Some(dir) = value.filter(|v| !v.trim().is_empty()) {
            self.base_dir = PathBuf::from(dir);
        }
    }

    /// Expand a leading `~` in `base_dir` to the home directory.
    pub fn expand_paths(&mut self, home: Option<PathBuf>) -> Result<(), ConfigError> {
        let raw = self.base_dir.to_str();
        let needs_home = raw == Some("~") || raw.is_some_and(|s| s.starts_with("~/"));
        if !needs_home {
            return Ok(());
        }

        let home = home.ok_or_else(|| {
            ConfigError::ValidationError("Cannot determine home directory".into())
        })?;

        self.base_dir = match raw.and_then(|s| s.strip_prefix("~/")) {
            Some(rest) => home.join(rest),
            None => home,
        };

        Ok(())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError("base_dir must not be empty".into()));
        }

        if !self.include_starter && self.files.is_empty() {
            return Err(ConfigError::ValidationError(
                "Nothing to write. Enable include_starter or list files".into(),
            ));
        }

        // Path safety (traversal, duplicates) is checked by the emitter itself.
        for entry in &self.files {
            if entry.path.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "Every entry in files needs a non-empty path".into(),
                ));
            }
        }

        Ok(())
    }

    /// Build the emitter input: starter files first, then extra files.
    pub fn to_emit_config(&self) -> EmitConfig {
        let mut config = EmitConfig::new(&self.base_dir);
        if self.include_starter {
            config = config.with_files(starter::starter_files());
        }
        config.with_files(
            self.files
                .iter()
                .map(|entry| OutputFile::new(&entry.path, &entry.content)),
        )
    }
}
