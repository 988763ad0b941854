//! TOML configuration: the minimum level and where each sink points.
//!
//! Every field carries `#[serde(default)]`, so an empty or missing file still yields a
//! working console logger.

use crate::internal;
use crate::level::LOG_DEBUG;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Sink value that keeps the console slot untouched.
pub const STDOUT: &str = "stdout";
/// Sink value that redirects to the process error stream.
pub const STDERR: &str = "stderr";

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum level name. Not validated: unknown names filter like `debug`.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: LOG_DEBUG.to_string(),
        }
    }
}

/// Each value is `"stdout"`, `"stderr"`, or a file path (`~` and `$VAR` expand).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub stdout: String,
    pub stderr: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            stdout: STDOUT.to_string(),
            stderr: STDOUT.to_string(),
        }
    }
}

impl Config {
    /// Loads `<config_dir>/simplelog/config.toml`, falling back to defaults when absent.
    ///
    /// # Errors
    /// [`crate::Error::ConfigDirNotFound`] when the platform has no config directory,
    /// I/O and parse errors for an unreadable or malformed file.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Loads from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// I/O errors reading the file, parse errors for malformed TOML.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug(&format!(
                "Config file {} not found, using defaults",
                path.display()
            ));
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        internal::info(&format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// Parse errors for malformed TOML or mistyped fields.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    /// [`crate::Error::ConfigDirNotFound`] when the platform has no config directory.
    pub fn default_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "simplelog")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }
}
