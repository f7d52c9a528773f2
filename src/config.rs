//! Configuration management and validation.
//!
//! Provides the processing configuration for the restaurant hours tools:
//! where to read restaurant/hours listings from and how to treat entries
//! that fail to parse. Values are layered: built-in defaults, then an
//! optional JSON config file, then command line overrides.

use crate::app::services::schedule_table::BuildMode;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_INPUT_EXTENSION};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Global configuration for restaurant hours processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input files, directories or glob patterns
    pub input_paths: Vec<PathBuf>,

    /// Strict aborts on the first unparsable schedule, permissive skips it
    pub build_mode: BuildMode,

    /// File extension picked up when walking input directories
    pub input_extension: String,

    /// Skip empty input files with a warning instead of failing
    pub skip_empty_files: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_paths: Vec::new(),
            build_mode: BuildMode::Strict,
            input_extension: DEFAULT_INPUT_EXTENSION.to_string(),
            skip_empty_files: true,
        }
    }
}

impl Config {
    /// Location of the per-user config file, if the platform has a config dir
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load a config file; missing fields take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config {}", path.display()), e))?;

        serde_json::from_str(&content).map_err(|e| {
            Error::configuration(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    /// Defaults overlaid with a config file
    ///
    /// An explicit path must exist. Without one, the per-user config file is
    /// used when present and silently ignored otherwise.
    pub fn load_layered(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("Loading config from {}", path.display());
            return Self::from_file(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => {
                debug!("Loading user config from {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Apply command line overrides
    ///
    /// Inputs given on the command line replace configured ones; `--permissive`
    /// can only relax the build mode, never tighten it.
    pub fn apply_overrides(mut self, inputs: &[PathBuf], permissive: bool) -> Self {
        if !inputs.is_empty() {
            self.input_paths = inputs.to_vec();
        }
        if permissive {
            self.build_mode = BuildMode::Permissive;
        }
        self
    }

    /// Set input paths
    pub fn with_input_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.input_paths = paths;
        self
    }

    /// Set the build mode
    pub fn with_build_mode(mut self, mode: BuildMode) -> Self {
        self.build_mode = mode;
        self
    }

    /// Set the extension used when walking directories
    pub fn with_input_extension(mut self, extension: impl Into<String>) -> Self {
        self.input_extension = extension.into();
        self
    }

    /// Treat empty input files as errors
    pub fn with_strict_empty_files(mut self) -> Self {
        self.skip_empty_files = false;
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.input_paths.is_empty() {
            return Err(Error::configuration(
                "No input specified; pass --input or set input_paths in the config file",
            ));
        }

        let extension = self.input_extension.trim_start_matches('.');
        if extension.trim().is_empty() {
            return Err(Error::configuration("input_extension must not be empty"));
        }

        Ok(())
    }
}
