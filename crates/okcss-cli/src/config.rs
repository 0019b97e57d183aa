//! Optional YAML configuration.
//!
//! ```yaml
//! # okcss.yaml
//! preset-dir: .okcss/presets
//! format: tailwind
//! ```
//!
//! Command-line flags and their environment variables win over the file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use okcss::ExportFormat;
use serde::Deserialize;
use thiserror::Error;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "okcss.yaml";

/// Preset directory used when neither flag, environment nor file sets one.
pub const DEFAULT_PRESET_DIR: &str = ".okcss/presets";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    pub preset_dir: Option<PathBuf>,
    /// Export format used when a command gets no `--format`.
    pub format: ExportFormat,
}

impl Config {
    /// Loads `explicit`, or `./okcss.yaml` if it exists, or the defaults.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn parse(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// The preset directory: `flag` first, then the file, then the default.
    pub fn preset_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.preset_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PRESET_DIR))
    }

    /// The export format: `flag` first, then the file.
    pub fn format(&self, flag: Option<ExportFormat>) -> ExportFormat {
        flag.unwrap_or(self.format)
    }
}
