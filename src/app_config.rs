use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::parsers::CaptionFormat;

/// Application configuration module
/// This module handles the command-line configuration: loading, validating
/// and defaulting the settings stored in `conf.json`.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Conversion settings
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings applied when converting caption files
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ConversionConfig {
    /// Directory receiving converted files (next to the input when unset)
    #[serde(default)]
    pub output_dir: Option<String>,

    /// Whether existing `.vtt` files may be overwritten
    #[serde(default)]
    pub force_overwrite: bool,

    /// Input format to assume instead of detecting it from the extension
    #[serde(default)]
    pub input_format: Option<CaptionFormat>,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load `path` when it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            log::debug!("Config file not found at '{}', using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(output_dir) = &self.conversion.output_dir {
            if output_dir.trim().is_empty() {
                return Err(anyhow!("Output directory must not be empty when set"));
            }
            let path = Path::new(output_dir);
            if path.exists() && !path.is_dir() {
                return Err(anyhow!("Output directory is not a directory: {}", output_dir));
            }
        }

        Ok(())
    }
}
