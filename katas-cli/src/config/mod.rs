//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Factorial demo configuration
    #[serde(default)]
    pub factorial: FactorialConfig,

    /// Maximum-subarray demo configuration
    #[serde(default)]
    pub subarray: SubarrayConfig,

    /// Word-count demo configuration
    #[serde(default)]
    pub word_count: WordCountConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file; missing sections keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Factorial-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FactorialConfig {
    /// Input used when none is given on the command line
    pub default_input: i64,
}

impl Default for FactorialConfig {
    fn default() -> Self {
        Self { default_input: 5 }
    }
}

/// Maximum-subarray-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SubarrayConfig {
    /// Sequence used when none is given on the command line
    pub default_values: Vec<i32>,

    /// List every contiguous subarray before the results
    pub show_subarrays: bool,
}

impl Default for SubarrayConfig {
    fn default() -> Self {
        Self {
            default_values: vec![-2, 1, -3, 4, -1, 2, 1, -5, 4],
            show_subarrays: false,
        }
    }
}

/// Word-count-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct WordCountConfig {
    /// Text used when none is given on the command line
    pub default_text: String,
}

impl Default for WordCountConfig {
    fn default() -> Self {
        Self {
            default_text: " abc  def ghi ".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub default_format: OutputFormat,
}
