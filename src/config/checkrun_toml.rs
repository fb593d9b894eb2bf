//! Parsing and validation for checkrun.toml configuration files
//!
//! The config file is optional: an absent file means built-in defaults, so
//! the bare `checkrun` invocation works in an unconfigured tree.

use crate::error::ConfigError;
use crate::types::{CheckerId, DiscoveryStrategy, GlobPattern};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Main configuration struct for checkrun.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Dispatcher settings
    #[serde(default)]
    pub checkrun: CheckrunMeta,

    /// Per-checker overrides, keyed by checker ID
    #[serde(default)]
    pub checkers: BTreeMap<CheckerId, CheckerValue>,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.checkrun.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '1'",
                self.checkrun.version
            )));
        }

        // Validate glob patterns by attempting to compile them with globset
        for pattern in &self.checkrun.include {
            globset::Glob::new(pattern.as_str()).map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid include glob pattern '{}': {}",
                    pattern.as_str(),
                    e
                ))
            })?;
        }

        for pattern in &self.checkrun.exclude {
            globset::Glob::new(pattern.as_str()).map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid exclude glob pattern '{}': {}",
                    pattern.as_str(),
                    e
                ))
            })?;
        }

        // Command overrides must name a program
        for (id, value) in &self.checkers {
            if let CheckerValue::Settings(settings) = value
                && let Some(command) = &settings.command
                && command.is_empty()
            {
                return Err(ConfigError::Validation(format!(
                    "Empty command override for checker '{}'",
                    id.as_str()
                )));
            }
        }

        Ok(())
    }
}

/// Dispatcher settings section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckrunMeta {
    /// Configuration version (must be "1")
    #[serde(default = "default_version")]
    pub version: String,

    /// File discovery strategy
    #[serde(default)]
    pub discovery: DiscoveryStrategy,

    /// File patterns to include (empty means include all)
    #[serde(default)]
    pub include: Vec<GlobPattern>,

    /// File patterns to exclude
    #[serde(default)]
    pub exclude: Vec<GlobPattern>,

    /// Stop after the first failing checker instead of running all of them
    #[serde(default)]
    pub fail_fast: bool,
}

fn default_version() -> String {
    "1".to_string()
}

impl Default for CheckrunMeta {
    fn default() -> Self {
        Self {
            version: default_version(),
            discovery: DiscoveryStrategy::default(),
            include: Vec::new(),
            exclude: Vec::new(),
            fail_fast: false,
        }
    }
}

/// A checker can be enabled with a boolean or configured with settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckerValue {
    /// Simple boolean enable/disable
    Enabled(bool),
    /// Settings table for the checker
    Settings(CheckerSettings),
}

/// Settings for individual checkers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckerSettings {
    /// Replacement argv (program plus fixed flags), e.g. a package-runner
    /// wrapper like `["npx", "--yes", "dclint"]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,

    /// Extra arguments appended after the command template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: ColorOption::Auto,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON Lines format
    Jsonl,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}
