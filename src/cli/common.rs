//! Common helper functions shared across CLI commands
//!
//! This module provides shared functionality for loading configuration,
//! discovering files, and building the checker registry.

use crate::checkers::registry::CheckerRegistry;
use crate::config::checkrun_toml::{ColorOption, Config};
use crate::engine::file_walker::{FileEntry, FileWalker, FileWalkerError};
use crate::error::{CheckerError, ConfigError};
use crate::types::DiscoveryStrategy;
use std::io::IsTerminal;
use std::path::Path;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Name of the configuration file looked up under the run root
pub const CONFIG_FILE: &str = "checkrun.toml";

/// Load checkrun.toml from the given root.
///
/// An absent config file is not an error: the built-in defaults apply, so a
/// bare `checkrun` works in an unconfigured tree.
///
/// # Errors
///
/// Returns `ConfigError::Parse` if the file exists but is invalid TOML, or
/// `ConfigError::Validation`/`ConfigError::Io` for other problems.
pub(crate) fn load_config(root: &Path) -> Result<Config, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(Config::default());
    }

    Config::load(config_path)
}

/// Discover candidate files under the root using the given strategy
///
/// # Errors
///
/// Returns `FileWalkerError` if a pattern is invalid or the walk fails.
pub(crate) fn discover_files(
    root: &Path,
    strategy: DiscoveryStrategy,
    config: &Config,
) -> Result<Vec<FileEntry>, FileWalkerError> {
    let walker = FileWalker::new(
        root,
        strategy,
        &config.checkrun.include,
        &config.checkrun.exclude,
    )?;

    let mut files = Vec::new();
    for result in walker.walk() {
        files.push(result?);
    }

    Ok(files)
}

/// Build the checker registry from configuration
///
/// # Errors
///
/// Returns `CheckerError` if the config names an unknown checker or holds an
/// invalid override.
pub(crate) fn build_registry(config: &Config) -> Result<CheckerRegistry, CheckerError> {
    CheckerRegistry::build_from_config(config)
}

/// Resolve the effective color choice for stdout
pub(crate) fn color_choice(option: ColorOption) -> termcolor::ColorChoice {
    match option {
        ColorOption::Always => termcolor::ColorChoice::Always,
        ColorOption::Never => termcolor::ColorChoice::Never,
        ColorOption::Auto => {
            if std::io::stdout().is_terminal() {
                termcolor::ColorChoice::Auto
            } else {
                termcolor::ColorChoice::Never
            }
        }
    }
}
