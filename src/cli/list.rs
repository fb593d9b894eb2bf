//! List command implementation
//!
//! Shows the effective checker set after configuration is applied: ID,
//! category, full command line, and whether the checker may modify files.

use crate::cli::args::OutputFormatArg;
use crate::cli::common::{self, EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS};
use crate::config::checkrun_toml::OutputFormat;
use crate::error::{ConfigError, DispatchError};
use crate::output::checker_status::{
    CheckerStatus, CheckerStatusHumanFormatter, CheckerStatusJsonlFormatter,
};
use std::path::Path;

/// Run the list command
///
/// # Returns
///
/// Exit code: 0 on success, 2 on configuration errors, 3 on parse errors.
pub fn run_list(root: &str, format: Option<OutputFormatArg>) -> i32 {
    match list_inner(root, format) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                DispatchError::Config(ConfigError::Parse(_)) => EXIT_PARSE_ERROR,
                _ => EXIT_ERROR,
            }
        }
    }
}

fn list_inner(root: &str, format: Option<OutputFormatArg>) -> Result<(), DispatchError> {
    let root = Path::new(root);
    let config = common::load_config(root)?;
    let registry = common::build_registry(&config)?;

    let statuses: Vec<CheckerStatus> = registry.iter().map(CheckerStatus::from_checker).collect();

    let format: OutputFormat = format.map(Into::into).unwrap_or(config.output.format);
    match format {
        OutputFormat::Human => CheckerStatusHumanFormatter::new().write_to_stdout(&statuses),
        OutputFormat::Jsonl => CheckerStatusJsonlFormatter::new().write_to_stdout(&statuses),
    }

    Ok(())
}
