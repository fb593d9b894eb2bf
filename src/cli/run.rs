//! Run command implementation
//!
//! This module implements `checkrun run` (also the bare `checkrun`
//! invocation), which:
//! - Loads the optional checkrun.toml
//! - Builds the checker registry (config overrides, `--only` selection)
//! - Discovers candidate files with the selected strategy
//! - Invokes each applicable checker as a blocking subprocess
//! - Aggregates exit statuses and prints a summary
//! - Returns the appropriate exit code

use crate::cli::args::{DiscoveryMode, OutputFormatArg};
use crate::cli::common::{
    self, EXIT_ERROR, EXIT_FINDINGS, EXIT_PARSE_ERROR, EXIT_SUCCESS,
};
use crate::config::checkrun_toml::{ColorOption, OutputFormat};
use crate::engine::executor::ExecutionEngine;
use crate::error::{CheckerError, ConfigError, DispatchError};
use crate::output::run_report::{RunReportHumanFormatter, RunReportJsonlFormatter};
use crate::types::CheckerId;
use std::path::Path;
use termcolor::StandardStream;

/// Options for the run command, resolved from CLI arguments
#[derive(Debug, Default)]
pub struct RunOptions {
    pub root: String,
    pub discovery: Option<DiscoveryMode>,
    pub format: Option<OutputFormatArg>,
    pub only: Vec<String>,
    pub fail_fast: bool,
    pub color: Option<ColorOption>,
}

/// Run the checker sequence
///
/// This is the main entry point for the run command. It coordinates all the
/// components and returns an appropriate exit code.
///
/// # Returns
///
/// Exit code:
/// - 0: Success (every invoked checker passed, or nothing to check)
/// - 1: Findings (one or more checkers reported findings)
/// - 2: Error (missing checker binary, I/O or configuration error)
/// - 3: Parse error (invalid checkrun.toml)
pub fn run_run(options: &RunOptions) -> i32 {
    match run_inner(options) {
        Ok(passed) => {
            if passed {
                EXIT_SUCCESS
            } else {
                EXIT_FINDINGS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                DispatchError::Config(ConfigError::Parse(_)) => EXIT_PARSE_ERROR,
                _ => EXIT_ERROR,
            }
        }
    }
}

/// Internal implementation of the run command
fn run_inner(options: &RunOptions) -> Result<bool, DispatchError> {
    let root = Path::new(&options.root);

    // 1. Load checkrun.toml (defaults when absent)
    let config = common::load_config(root)?;

    // 2. Build the checker registry and apply --only selection
    let mut registry = common::build_registry(&config)?;
    let only = parse_only(&options.only)?;
    registry.retain_only(&only)?;

    if registry.is_empty() {
        eprintln!("Warning: No checkers are enabled. Nothing to check.");
        return Ok(true);
    }

    // 3. Resolve effective settings: CLI flags override config
    let strategy = options
        .discovery
        .map(Into::into)
        .unwrap_or(config.checkrun.discovery);
    let format: OutputFormat = options
        .format
        .map(Into::into)
        .unwrap_or(config.output.format);
    let fail_fast = options.fail_fast || config.checkrun.fail_fast;
    let color = options.color.unwrap_or(config.output.color);

    // 4. Discover candidate files
    let files = common::discover_files(root, strategy, &config)?;

    if format == OutputFormat::Human {
        eprintln!(
            "Discovered {} files ({} discovery), dispatching {} checkers...",
            files.len(),
            strategy,
            registry.len()
        );
    }

    // 5. Dispatch the checker sequence
    let engine = ExecutionEngine::new(registry, root, fail_fast);
    let result = engine.execute(&files)?;

    // 6. Print the summary
    match format {
        OutputFormat::Human => {
            let mut stdout = StandardStream::stdout(common::color_choice(color));
            RunReportHumanFormatter::new().write_colored(&result, &mut stdout)?;
        }
        OutputFormat::Jsonl => {
            print!("{}", RunReportJsonlFormatter::new().format(&result));
        }
    }

    Ok(result.passed)
}

/// Parse and validate the `--only` checker IDs
fn parse_only(only: &[String]) -> Result<Vec<CheckerId>, CheckerError> {
    only.iter()
        .map(|s| {
            CheckerId::new(s.as_str()).ok_or_else(|| {
                CheckerError::InvalidDefinition(format!("invalid checker ID '{s}'"))
            })
        })
        .collect()
}
