//! Initialize a checkrun project
//!
//! Creates a commented default configuration file.

use std::fs;
use std::path::Path;

/// Default content for checkrun.toml
const DEFAULT_CHECKRUN_TOML: &str = r#"[checkrun]
version = "1"

# File discovery strategy: "vcs-aware" (tracked + untracked-not-ignored)
# or "filesystem-walk" (everything under the root)
# discovery = "vcs-aware"

# File patterns to include (defaults to all)
# include = ["src/**", "scripts/**"]

# File patterns to exclude
# exclude = ["**/vendor/**"]

# Stop after the first failing checker
# fail_fast = false

[checkers]
# Built-in checkers are enabled by default:
#   ruff-check, ruff-format, shellcheck, shfmt, yamllint, dclint
# Disable a checker:   shellcheck = false
# Append extra args:   shellcheck = { args = ["--external-sources"] }
# Replace the command: dclint = { command = ["npx", "--yes", "dclint"], args = ["--fix", "--max-warnings", "0"] }

[output]
format = "human"
"#;

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of init command
#[derive(Debug, PartialEq, Eq)]
pub struct InitResult {
    /// Files that were created
    pub created: Vec<String>,
    /// Files that were skipped (already existed)
    pub skipped: Vec<String>,
    /// Files that were overwritten
    pub overwritten: Vec<String>,
}

impl InitResult {
    fn new() -> Self {
        Self {
            created: Vec::new(),
            skipped: Vec::new(),
            overwritten: Vec::new(),
        }
    }
}

/// Run the init command
///
/// Creates checkrun.toml in the current directory.
///
/// # Arguments
/// * `force` - If true, overwrite an existing file. If false, skip it.
///
/// # Returns
/// * `Ok(InitResult)` - Summary of created/skipped/overwritten files
/// * `Err(InitError)` - If an I/O error occurred
pub fn run_init(force: bool) -> Result<InitResult, InitError> {
    let mut result = InitResult::new();

    handle_file(
        Path::new("checkrun.toml"),
        DEFAULT_CHECKRUN_TOML,
        force,
        &mut result,
    )?;

    Ok(result)
}

/// Handle creation of a single file
fn handle_file(
    path: &Path,
    content: &str,
    force: bool,
    result: &mut InitResult,
) -> Result<(), InitError> {
    let path_str = path.display().to_string();

    if path.exists() {
        if force {
            fs::write(path, content)?;
            result.overwritten.push(path_str);
        } else {
            result.skipped.push(path_str);
        }
    } else {
        fs::write(path, content)?;
        result.created.push(path_str);
    }

    Ok(())
}
