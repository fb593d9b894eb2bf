//! The checker record: one external command template paired with a category
//!
//! A checker is pure data. The execution engine decides whether it applies
//! (based on discovered files) and how its argument list is completed.

use crate::types::{Category, CheckerId};

/// How a checker's argument list is completed at invocation time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The checker performs its own file discovery; it receives the root path
    Tree,
    /// The checker receives the discovered files of its category as arguments
    FileList,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Tree => "tree",
            Target::FileList => "file-list",
        }
    }
}

/// An external checker invocation template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checker {
    /// Stable identifier, used in config and `--only` selection
    pub id: CheckerId,
    /// One-line description for `list` output
    pub description: String,
    /// Category gating this checker (skipped when the category is empty)
    pub category: Category,
    /// Program followed by its fixed flags
    pub command: Vec<String>,
    /// Whether the root or the category file list is appended
    pub target: Target,
    /// True for checkers that may mutate files (auto-fix)
    pub fix: bool,
}

impl Checker {
    /// The program name, i.e. the first element of the command template.
    ///
    /// Empty templates are rejected at config validation and again by the
    /// execution engine before invocation.
    pub fn program(&self) -> &str {
        self.command.first().map(String::as_str).unwrap_or("")
    }

    /// The command template rendered as a single shell-like line for display
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}
