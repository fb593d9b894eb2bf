#![forbid(unsafe_code)]

//! CheckerStatus output formatters
//!
//! This module provides formatters for displaying the effective checker set
//! from the `checkrun list` command. It supports both human-readable and
//! JSONL output formats.

use crate::checkers::checker::Checker;
use serde::Serialize;

/// Status information for a single configured checker
#[derive(Debug, Clone)]
pub struct CheckerStatus {
    pub id: String,
    pub description: String,
    pub category: String,
    pub command_line: String,
    pub target: String,
    pub fix: bool,
}

impl CheckerStatus {
    /// Builds the status view of a checker
    pub fn from_checker(checker: &Checker) -> Self {
        Self {
            id: checker.id.as_str().to_string(),
            description: checker.description.clone(),
            category: checker.category.as_str().to_string(),
            command_line: checker.command_line(),
            target: checker.target.as_str().to_string(),
            fix: checker.fix,
        }
    }
}

/// Human-readable formatter for checker status
pub struct CheckerStatusHumanFormatter;

impl CheckerStatusHumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        CheckerStatusHumanFormatter
    }

    /// Format a list of checker statuses for human consumption
    pub fn format(&self, statuses: &[CheckerStatus]) -> String {
        let mut output = String::new();

        output.push_str(&format!("Checkers ({} enabled):\n", statuses.len()));
        output.push('\n');

        for status in statuses {
            output.push_str(&format!("{} ({})\n", status.id, status.category));
            output.push_str(&format!("  Description: {}\n", status.description));
            output.push_str(&format!("  Command: {}\n", status.command_line));
            output.push_str(&format!("  Target: {}\n", status.target));
            if status.fix {
                output.push_str("  May modify files (auto-fix)\n");
            }
            output.push('\n');
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, statuses: &[CheckerStatus]) {
        print!("{}", self.format(statuses));
    }
}

impl Default for CheckerStatusHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL output structure for checker status
#[derive(Debug, Serialize)]
struct JsonlCheckerStatus<'a> {
    id: &'a str,
    category: &'a str,
    description: &'a str,
    command: &'a str,
    target: &'a str,
    fix: bool,
}

/// JSONL formatter for checker status
pub struct CheckerStatusJsonlFormatter;

impl CheckerStatusJsonlFormatter {
    /// Create a new JSONL formatter
    pub fn new() -> Self {
        CheckerStatusJsonlFormatter
    }

    /// Format a list of checker statuses as JSONL
    ///
    /// Returns a string with one JSON object per line for each checker.
    pub fn format(&self, statuses: &[CheckerStatus]) -> String {
        let mut output = String::new();

        for status in statuses {
            let jsonl_status = JsonlCheckerStatus {
                id: &status.id,
                category: &status.category,
                description: &status.description,
                command: &status.command_line,
                target: &status.target,
                fix: status.fix,
            };

            if let Ok(json) = serde_json::to_string(&jsonl_status) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, statuses: &[CheckerStatus]) {
        print!("{}", self.format(statuses));
    }
}

impl Default for CheckerStatusJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
